use std::cmp::Ordering;
use itertools::Itertools;
use rayon::prelude::*;
use kbeval::prelude::{ EvalSettings, evaluate, read_prediction, read_reference };

use errors::*;
use input::BatchInput;

/// Median IE F1 of every model for one document, in the order of the models of the batch
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentScores {
    pub document: String,
    pub medians: Vec<Option<f64>>
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchScores {
    pub models: Vec<String>,
    pub documents: Vec<DocumentScores>
}

impl BatchScores {
    /// Mean over documents of the medians of a model, an undefined median counting as 0
    pub fn mean_of_medians(&self, model_idx: usize) -> Option<f64> {
        if self.documents.is_empty() {
            return None;
        }

        let total: f64 = self.documents.iter()
            .map(|d| d.medians[model_idx].unwrap_or(0.0))
            .sum();
        Some(total / self.documents.len() as f64)
    }
}

/// Upper median: the element at `n / 2` once sorted
pub fn median(scores: &[f64]) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }

    let mut sorted = scores.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    Some(sorted[sorted.len() / 2])
}

pub fn evaluate_document(input: &BatchInput, document: &str, settings: &EvalSettings) -> Result<DocumentScores> {
    let reference = read_reference(&input.reference_file(document))?;

    let medians = input.models.iter()
        .map(|model| {
            let scores = (1..=input.n_repeats)
                .map(|repeat| {
                    let predicted = read_prediction(&input.prediction_file(model, document, repeat));
                    evaluate(&reference, &predicted, settings).f_score()
                })
                .collect::<Vec<_>>();

            debug!("{} - {}: [{}]", document, model.name, scores.iter().join(", "));
            median(&scores)
        })
        .collect::<Vec<_>>();

    info!("{}: {:?}", document, medians);
    Ok(DocumentScores { document: document.to_owned(), medians })
}

/// Evaluate all documents (in parallel). Fails on the first document whose reference is missing.
pub fn run_batch(input: &BatchInput, settings: &EvalSettings) -> Result<BatchScores> {
    let documents = input.list_documents()?;
    info!("{} documents to evaluate with {} models, {} repeats", documents.len(), input.models.len(), input.n_repeats);

    let documents = documents.par_iter()
        .map(|document| evaluate_document(input, document, settings))
        .collect::<Result<Vec<_>>>()?;

    Ok(BatchScores {
        models: input.models.iter().map(|m| m.name.clone()).collect(),
        documents
    })
}
