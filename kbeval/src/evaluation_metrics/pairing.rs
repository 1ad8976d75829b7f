use std::fmt;
use algorithm::prelude::*;
use models::*;

/// Outcome of the pairing for one relation: a reference matched with a prediction, or a relation
/// left alone on its side (then its score is 0)
#[derive(Debug, Clone, PartialEq)]
pub struct Pair<'a> {
    pub reference: Option<&'a MergedRelation>,
    pub prediction: Option<&'a RawRelation>,
    pub score: f64
}

impl<'a> Pair<'a> {
    pub fn paired(reference: &'a MergedRelation, prediction: &'a RawRelation, score: f64) -> Pair<'a> {
        Pair { reference: Some(reference), prediction: Some(prediction), score }
    }

    pub fn reference_only(reference: &'a MergedRelation) -> Pair<'a> {
        Pair { reference: Some(reference), prediction: None, score: 0.0 }
    }

    pub fn prediction_only(prediction: &'a RawRelation) -> Pair<'a> {
        Pair { reference: None, prediction: Some(prediction), score: 0.0 }
    }

    #[inline]
    pub fn is_paired(&self) -> bool {
        self.reference.is_some() && self.prediction.is_some()
    }

    #[inline]
    pub fn is_reference_only(&self) -> bool {
        self.prediction.is_none()
    }

    #[inline]
    pub fn is_prediction_only(&self) -> bool {
        self.reference.is_none()
    }
}

impl<'a> fmt::Display for Pair<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (self.reference, self.prediction) {
            (Some(r), Some(p)) => write!(f, "Pair({:?} ~ {}: {})", r, p, self.score),
            (Some(r), None) => write!(f, "Pair({:?} ~ _)", r),
            (None, Some(p)) => write!(f, "Pair(_ ~ {})", p),
            (None, None) => write!(f, "Pair(_ ~ _)"),
        }
    }
}

/// Pair references with predictions so that the sum of the similarities of paired relations is
/// maximal, every relation being used at most once.
///
/// References come first in the result (in their order, paired or not), followed by the
/// predictions left unpaired (in their order). An assignment of similarity 0 is not a pairing: both
/// relations are reported alone.
pub fn optimal_pairs<'a, F>(references: &'a [MergedRelation], predictions: &[&'a RawRelation], similarity: F) -> Vec<Pair<'a>>
    where F: Fn(&MergedRelation, &RawRelation) -> f64 {
    let weights = Matrix::from_fn(references.len(), predictions.len(), |i, j| similarity(&references[i], predictions[j]));
    let ref2pred = max_weight_assignment(&weights);

    let mut pairs = Vec::with_capacity(references.len() + predictions.len());
    let mut pred_paired = vec![false; predictions.len()];

    for (i, rel) in references.iter().enumerate() {
        match ref2pred[i] {
            Some(j) if weights[(i, j)] > 0.0 => {
                pred_paired[j] = true;
                pairs.push(Pair::paired(rel, predictions[j], weights[(i, j)]));
            },
            _ => pairs.push(Pair::reference_only(rel))
        }
    }

    for (j, &pred) in predictions.iter().enumerate() {
        if !pred_paired[j] {
            pairs.push(Pair::prediction_only(pred));
        }
    }

    pairs
}
