use std::io::Write;
use std::fs::File;
use std::path::Path;
use csv;
use prettytable::Table;
use kbeval::prelude::Evaluation;

use errors::*;
use batch::BatchScores;

fn fmt_score(score: Option<f64>) -> String {
    match score {
        None => "n/a".to_owned(),
        Some(s) => format!("{:.4}", s)
    }
}

/// A cell of the batch report. A median of 0, or no median at all, is written `0.0`
pub fn format_cell(median: Option<f64>) -> String {
    match median {
        Some(m) if m != 0.0 => format!("{:?}", m),
        _ => "0.0".to_owned()
    }
}

/// Tab separated report: one column per model, one row per document
pub fn write_tsv<W: Write>(writer: W, scores: &BatchScores) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_writer(writer);

    let mut header = vec![String::new()];
    header.extend(scores.models.iter().cloned());
    wtr.write_record(&header)?;

    for doc in &scores.documents {
        let mut record = vec![doc.document.clone()];
        record.extend(doc.medians.iter().map(|&m| format_cell(m)));
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn write_tsv_file(foutput: &Path, scores: &BatchScores) -> Result<()> {
    let file = File::create(foutput)
        .chain_err(|| format!("cannot create report {}", foutput.display()))?;
    write_tsv(file, scores)
}

pub fn print_scores(eval: &Evaluation) {
    let mut table = Table::new();
    table.add_row(row!["scores", "tp", "fp", "fn", "precision", "recall", "f1"]);
    table.add_row(row!["base", eval.base.tp, eval.base.fp, eval.base.fn_,
        fmt_score(eval.base.precision), fmt_score(eval.base.recall), fmt_score(eval.base.f_score)]);
    table.add_row(row!["ie", eval.ie.tp, eval.ie.fp, eval.ie.fn_,
        fmt_score(eval.ie.precision), fmt_score(eval.ie.recall), fmt_score(eval.ie.f_score)]);
    table.printstd();
}

pub fn print_summary(scores: &BatchScores) {
    let mut table = Table::new();
    table.add_row(row!["model", "documents", "mean median f1"]);
    for (i, model) in scores.models.iter().enumerate() {
        table.add_row(row![model, scores.documents.len(), fmt_score(scores.mean_of_medians(i))]);
    }
    table.printstd();
}
