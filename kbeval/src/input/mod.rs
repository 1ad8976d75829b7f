//! Reading reference and predicted documents.
//!
//! Model outputs are not always valid JSON: they may be wrapped in a markdown code block or carry
//! trailing commas. Text is repaired before parsing (see `repair`). A missing reference document
//! is an error for the caller. A malformed reference, and a prediction that is missing or
//! malformed, are evaluated as empty datasets.

pub mod repair;
pub mod records;

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use serde_json;
use itertools::Itertools;

use errors::*;
use models::*;
use canonicalization::canonicalize_reference;
use self::records::DocumentRecord;

impl FromStr for Dataset {
    type Err = Error;

    fn from_str(content: &str) -> Result<Dataset> {
        let content = repair::repair(content);
        let document: DocumentRecord = serde_json::from_str(&content)
            .chain_err(|| ErrorKind::InputMalformed("content is not a valid JSON document".to_owned()))?;
        let dataset = document.into_dataset()?;

        if dataset.relations.is_empty() {
            warn!("empty relations");
        }
        Ok(dataset)
    }
}

impl Dataset {
    /// Read and parse a document. A file that can't be opened is `InputMissing`, content that can't
    /// be decoded or parsed is `InputMalformed`.
    pub fn from_file(fpath: &Path) -> Result<Dataset> {
        debug!("reading {}", fpath.display());
        let mut file = File::open(fpath)
            .chain_err(|| ErrorKind::InputMissing(fpath.display().to_string()))?;
        let mut content = String::new();
        file.read_to_string(&mut content)
            .chain_err(|| ErrorKind::InputMalformed(format!("{} is not UTF-8 text", fpath.display())))?;

        content.parse::<Dataset>()
    }
}

impl MergedRefDataset {
    pub fn from_file(fpath: &Path) -> Result<MergedRefDataset> {
        Ok(canonicalize_reference(&Dataset::from_file(fpath)?))
    }
}

/// Read a predicted document. Errors are logged and recovered as an empty dataset, so the prediction
/// gets the worst score instead of aborting the evaluation.
pub fn read_prediction(fpath: &Path) -> Dataset {
    match Dataset::from_file(fpath) {
        Ok(dataset) => dataset,
        Err(e) => {
            match *e.kind() {
                ErrorKind::InputMissing(_) => warn!("prediction {} is missing, evaluated as empty", fpath.display()),
                _ => warn!("prediction {} is malformed, evaluated as empty: {}", fpath.display(), error_trace(&e)),
            }
            Dataset::empty()
        }
    }
}

/// Read a reference document and canonicalize it. A malformed reference is logged and evaluated as
/// an empty dataset. A missing one is an error.
pub fn read_reference(fpath: &Path) -> Result<MergedRefDataset> {
    match MergedRefDataset::from_file(fpath) {
        Ok(reference) => Ok(reference),
        Err(e) => match *e.kind() {
            ErrorKind::InputMalformed(_) => {
                warn!("reference {} is malformed, evaluated as empty: {}", fpath.display(), error_trace(&e));
                Ok(canonicalize_reference(&Dataset::empty()))
            },
            _ => Err(e).chain_err(|| format!("cannot load reference {}", fpath.display()))
        }
    }
}

/// The error and its causes, outermost first
fn error_trace(e: &Error) -> String {
    e.iter().join(": ")
}
