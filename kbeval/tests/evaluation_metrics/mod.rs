use serde_json;
use serde_json::Value;
use std::path::PathBuf;
use std::fs::File;
use std::ffi::OsStr;
use kbeval::prelude::*;

#[derive(Deserialize)]
struct Counts {
    tp: usize,
    fp: usize,
    #[serde(rename = "fn")]
    fn_: usize
}

#[derive(Deserialize)]
struct TestCase {
    comment: String,
    #[serde(default)]
    settings: EvalSettings,
    reference: Value,
    /// raw model output, repaired before parsing
    prediction: String,
    base: Counts,
    ie: Counts,
    f_score: f64
}

fn load_cases() -> Vec<(PathBuf, TestCase)> {
    let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    dir.push("tests/evaluation_metrics/data");

    let mut cases = Vec::new();
    for entry in dir.read_dir().unwrap() {
        if let Ok(entry) = entry {
            if entry.path().extension().unwrap_or(OsStr::new("")) == "json" {
                let input: TestCase = serde_json::from_reader(File::open(entry.path()).unwrap()).unwrap();
                cases.push((entry.path(), input));
            }
        }
    }

    assert!(!cases.is_empty());
    cases
}

#[test]
fn run_test_from_data() {
    for (fpath, case) in load_cases() {
        let reference = canonicalize_reference(&serde_json::to_string(&case.reference).unwrap().parse::<Dataset>().unwrap());
        let predicted = case.prediction.parse::<Dataset>().unwrap_or_else(|_| Dataset::empty());

        let eval = evaluate(&reference, &predicted, &case.settings);
        let msg = format!("{} ({})", case.comment, fpath.display());
        assert_eq!((eval.base.tp, eval.base.fp, eval.base.fn_), (case.base.tp, case.base.fp, case.base.fn_), "{}", msg);
        assert_eq!((eval.ie.tp, eval.ie.fp, eval.ie.fn_), (case.ie.tp, case.ie.fp, case.ie.fn_), "{}", msg);
        assert!((eval.f_score() - case.f_score).abs() < 1e-9, "{}: f_score {} != {}", msg, eval.f_score(), case.f_score);
    }
}

#[test]
fn reference_against_itself() {
    for (_, case) in load_cases() {
        let raw = serde_json::to_string(&case.reference).unwrap().parse::<Dataset>().unwrap();
        let reference = canonicalize_reference(&raw);
        if reference.relations.is_empty() {
            continue;
        }

        // name the arguments of every reference relation by one of the names of its merged entities
        let predicted = Dataset::new(Vec::new(), reference.relations.iter()
            .map(|r| RawRelation::new(r.type_.clone(), reference.source_of(r).names[0].clone(), reference.target_of(r).names[0].clone()))
            .collect(), Vec::new());

        let eval = evaluate(&reference, &predicted, &EvalSettings::default());
        assert_eq!(eval.base.precision, Some(1.0), "{}", case.comment);
        assert_eq!(eval.base.recall, Some(1.0), "{}", case.comment);
        assert_eq!(eval.f_score(), 1.0, "{}", case.comment);
    }
}
