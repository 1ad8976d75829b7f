use std::fmt;
use similarity::RelationSimilarity;
use super::pairing::Pair;
use super::couples::Couple;

/// Minimum similarity for a pair to count as a true positive
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum MatchThreshold {
    /// `Exact` when both similarities are strict, `Positive` otherwise
    Auto,
    Exact,
    Positive,
    AtLeast(f64)
}

impl MatchThreshold {
    /// Replace `Auto` by the threshold it stands for under `similarity`
    pub fn resolve(&self, similarity: &RelationSimilarity) -> MatchThreshold {
        match *self {
            MatchThreshold::Auto => if similarity.is_strict() { MatchThreshold::Exact } else { MatchThreshold::Positive },
            threshold => threshold
        }
    }

    /// An unresolved `Auto` behaves as `Exact`
    pub fn accept(&self, score: f64) -> bool {
        match *self {
            MatchThreshold::Auto | MatchThreshold::Exact => score >= 1.0,
            MatchThreshold::Positive => score > 0.0,
            MatchThreshold::AtLeast(min_score) => score > 0.0 && score >= min_score,
        }
    }
}

/// `num / den`, undefined when `den` is 0
#[inline]
pub fn ratio(num: usize, den: usize) -> Option<f64> {
    if den == 0 {
        None
    } else {
        Some(num as f64 / den as f64)
    }
}

/// F1 from precision and recall. When only one of them is undefined there are references or
/// predictions but nothing was found, so the score is 0; it is undefined when both are.
pub fn harmonic_mean(precision: Option<f64>, recall: Option<f64>) -> Option<f64> {
    match (precision, recall) {
        (Some(p), Some(r)) => {
            if p + r == 0.0 {
                Some(0.0)
            } else {
                Some(2.0 * p * r / (p + r))
            }
        },
        (None, None) => None,
        _ => Some(0.0)
    }
}

fn fmt_score(score: Option<f64>) -> String {
    match score {
        None => "n/a".to_owned(),
        Some(s) => format!("{:.5}", s)
    }
}

fn or_zero(f_score: Option<f64>) -> f64 {
    match f_score {
        Some(f) => f,
        None => {
            warn!("nil R/P: no reference and no prediction, the score is 0");
            0.0
        }
    }
}

/// Precision, recall and F1 over a pairing
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BaseScores {
    pub tp: usize,
    pub fp: usize,
    #[serde(rename = "fn")]
    pub fn_: usize,
    pub precision: Option<f64>,
    pub recall: Option<f64>,
    pub f_score: Option<f64>
}

impl BaseScores {
    pub fn from_counts(tp: usize, fp: usize, fn_: usize) -> BaseScores {
        let precision = ratio(tp, tp + fp);
        let recall = ratio(tp, tp + fn_);

        BaseScores { tp, fp, fn_, precision, recall, f_score: harmonic_mean(precision, recall) }
    }

    /// `threshold` must be resolved
    pub fn new(pairs: &[Pair], threshold: MatchThreshold) -> BaseScores {
        let (mut tp, mut fp, mut fn_) = (0, 0, 0);
        for pair in pairs {
            if pair.is_paired() {
                if threshold.accept(pair.score) {
                    tp += 1;
                } else {
                    fp += 1;
                    fn_ += 1;
                }
            } else if pair.is_reference_only() {
                fn_ += 1;
            } else {
                fp += 1;
            }
        }

        BaseScores::from_counts(tp, fp, fn_)
    }

    /// True when there was neither a reference nor a prediction to score
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.tp + self.fp + self.fn_ == 0
    }

    pub fn f_score_or_zero(&self) -> f64 {
        or_zero(self.f_score)
    }
}

impl fmt::Display for BaseScores {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "tp={} fp={} fn={} precision={} recall={} f_score={}",
            self.tp, self.fp, self.fn_, fmt_score(self.precision), fmt_score(self.recall), fmt_score(self.f_score))
    }
}

/// Scores crediting a couple of predictions once: the extra predictions of every couple are not
/// false positives. Recall is the one of the base scores.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IEScores {
    pub tp: usize,
    pub fp: usize,
    #[serde(rename = "fn")]
    pub fn_: usize,
    pub n_couples: usize,
    pub n_coupled: usize,
    pub precision: Option<f64>,
    pub recall: Option<f64>,
    pub f_score: Option<f64>
}

impl IEScores {
    pub fn new(base: &BaseScores, couples: &[Couple]) -> IEScores {
        let n_coupled: usize = couples.iter().map(|c| c.n_extras()).sum();
        // couples only take predictions counted as false positives
        let fp = base.fp - n_coupled.min(base.fp);
        let precision = ratio(base.tp, base.tp + fp);

        IEScores {
            tp: base.tp,
            fp,
            fn_: base.fn_,
            n_couples: couples.len(),
            n_coupled,
            precision,
            recall: base.recall,
            f_score: harmonic_mean(precision, base.recall)
        }
    }

    pub fn f_score_or_zero(&self) -> f64 {
        or_zero(self.f_score)
    }
}

impl fmt::Display for IEScores {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "tp={} fp={} fn={} couples={} coupled={} precision={} recall={} f_score={}",
            self.tp, self.fp, self.fn_, self.n_couples, self.n_coupled,
            fmt_score(self.precision), fmt_score(self.recall), fmt_score(self.f_score))
    }
}
