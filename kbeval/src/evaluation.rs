use models::*;
use settings::EvalSettings;
use evaluation_metrics::*;

/// Result of the evaluation of one predicted document against its reference
#[derive(Debug, Clone)]
pub struct Evaluation<'a> {
    pub base: BaseScores,
    pub ie: IEScores,
    pub pairs: Vec<Pair<'a>>,
    pub couples: Vec<Couple<'a>>
}

impl<'a> Evaluation<'a> {
    /// The score reported for a document: F1 of the IE scores, 0 when there was nothing to score
    #[inline]
    pub fn f_score(&self) -> f64 {
        self.ie.f_score_or_zero()
    }
}

pub fn log_scores(name: &str, scores: &[(&str, Option<f64>)]) {
    info!("{} scores:", name);
    for &(key, value) in scores {
        match value {
            Some(v) => info!("  {}: {}", key, v),
            None => info!("  {}: n/a", key),
        }
    }
}

/// Score `predicted` against the canonical `reference`: drop redundant predictions, pair the rest
/// with references, then count.
pub fn evaluate<'a>(reference: &'a MergedRefDataset, predicted: &'a Dataset, settings: &EvalSettings) -> Evaluation<'a> {
    let similarity = settings.similarity();
    let threshold = settings.threshold();

    let predictions = filter_redundant(reference, &predicted.relations);
    let pairs = optimal_pairs(&reference.relations, &predictions, |rel, pred| similarity.score(reference, rel, pred));
    let base = BaseScores::new(&pairs, threshold);
    log_scores("Base", &[("precision", base.precision), ("recall", base.recall), ("f_score", base.f_score)]);

    let ctx = CoupleContext { reference, similarity, threshold };
    let couples = find_couples(&pairs, &ctx, &settings.couples);
    let ie = IEScores::new(&base, &couples);
    log_scores("IE", &[("precision", ie.precision), ("recall", ie.recall), ("f_score", ie.f_score)]);

    if base.is_degenerate() {
        warn!("no reference and no prediction");
    }

    Evaluation { base, ie, pairs, couples }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similarity::*;

    fn dataset() -> Dataset {
        let entity = |id: &str, type_: &str, name: &str, normalization: Normalization|
            RawEntity::new(Some(id.to_owned()), type_.to_owned(), name.to_owned(), normalization);
        let relation = |type_: &str, source: &str, target: &str|
            RawRelation::new(type_.to_owned(), source.to_owned(), target.to_owned());

        Dataset::new(vec![
            entity("T1", "Microorganism", "Escherichia coli", Normalization::NcbiTaxonomy("562".to_owned())),
            entity("T2", "Microorganism", "E. coli", Normalization::NcbiTaxonomy("562".to_owned())),
            entity("T3", "Habitat", "human gut", Normalization::OntoBiotope("OBT:1".to_owned())),
            entity("T4", "Habitat", "soil", Normalization::OntoBiotope("OBT:2".to_owned())),
        ], vec![
            relation("Lives_In", "T1", "T3"),
            relation("Lives_In", "T2", "T4"),
        ], vec![])
    }

    fn predicted(relations: &[(&str, &str, &str)]) -> Dataset {
        Dataset::new(vec![], relations.iter()
            .map(|&(t, s, o)| RawRelation::new(t.to_owned(), s.to_owned(), o.to_owned()))
            .collect(), vec![])
    }

    #[test]
    pub fn test_perfect_prediction() {
        let reference = dataset().merge_ref();
        let predicted = predicted(&[("Lives In", "E. coli", "human gut"), ("Lives_In", "Escherichia coli", "soil")]);

        let eval = evaluate(&reference, &predicted, &EvalSettings::default());
        assert_eq!(eval.base.precision, Some(1.0));
        assert_eq!(eval.base.recall, Some(1.0));
        assert_eq!(eval.f_score(), 1.0);
        assert!(eval.pairs.iter().all(|p| p.is_paired()));
    }

    #[test]
    pub fn test_redundant_prediction_is_ignored() {
        let reference = dataset().merge_ref();
        let predicted = predicted(&[
            ("Lives_In", "E. coli", "human gut"),
            ("Lives_In", "Escherichia coli", "human gut"),
        ]);

        let eval = evaluate(&reference, &predicted, &EvalSettings::default());
        assert_eq!((eval.base.tp, eval.base.fp, eval.base.fn_), (1, 0, 1));
        assert_eq!(eval.pairs.len(), 2);
        assert_eq!(eval.base.precision, Some(1.0));
        assert_eq!(eval.base.recall, Some(0.5));
    }

    #[test]
    pub fn test_swapped_prediction_is_coupled() {
        let reference = dataset().merge_ref();
        let predicted = predicted(&[
            ("Lives_In", "E. coli", "human gut"),
            ("Lives_In", "human gut", "E. coli"),
        ]);

        let eval = evaluate(&reference, &predicted, &EvalSettings::default());
        assert_eq!((eval.base.tp, eval.base.fp, eval.base.fn_), (1, 1, 1));
        assert_eq!(eval.base.precision, Some(0.5));
        assert_eq!(eval.couples.len(), 1);
        assert_eq!((eval.ie.tp, eval.ie.fp, eval.ie.fn_), (1, 0, 1));
        assert_eq!(eval.ie.precision, Some(1.0));
        assert_eq!(eval.ie.recall, eval.base.recall);

        let settings = EvalSettings { couples: CoupleMode::NoCouples, ..EvalSettings::default() };
        let eval = evaluate(&reference, &predicted, &settings);
        assert_eq!(eval.ie, IEScores::new(&eval.base, &[]));
    }

    #[test]
    pub fn test_relaxed_evaluation() {
        let reference = dataset().merge_ref();
        let predicted = predicted(&[("Located_In", "coli", "gut"), ("Lives_In", "Bacillus", "soil")]);

        let strict = evaluate(&reference, &predicted, &EvalSettings::strict());
        assert_eq!(strict.base.tp, 0);
        assert_eq!(strict.f_score(), 0.0);

        let relaxed = evaluate(&reference, &predicted, &EvalSettings::relaxed());
        assert_eq!(relaxed.base.tp, 1);
        assert_eq!(relaxed.base.fp, 1);
        assert!(relaxed.pairs[0].score > 0.0 && relaxed.pairs[0].score < 1.0);

        let settings = EvalSettings { match_threshold: MatchThreshold::AtLeast(0.5), ..EvalSettings::relaxed() };
        assert_eq!(evaluate(&reference, &predicted, &settings).base.tp, 0);
        assert_eq!(TypeSimilarity::Relaxed, settings.type_similarity);
    }

    #[test]
    pub fn test_empty_datasets() {
        let empty = Dataset::empty();
        let reference = empty.merge_ref();
        let eval = evaluate(&reference, &empty, &EvalSettings::default());
        assert!(eval.base.is_degenerate());
        assert_eq!(eval.base.f_score, None);
        assert_eq!(eval.f_score(), 0.0);

        let reference = dataset().merge_ref();
        let eval = evaluate(&reference, &empty, &EvalSettings::default());
        assert_eq!(eval.base.recall, Some(0.0));
        assert_eq!(eval.ie.f_score, Some(0.0));
    }
}
