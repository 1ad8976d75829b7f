use models::*;

/// Credit given by the relaxed type similarity to a relation whose label differs from the reference
pub const RELAXED_TYPE_CREDIT: f64 = 0.9;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeSimilarity {
    /// 1.0 when the normalized labels are equal, else 0.0
    Strict,
    /// 1.0 when the normalized labels are equal, else `RELAXED_TYPE_CREDIT`
    Relaxed
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArgSimilarity {
    /// case-insensitive equality with one of the names of the merged entity
    Strict,
    /// best token alignment ratio with one of the names of the merged entity
    Relaxed
}

impl TypeSimilarity {
    pub fn score(&self, reference: &MergedRelation, pred_type: &str) -> f64 {
        let matched = reference.match_type(pred_type);
        match *self {
            TypeSimilarity::Strict => if matched { 1.0 } else { 0.0 },
            TypeSimilarity::Relaxed => if matched { 1.0 } else { RELAXED_TYPE_CREDIT },
        }
    }

    #[inline]
    pub fn is_strict(&self) -> bool {
        *self == TypeSimilarity::Strict
    }
}

impl ArgSimilarity {
    pub fn score(&self, reference: &MergedEntity, pred_name: &str) -> f64 {
        match *self {
            ArgSimilarity::Strict => if reference.match_name(pred_name) { 1.0 } else { 0.0 },
            ArgSimilarity::Relaxed => reference.align_name(pred_name),
        }
    }

    #[inline]
    pub fn is_strict(&self) -> bool {
        *self == ArgSimilarity::Strict
    }
}

/// Similarity between a reference relation and a predicted one: the product of the type similarity
/// and of the similarities of both arguments
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RelationSimilarity {
    pub type_sim: TypeSimilarity,
    pub arg_sim: ArgSimilarity
}

impl RelationSimilarity {
    pub fn new(type_sim: TypeSimilarity, arg_sim: ArgSimilarity) -> RelationSimilarity {
        RelationSimilarity { type_sim, arg_sim }
    }

    pub fn strict() -> RelationSimilarity {
        RelationSimilarity::new(TypeSimilarity::Strict, ArgSimilarity::Strict)
    }

    #[inline]
    pub fn is_strict(&self) -> bool {
        self.type_sim.is_strict() && self.arg_sim.is_strict()
    }

    pub fn score(&self, reference: &MergedRefDataset, rel: &MergedRelation, pred: &RawRelation) -> f64 {
        self.score_args(reference, rel, &pred.type_, &pred.source, &pred.target)
    }

    /// Same as `score` but with the arguments of the prediction swapped
    pub fn score_swapped(&self, reference: &MergedRefDataset, rel: &MergedRelation, pred: &RawRelation) -> f64 {
        self.score_args(reference, rel, &pred.type_, &pred.target, &pred.source)
    }

    fn score_args(&self, reference: &MergedRefDataset, rel: &MergedRelation, pred_type: &str, source: &str, target: &str) -> f64 {
        let type_score = self.type_sim.score(rel, pred_type);
        if type_score == 0.0 {
            return 0.0;
        }

        let source_score = self.arg_sim.score(reference.source_of(rel), source);
        if source_score == 0.0 {
            return 0.0;
        }

        type_score * source_score * self.arg_sim.score(reference.target_of(rel), target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> MergedRefDataset {
        let taxon = RawEntity::new(Some("T1".to_owned()), "Microorganism".to_owned(), "Escherichia coli".to_owned(),
            Normalization::NcbiTaxonomy("562".to_owned()));
        let habitat = RawEntity::new(Some("T2".to_owned()), "Habitat".to_owned(), "human gut".to_owned(),
            Normalization::OntoBiotope("OBT:1".to_owned()));

        MergedRefDataset {
            entities: vec![MergedEntity::new(&taxon), MergedEntity::new(&habitat)],
            relations: vec![MergedRelation::new("Lives_In", 0, 1)]
        }
    }

    fn pred(type_: &str, source: &str, target: &str) -> RawRelation {
        RawRelation::new(type_.to_owned(), source.to_owned(), target.to_owned())
    }

    #[test]
    pub fn test_type_similarity() {
        let rel = MergedRelation::new("Causes", 0, 1);
        assert_eq!(TypeSimilarity::Strict.score(&rel, "Cause"), 1.0);
        assert_eq!(TypeSimilarity::Strict.score(&rel, "Lives_In"), 0.0);
        assert_eq!(TypeSimilarity::Relaxed.score(&rel, "cau ses"), 1.0);
        assert_eq!(TypeSimilarity::Relaxed.score(&rel, "Lives_In"), RELAXED_TYPE_CREDIT);
    }

    #[test]
    pub fn test_strict_relation_similarity() {
        let dataset = reference();
        let rel = &dataset.relations[0];
        let sim = RelationSimilarity::strict();

        assert_eq!(sim.score(&dataset, rel, &pred("Lives In", "escherichia coli", "\"Human gut\"")), 1.0);
        assert_eq!(sim.score(&dataset, rel, &pred("Lives_In", "E. coli", "human gut")), 0.0);
        assert_eq!(sim.score(&dataset, rel, &pred("Lives_In", "human gut", "Escherichia coli")), 0.0);
        assert_eq!(sim.score_swapped(&dataset, rel, &pred("Lives_In", "human gut", "Escherichia coli")), 1.0);
    }

    #[test]
    pub fn test_relaxed_relation_similarity() {
        let dataset = reference();
        let rel = &dataset.relations[0];
        let sim = RelationSimilarity::new(TypeSimilarity::Relaxed, ArgSimilarity::Relaxed);

        assert!(!sim.is_strict());
        assert_eq!(sim.score(&dataset, rel, &pred("Lives_In", "Escherichia coli", "gut")), 0.5);
        assert_eq!(sim.score(&dataset, rel, &pred("Located_In", "Escherichia coli", "human gut")), 0.9);
        assert_eq!(sim.score(&dataset, rel, &pred("Lives_In", "Salmonella", "human gut")), 0.0);
    }
}
