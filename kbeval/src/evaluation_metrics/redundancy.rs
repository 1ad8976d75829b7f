use fnv::FnvHashSet;
use models::*;
use similarity::RelationSimilarity;

/// Positions of the predictions that repeat a reference relation already matched perfectly (under
/// strict similarity) by an earlier prediction
pub fn pred_redundant(reference: &MergedRefDataset, predictions: &[RawRelation]) -> FnvHashSet<usize> {
    let sim = RelationSimilarity::strict();
    let mut redundant = FnvHashSet::default();

    for rel in &reference.relations {
        let mut found = false;
        for (i, pred) in predictions.iter().enumerate() {
            if sim.score(reference, rel, pred) == 1.0 {
                if found {
                    debug!("{} is redundant with an earlier prediction of {}", pred, reference.describe(rel));
                    redundant.insert(i);
                } else {
                    found = true;
                }
            }
        }
    }

    redundant
}

/// Predictions kept for pairing, in their original order
pub fn filter_redundant<'a>(reference: &MergedRefDataset, predictions: &'a [RawRelation]) -> Vec<&'a RawRelation> {
    let redundant = pred_redundant(reference, predictions);
    if !redundant.is_empty() {
        info!("ignore {} redundant predictions", redundant.len());
    }

    predictions.iter().enumerate()
        .filter(|&(i, _)| !redundant.contains(&i))
        .map(|(_, pred)| pred)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pred(source: &str, target: &str) -> RawRelation {
        RawRelation::new("Lives_In".to_owned(), source.to_owned(), target.to_owned())
    }

    fn reference() -> MergedRefDataset {
        let entity = |id: &str, type_: &str, name: &str| MergedEntity::new(&RawEntity::new(
            Some(id.to_owned()), type_.to_owned(), name.to_owned(), Normalization::Name(name.to_owned())));

        MergedRefDataset {
            entities: vec![entity("T1", "Microorganism", "E. coli"), entity("T2", "Habitat", "gut"), entity("T3", "Habitat", "soil")],
            relations: vec![MergedRelation::new("Lives_In", 0, 1), MergedRelation::new("Lives_In", 0, 2)]
        }
    }

    #[test]
    pub fn test_pred_redundant() {
        let reference = reference();
        let predictions = vec![
            pred("E. coli", "gut"),
            pred("e. coli", "soil"),
            pred("'E. coli'", "GUT"),
            pred("E. coli", "water"),
            pred("E. coli", "gut"),
        ];

        let mut redundant = pred_redundant(&reference, &predictions).into_iter().collect::<Vec<_>>();
        redundant.sort();
        assert_eq!(redundant, vec![2, 4]);

        let kept = filter_redundant(&reference, &predictions);
        assert_eq!(kept, vec![&predictions[0], &predictions[1], &predictions[3]]);
    }

    #[test]
    pub fn test_no_reference() {
        let predictions = vec![pred("E. coli", "gut"), pred("E. coli", "gut")];
        assert!(pred_redundant(&MergedRefDataset::default(), &predictions).is_empty());
    }
}
