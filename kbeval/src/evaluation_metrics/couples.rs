//! Couples: several predictions stating the same reference fact.
//!
//! A couple starts from a true positive pair; predictions left unpaired join it when the couple
//! policy says they realize the same fact. The extra predictions of a couple are credited once for
//! precision (see `IEScores`).

use models::*;
use similarity::RelationSimilarity;
use super::pairing::Pair;
use super::scoring::MatchThreshold;

#[derive(Debug, Clone, PartialEq)]
pub struct Couple<'a> {
    pub reference: &'a MergedRelation,
    /// the prediction paired with the reference comes first
    pub predictions: Vec<&'a RawRelation>
}

impl<'a> Couple<'a> {
    #[inline]
    pub fn n_extras(&self) -> usize {
        self.predictions.len() - 1
    }
}

/// What a couple policy needs to compare a leftover prediction with a reference relation
pub struct CoupleContext<'a> {
    pub reference: &'a MergedRefDataset,
    pub similarity: RelationSimilarity,
    /// resolved threshold
    pub threshold: MatchThreshold
}

pub trait CouplePolicy {
    /// Whether `candidate`, a prediction left unpaired, states the same fact as `rel`, a reference
    /// relation found by another prediction
    fn accept(&self, ctx: &CoupleContext, rel: &MergedRelation, candidate: &RawRelation) -> bool;
}

pub struct NoCouples;

/// The candidate matches the reference once its arguments are swapped
pub struct SymmetricArguments;

/// The candidate matches the reference in either argument order
pub struct SameFact;

impl CouplePolicy for NoCouples {
    fn accept(&self, _ctx: &CoupleContext, _rel: &MergedRelation, _candidate: &RawRelation) -> bool {
        false
    }
}

impl CouplePolicy for SymmetricArguments {
    fn accept(&self, ctx: &CoupleContext, rel: &MergedRelation, candidate: &RawRelation) -> bool {
        ctx.threshold.accept(ctx.similarity.score_swapped(ctx.reference, rel, candidate))
    }
}

impl CouplePolicy for SameFact {
    fn accept(&self, ctx: &CoupleContext, rel: &MergedRelation, candidate: &RawRelation) -> bool {
        ctx.threshold.accept(ctx.similarity.score(ctx.reference, rel, candidate))
            || SymmetricArguments.accept(ctx, rel, candidate)
    }
}

/// Built-in policies, selectable from the settings
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoupleMode {
    NoCouples,
    SymmetricArguments,
    SameFact
}

impl CouplePolicy for CoupleMode {
    fn accept(&self, ctx: &CoupleContext, rel: &MergedRelation, candidate: &RawRelation) -> bool {
        match *self {
            CoupleMode::NoCouples => NoCouples.accept(ctx, rel, candidate),
            CoupleMode::SymmetricArguments => SymmetricArguments.accept(ctx, rel, candidate),
            CoupleMode::SameFact => SameFact.accept(ctx, rel, candidate),
        }
    }
}

/// Group unpaired predictions with the true positive pairs they duplicate. A prediction joins the
/// first true positive (in reference order) accepting it. Only couples with at least one extra
/// prediction are returned.
pub fn find_couples<'a, P: CouplePolicy + ?Sized>(pairs: &[Pair<'a>], ctx: &CoupleContext, policy: &P) -> Vec<Couple<'a>> {
    let mut couples: Vec<Couple<'a>> = pairs.iter()
        .filter(|p| p.is_paired() && ctx.threshold.accept(p.score))
        .filter_map(|p| match (p.reference, p.prediction) {
            (Some(rel), Some(pred)) => Some(Couple { reference: rel, predictions: vec![pred] }),
            _ => None
        })
        .collect();

    for candidate in pairs.iter().filter(|p| p.is_prediction_only()).filter_map(|p| p.prediction) {
        if let Some(couple) = couples.iter_mut().find(|c| policy.accept(ctx, c.reference, candidate)) {
            debug!("{} coupled with {}", candidate, ctx.reference.describe(couple.reference));
            couple.predictions.push(candidate);
        }
    }

    couples.retain(|c| c.n_extras() > 0);
    couples
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> MergedRefDataset {
        let entity = |id: &str, type_: &str, name: &str| MergedEntity::new(&RawEntity::new(
            Some(id.to_owned()), type_.to_owned(), name.to_owned(), Normalization::Name(name.to_owned())));

        MergedRefDataset {
            entities: vec![entity("T1", "Microorganism", "E. coli"), entity("T2", "Microorganism", "Salmonella")],
            relations: vec![MergedRelation::new("Interacts_With", 0, 1)]
        }
    }

    fn pred(source: &str, target: &str) -> RawRelation {
        RawRelation::new("Interacts_With".to_owned(), source.to_owned(), target.to_owned())
    }

    #[test]
    pub fn test_find_couples() {
        let reference = reference();
        let preds = vec![pred("E. coli", "Salmonella"), pred("Salmonella", "E. coli"), pred("E. coli", "Bacillus")];
        let pairs = vec![
            Pair::paired(&reference.relations[0], &preds[0], 1.0),
            Pair::prediction_only(&preds[1]),
            Pair::prediction_only(&preds[2]),
        ];
        let ctx = CoupleContext { reference: &reference, similarity: RelationSimilarity::strict(), threshold: MatchThreshold::Exact };

        let couples = find_couples(&pairs, &ctx, &CoupleMode::SameFact);
        assert_eq!(couples, vec![Couple { reference: &reference.relations[0], predictions: vec![&preds[0], &preds[1]] }]);
        assert_eq!(find_couples(&pairs, &ctx, &SymmetricArguments).len(), 1);
        assert!(find_couples(&pairs, &ctx, &NoCouples).is_empty());
    }

    #[test]
    pub fn test_candidates_join_one_couple() {
        let reference = reference();
        let preds = vec![pred("E. coli", "Salmonella"), pred("Salmonella", "E. coli"), pred("Salmonella", "E. coli")];
        let pairs = vec![
            Pair::paired(&reference.relations[0], &preds[0], 1.0),
            Pair::prediction_only(&preds[1]),
            Pair::prediction_only(&preds[2]),
        ];
        let ctx = CoupleContext { reference: &reference, similarity: RelationSimilarity::strict(), threshold: MatchThreshold::Exact };

        let couples = find_couples(&pairs, &ctx, &SameFact);
        assert_eq!(couples.len(), 1);
        assert_eq!(couples[0].n_extras(), 2);
    }

    #[test]
    pub fn test_candidate_joins_first_accepting_reference() {
        let mut reference = reference();
        reference.relations.push(MergedRelation::new("Interacts_With", 1, 0));
        let preds = vec![pred("E. coli", "Salmonella"), pred("Salmonella", "E. coli"), pred("E. coli", "Salmonella")];
        let ctx = CoupleContext { reference: &reference, similarity: RelationSimilarity::strict(), threshold: MatchThreshold::Exact };

        // both references accept the leftover prediction, directly or once swapped
        assert!(SameFact.accept(&ctx, &reference.relations[0], &preds[2]));
        assert!(SameFact.accept(&ctx, &reference.relations[1], &preds[2]));

        let pairs = vec![
            Pair::paired(&reference.relations[0], &preds[0], 1.0),
            Pair::paired(&reference.relations[1], &preds[1], 1.0),
            Pair::prediction_only(&preds[2]),
        ];
        assert_eq!(find_couples(&pairs, &ctx, &SameFact),
            vec![Couple { reference: &reference.relations[0], predictions: vec![&preds[0], &preds[2]] }]);

        let pairs = vec![
            Pair::paired(&reference.relations[1], &preds[1], 1.0),
            Pair::paired(&reference.relations[0], &preds[0], 1.0),
            Pair::prediction_only(&preds[2]),
        ];
        assert_eq!(find_couples(&pairs, &ctx, &SameFact),
            vec![Couple { reference: &reference.relations[1], predictions: vec![&preds[1], &preds[2]] }]);
    }

    #[test]
    pub fn test_no_true_positive() {
        let reference = reference();
        let preds = vec![pred("E. coli", "Bacillus"), pred("Salmonella", "E. coli")];
        let pairs = vec![
            Pair::paired(&reference.relations[0], &preds[0], 0.5),
            Pair::prediction_only(&preds[1]),
        ];
        let ctx = CoupleContext { reference: &reference, similarity: RelationSimilarity::strict(), threshold: MatchThreshold::Exact };

        assert!(find_couples(&pairs, &ctx, &SameFact).is_empty());
    }
}
