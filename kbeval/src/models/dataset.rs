use models::entity::{ RawEntity, MergedEntity };
use models::relation::{ RawRelation, MergedRelation };

/// Ids of raw entities that the curators declared to denote the same referent
pub type EquivalenceSet = Vec<String>;

/// Content of one input document
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    pub entities: Vec<RawEntity>,
    pub relations: Vec<RawRelation>,
    pub equivalences: Vec<EquivalenceSet>
}

impl Dataset {
    pub fn new(entities: Vec<RawEntity>, relations: Vec<RawRelation>, equivalences: Vec<EquivalenceSet>) -> Dataset {
        Dataset { entities, relations, equivalences }
    }

    pub fn empty() -> Dataset {
        Dataset::default()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty() && self.relations.is_empty()
    }
}

/// A reference dataset after canonicalization: entities are clusters and relations are unique
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MergedRefDataset {
    pub entities: Vec<MergedEntity>,
    pub relations: Vec<MergedRelation>
}

impl MergedRefDataset {
    #[inline]
    pub fn source_of(&self, rel: &MergedRelation) -> &MergedEntity {
        rel.get_source(&self.entities)
    }

    #[inline]
    pub fn target_of(&self, rel: &MergedRelation) -> &MergedEntity {
        rel.get_target(&self.entities)
    }

    /// Human readable form of a relation, with its arguments resolved
    pub fn describe(&self, rel: &MergedRelation) -> String {
        format!("MergedRelation({}, {}, {})", rel.type_, self.source_of(rel), self.target_of(rel))
    }
}
