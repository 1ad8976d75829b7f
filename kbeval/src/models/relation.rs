use std::fmt;
use std::collections::HashMap;
use regex::Regex;
use models::entity::{ IdentityKey, MergedEntity };

lazy_static! {
    static ref JUNK_CHARS_IN_TYPE: Regex = Regex::new(r"[\s_]+").unwrap();

    /// Known variants of relation labels, mapped to the label used in the reference
    static ref TYPE_SYNONYMS: HashMap<&'static str, &'static str> = {
        let mut map = HashMap::new();
        map.insert("Cause", "Causes");
        map.insert("Affect", "Affects");
        map.insert("Have been found on", "Has been found on");
        map.insert("Transmit", "Transmits");
        map
    };
}

/// Canonical form of a relation label: synonyms are resolved, whitespace and underscores removed,
/// and the result lowercased.
pub fn normalize_type(type_: &str) -> String {
    let type_: &str = match TYPE_SYNONYMS.get(type_) {
        Some(synonym) => synonym,
        None => type_
    };
    JUNK_CHARS_IN_TYPE.replace_all(type_, "").to_lowercase()
}

/// A relation as written in an input document. Its arguments are entity ids in reference documents,
/// and entity names in predictions.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRelation {
    pub type_: String,
    pub source: String,
    pub target: String
}

impl RawRelation {
    pub fn new(type_: String, source: String, target: String) -> RawRelation {
        RawRelation { type_, source, target }
    }
}

impl fmt::Display for RawRelation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Relation({}, {}, {})", self.type_, self.source, self.target)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelationKey {
    pub type_: String,
    pub source: IdentityKey,
    pub target: IdentityKey
}

/// A reference relation whose arguments are merged entities, given as their position in the entity
/// list of the dataset owning them.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedRelation {
    pub type_: String,
    pub source_id: usize,
    pub target_id: usize
}

impl MergedRelation {
    pub fn new(type_: &str, source_id: usize, target_id: usize) -> MergedRelation {
        MergedRelation { type_: type_.to_owned(), source_id, target_id }
    }

    #[inline]
    pub fn get_source<'a>(&self, entities: &'a [MergedEntity]) -> &'a MergedEntity {
        &entities[self.source_id]
    }

    #[inline]
    pub fn get_target<'a>(&self, entities: &'a [MergedEntity]) -> &'a MergedEntity {
        &entities[self.target_id]
    }

    pub fn key(&self, entities: &[MergedEntity]) -> RelationKey {
        RelationKey {
            type_: normalize_type(&self.type_),
            source: self.get_source(entities).key().clone(),
            target: self.get_target(entities).key().clone(),
        }
    }

    pub fn match_type(&self, pred_type: &str) -> bool {
        normalize_type(&self.type_) == normalize_type(pred_type)
    }
}
