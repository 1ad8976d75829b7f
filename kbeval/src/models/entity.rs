use std::fmt;
use itertools::Itertools;
use algorithm::string::{ strip_enclosing, lowercase_tokens, aligned_overlap_ratio };

/// Characters that may wrap a predicted name and are ignored when comparing names
pub const QUOTES: [char; 8] = ['"', '\'', '\u{2018}', '\u{2019}', '\u{201c}', '\u{201d}', '\u{0060}', '\u{00b4}'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NormalizationKind {
    #[serde(rename = "NCBI_Taxonomy")]
    NcbiTaxonomy,
    GeoNames,
    OntoBiotope,
    /// fallback when an entity has no identifier: it is normalized by its own name
    #[serde(rename = "name")]
    Name
}

impl NormalizationKind {
    /// Explicit normalization kinds, in the order they are looked up in input records
    pub const EXPLICIT: [NormalizationKind; 3] = [NormalizationKind::NcbiTaxonomy, NormalizationKind::GeoNames, NormalizationKind::OntoBiotope];

    pub fn field_name(&self) -> &'static str {
        match *self {
            NormalizationKind::NcbiTaxonomy => "NCBI_Taxonomy",
            NormalizationKind::GeoNames => "GeoNames",
            NormalizationKind::OntoBiotope => "OntoBiotope",
            NormalizationKind::Name => "name",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Normalization {
    NcbiTaxonomy(String),
    GeoNames(String),
    OntoBiotope(String),
    Name(String)
}

impl Normalization {
    pub fn new(kind: NormalizationKind, value: String) -> Normalization {
        match kind {
            NormalizationKind::NcbiTaxonomy => Normalization::NcbiTaxonomy(value),
            NormalizationKind::GeoNames => Normalization::GeoNames(value),
            NormalizationKind::OntoBiotope => Normalization::OntoBiotope(value),
            NormalizationKind::Name => Normalization::Name(value),
        }
    }

    pub fn kind(&self) -> NormalizationKind {
        match *self {
            Normalization::NcbiTaxonomy(_) => NormalizationKind::NcbiTaxonomy,
            Normalization::GeoNames(_) => NormalizationKind::GeoNames,
            Normalization::OntoBiotope(_) => NormalizationKind::OntoBiotope,
            Normalization::Name(_) => NormalizationKind::Name,
        }
    }

    pub fn value(&self) -> &str {
        match *self {
            Normalization::NcbiTaxonomy(ref v) | Normalization::GeoNames(ref v) |
            Normalization::OntoBiotope(ref v) | Normalization::Name(ref v) => v,
        }
    }
}

/// `(type, normalization kind, normalization value)`: two raw entities with the same key denote the
/// same referent
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentityKey {
    pub type_: String,
    pub normalization: Normalization
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawEntity {
    pub id: Option<String>,
    pub type_: String,
    pub name: String,
    pub normalization: Normalization
}

impl RawEntity {
    pub fn new(id: Option<String>, type_: String, name: String, normalization: Normalization) -> RawEntity {
        RawEntity { id, type_, name, normalization }
    }

    pub fn key(&self) -> IdentityKey {
        IdentityKey { type_: self.type_.clone(), normalization: self.normalization.clone() }
    }
}

impl fmt::Display for RawEntity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Entity({}, \"{}\", {}: {})", self.type_, self.name, self.normalization.kind().field_name(), self.normalization.value())
    }
}

/// A cluster of raw entities denoting the same referent. Its key is the key of the first member and
/// does not change when members are added.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedEntity {
    key: IdentityKey,
    pub ids: Vec<String>,
    pub names: Vec<String>
}

impl MergedEntity {
    pub fn new(ent: &RawEntity) -> MergedEntity {
        let mut me = MergedEntity {
            key: ent.key(),
            ids: Vec::new(),
            names: Vec::new()
        };
        me.add(ent);
        me
    }

    pub fn add(&mut self, ent: &RawEntity) {
        if let Some(ref id) = ent.id {
            if !self.ids.contains(id) {
                self.ids.push(id.clone());
            }
        }
        if !self.names.contains(&ent.name) {
            self.names.push(ent.name.clone());
        }
    }

    #[inline]
    pub fn key(&self) -> &IdentityKey {
        &self.key
    }

    #[inline]
    pub fn type_(&self) -> &str {
        &self.key.type_
    }

    #[inline]
    pub fn normalization(&self) -> &Normalization {
        &self.key.normalization
    }

    /// Case-insensitive equality of the (unquoted) predicted name with any of the names of the cluster
    pub fn match_name(&self, pred_name: &str) -> bool {
        let pred_name = strip_enclosing(pred_name, &QUOTES).to_lowercase();
        self.names.iter().any(|name| name.to_lowercase() == pred_name)
    }

    /// Best token alignment ratio between the (unquoted) predicted name and the names of the cluster
    pub fn align_name(&self, pred_name: &str) -> f64 {
        let pred_tokens = lowercase_tokens(strip_enclosing(pred_name, &QUOTES));
        self.names.iter()
            .map(|name| aligned_overlap_ratio(&lowercase_tokens(name), &pred_tokens))
            .fold(0.0, f64::max)
    }
}

impl fmt::Display for MergedEntity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "MergedEntity({}, {{{}}}, {{{}}}, {}: {})",
            self.type_(), self.ids.iter().join(", "), self.names.iter().join(", "),
            self.normalization().kind().field_name(), self.normalization().value())
    }
}
