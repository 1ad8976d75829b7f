//! Serde view of the input documents, and its conversion into the identity model.

use serde_json::Value;
use errors::*;
use models::*;

#[derive(Deserialize, Debug)]
pub struct EntityRecord {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(rename = "type")]
    pub type_: String,
    pub name: String,
    #[serde(rename = "NCBI_Taxonomy", default)]
    pub ncbi_taxonomy: Option<Value>,
    #[serde(rename = "GeoNames", default)]
    pub geonames: Option<Value>,
    #[serde(rename = "OntoBiotope", default)]
    pub ontobiotope: Option<Value>,
}

#[derive(Deserialize, Debug)]
pub struct ArgumentsRecord {
    pub source: Value,
    pub target: Value,
}

#[derive(Deserialize, Debug)]
pub struct RelationRecord {
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(default)]
    pub arguments: Option<ArgumentsRecord>,
    #[serde(default)]
    pub source: Option<Value>,
    #[serde(default)]
    pub target: Option<Value>,
    #[serde(default)]
    pub name: Option<Value>,
}

#[derive(Deserialize, Debug, Default)]
pub struct ChunkRecord {
    #[serde(default)]
    pub entities: Vec<EntityRecord>,
    #[serde(default)]
    pub relationships: Option<Vec<RelationRecord>>,
    #[serde(default)]
    pub equivalences: Option<Vec<Vec<Value>>>,
}

/// A document is either one object, or a list of objects when the model generated its answer in
/// several chunks
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum DocumentRecord {
    Chunks(Vec<ChunkRecord>),
    Single(ChunkRecord),
}

/// Render a scalar JSON value (string, number or bool) as a string
fn scalar_to_string(value: &Value) -> Option<String> {
    match *value {
        Value::String(ref s) => Some(s.clone()),
        Value::Number(ref n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None
    }
}

fn is_truthy(value: &Value) -> bool {
    match *value {
        Value::Null => false,
        Value::String(ref s) => !s.is_empty(),
        _ => true
    }
}

fn require_scalar(value: &Value, what: &str) -> Result<String> {
    scalar_to_string(value)
        .ok_or_else(|| ErrorKind::InputMalformed(format!("{} must be a string or a number, got: {}", what, value)).into())
}

impl EntityRecord {
    pub fn into_entity(self) -> Result<RawEntity> {
        let EntityRecord { id, type_, name, ncbi_taxonomy, geonames, ontobiotope } = self;
        let id = match id {
            None | Some(Value::Null) => None,
            Some(ref v) => Some(require_scalar(v, "entity id")?)
        };

        let mut normalizations = Vec::new();
        let explicit = [ncbi_taxonomy, geonames, ontobiotope];
        for (&kind, value) in NormalizationKind::EXPLICIT.iter().zip(explicit.iter()) {
            match *value {
                None | Some(Value::Null) => {},
                Some(ref v) => normalizations.push(Normalization::new(kind, require_scalar(v, kind.field_name())?))
            }
        }

        if normalizations.len() > 1 {
            warn!("rejecting entity '{}' ({}): {} normalizations", name, type_, normalizations.len());
            bail!(ErrorKind::InputMalformed(format!(
                "entity '{}' declares {} normalizations, expected at most one", name, normalizations.len())));
        }

        let normalization = match normalizations.pop() {
            Some(n) => n,
            None => Normalization::Name(name.clone())
        };
        Ok(RawEntity::new(id, type_, name, normalization))
    }
}

impl RelationRecord {
    pub fn into_relation(self) -> Result<RawRelation> {
        let RelationRecord { type_, arguments, source, target, name } = self;
        let (source, target) = match arguments {
            Some(args) => (args.source, args.target),
            None => {
                let source = match source {
                    Some(s) => s,
                    None => bail!(ErrorKind::InputMalformed(format!("relation '{}' has no source", type_)))
                };
                let target = match (target, name) {
                    (Some(t), _) if is_truthy(&t) => t,
                    (_, Some(n)) => n,
                    _ => bail!(ErrorKind::InputMalformed(format!("relation '{}' has no target", type_)))
                };
                (source, target)
            }
        };

        let source = require_scalar(&source, "relation source")?;
        let target = require_scalar(&target, "relation target")?;
        Ok(RawRelation::new(type_, source, target))
    }
}

impl ChunkRecord {
    pub fn into_dataset(self) -> Result<Dataset> {
        let relationships = match self.relationships {
            Some(rels) => rels,
            None => Vec::new()
        };

        let entities = self.entities.into_iter()
            .map(|e| e.into_entity())
            .collect::<Result<Vec<_>>>()?;
        let relations = relationships.into_iter()
            .map(|r| r.into_relation())
            .collect::<Result<Vec<_>>>()?;
        let equivalences = match self.equivalences {
            None => Vec::new(),
            Some(eqs) => eqs.iter()
                .map(|eq| eq.iter().map(|id| require_scalar(id, "equivalence id")).collect::<Result<Vec<_>>>())
                .collect::<Result<Vec<_>>>()?
        };

        Ok(Dataset::new(entities, relations, equivalences))
    }
}

impl DocumentRecord {
    /// Merge all chunks into a single dataset, keeping their order
    pub fn into_dataset(self) -> Result<Dataset> {
        match self {
            DocumentRecord::Single(chunk) => chunk.into_dataset(),
            DocumentRecord::Chunks(chunks) => {
                let mut dataset = Dataset::empty();
                for chunk in chunks {
                    let part = chunk.into_dataset()?;
                    dataset.entities.extend(part.entities);
                    dataset.relations.extend(part.relations);
                    dataset.equivalences.extend(part.equivalences);
                }
                Ok(dataset)
            }
        }
    }
}
