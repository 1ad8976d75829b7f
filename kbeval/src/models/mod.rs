pub mod entity;
pub mod relation;
pub mod dataset;

pub use self::entity::{ RawEntity, MergedEntity, Normalization, NormalizationKind, IdentityKey, QUOTES };
pub use self::relation::{ RawRelation, MergedRelation, RelationKey, normalize_type };
pub use self::dataset::{ Dataset, MergedRefDataset, EquivalenceSet };
