//! Canonicalization of reference documents.
//!
//! Raw entities sharing an identity key, or whose ids are declared equivalent by the curators, are
//! merged into one `MergedEntity`. Relations are then rewritten over merged entities and
//! deduplicated. Predictions are never canonicalized: a model stating the same fact twice must
//! show up as redundancy.

use std::collections::hash_map::Entry;
use fnv::FnvHashMap;
use algorithm::prelude::*;
use models::*;

pub fn canonicalize_reference(dataset: &Dataset) -> MergedRefDataset {
    debug!("merging reference relations");
    let entities = merge_entities(dataset);
    let relations = merge_relations(dataset, &entities);

    MergedRefDataset { entities, relations }
}

impl Dataset {
    #[inline]
    pub fn merge_ref(&self) -> MergedRefDataset {
        canonicalize_reference(self)
    }
}

/// Cluster raw entities. Clusters are ordered by their first member, which also gives the cluster
/// its type and normalization.
fn merge_entities(dataset: &Dataset) -> Vec<MergedEntity> {
    let mut clusters = DisjointSet::new(dataset.entities.len());
    let mut key2idx: FnvHashMap<IdentityKey, usize> = FnvHashMap::default();
    let mut id2idx: FnvHashMap<&str, usize> = FnvHashMap::default();

    for (i, ent) in dataset.entities.iter().enumerate() {
        match key2idx.entry(ent.key()) {
            Entry::Occupied(e) => { clusters.union(*e.get(), i); },
            Entry::Vacant(e) => { e.insert(i); }
        }

        if let Some(ref id) = ent.id {
            match id2idx.entry(id.as_str()) {
                Entry::Occupied(e) => {
                    warn!("entity id {} is used several times", id);
                    clusters.union(*e.get(), i);
                },
                Entry::Vacant(e) => { e.insert(i); }
            }
        }
    }

    for eq in &dataset.equivalences {
        let mut members = eq.iter().filter_map(|id| {
            let idx = id2idx.get(id.as_str()).cloned();
            if idx.is_none() {
                debug!("equivalence refers to unknown entity {}", id);
            }
            idx
        });

        if let Some(first) = members.next() {
            for idx in members {
                clusters.union(first, idx);
            }
        }
    }

    let mut root2cluster: FnvHashMap<usize, usize> = FnvHashMap::default();
    let mut merged: Vec<MergedEntity> = Vec::new();
    for (i, ent) in dataset.entities.iter().enumerate() {
        let next_cluster = merged.len();
        let cluster = *root2cluster.entry(clusters.find(i)).or_insert(next_cluster);
        if cluster == next_cluster {
            merged.push(MergedEntity::new(ent));
        } else {
            merged[cluster].add(ent);
        }
    }

    debug!("merged {} reference entities into {}", dataset.entities.len(), merged.len());
    merged
}

/// Rewrite relations over merged entities, keeping the first relation of every structural key
fn merge_relations(dataset: &Dataset, entities: &[MergedEntity]) -> Vec<MergedRelation> {
    let mut id2cluster: FnvHashMap<&str, usize> = FnvHashMap::default();
    for (cluster, me) in entities.iter().enumerate() {
        for id in &me.ids {
            id2cluster.insert(id.as_str(), cluster);
        }
    }

    let mut relations: UniqueArray<MergedRelation, RelationKey> = UniqueArray::with_capacity(dataset.relations.len());
    for rel in &dataset.relations {
        let (source_id, target_id) = match (id2cluster.get(rel.source.as_str()), id2cluster.get(rel.target.as_str())) {
            (Some(&source_id), Some(&target_id)) => (source_id, target_id),
            _ => {
                warn!("drop reference {}: unknown argument", rel);
                continue;
            }
        };

        let merged = MergedRelation::new(&rel.type_, source_id, target_id);
        let key = merged.key(entities);
        if !relations.push(key, merged) {
            debug!("drop duplicated reference {}", rel);
        }
    }

    relations.get_value()
}
