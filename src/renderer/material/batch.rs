//! Per-frame material batching.
//!
//! Draws whose resolved materials share a fingerprint go into one batch and
//! are bound once. The batcher is rebuilt every frame; call
//! [`MaterialBatcher::clear`] before collecting.

use rustc_hash::FxHashMap;

use crate::renderer::material::fingerprint::material_fingerprint;
use crate::resources::material::ResolvedMaterial;

/// Index of a batch inside its [`MaterialBatcher`], stable until `clear`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BatchId(u32);

impl BatchId {
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One shading group worth of draws.
#[derive(Debug, Clone)]
pub struct MaterialBatch {
    pub fingerprint: u32,
    pub is_ghost: bool,
    /// First material inserted under this fingerprint; the one that gets bound.
    pub material: ResolvedMaterial,
    /// Object ids of every draw in the batch, in insertion order.
    pub members: Vec<u32>,
}

#[derive(Debug, Default)]
pub struct MaterialBatcher {
    batches: Vec<MaterialBatch>,
    lookup: FxHashMap<u32, BatchId>,
}

impl MaterialBatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a draw, returning the batch it joined.
    ///
    /// On a fingerprint hit the existing batch is reused even if the stored
    /// material differs in an unhashed field.
    pub fn insert(&mut self, material: &ResolvedMaterial, is_ghost: bool) -> BatchId {
        let fingerprint = material_fingerprint(material, is_ghost);

        if let Some(&id) = self.lookup.get(&fingerprint) {
            self.batches[id.index()].members.push(material.object_id);
            return id;
        }

        let id = BatchId(self.batches.len() as u32);
        log::trace!(
            "New material batch {} (fingerprint {fingerprint:#010x}, object {})",
            id.0,
            material.object_id
        );
        self.batches.push(MaterialBatch {
            fingerprint,
            is_ghost,
            material: material.clone(),
            members: vec![material.object_id],
        });
        self.lookup.insert(fingerprint, id);
        id
    }

    #[must_use]
    pub fn get(&self, id: BatchId) -> Option<&MaterialBatch> {
        self.batches.get(id.index())
    }

    /// Batches in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &MaterialBatch> {
        self.batches.iter()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.batches.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    pub fn clear(&mut self) {
        self.batches.clear();
        self.lookup.clear();
    }
}
