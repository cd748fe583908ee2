//! In-memory flower collection owner.
//!
//! # Responsibility
//! - Materialize engine specs into identified flowers.
//! - Support the user-confirmed bulk reset.
//!
//! # Invariants
//! - Flowers are append-only; the only removal is `clear_all`.
//! - Every appended flower gets a fresh stable ID.

use crate::model::flower::{Flower, FlowerSpec};

/// Owner of the flower collection.
#[derive(Debug, Default)]
pub struct FlowerStore {
    flowers: Vec<Flower>,
}

impl FlowerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a store from previously persisted flowers.
    pub fn from_flowers(flowers: Vec<Flower>) -> Self {
        Self { flowers }
    }

    /// Collection in spawn order, for persistence and rendering.
    pub fn flowers(&self) -> &[Flower] {
        &self.flowers
    }

    /// Appends one identified flower per spec.
    pub fn append_specs(&mut self, specs: Vec<FlowerSpec>) {
        self.flowers.extend(specs.into_iter().map(Flower::from_spec));
    }

    /// Empties the garden. The confirmation dialog guarding this lives in
    /// the presentation layer.
    pub fn clear_all(&mut self) {
        self.flowers.clear();
    }
}
