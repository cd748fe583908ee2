//! Flower reward model.
//!
//! # Responsibility
//! - Define the cosmetic token spawned by completion edges.
//! - Own the fixed palette and garden bounds shared with the bloom engine.
//!
//! # Invariants
//! - A flower is immutable once created; only bulk clearing removes it.
//! - `x` and `y` always lie within `[0, GARDEN_EXTENT)`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every flower.
pub type FlowerId = Uuid;

/// Exclusive upper bound for both garden axes, in percent of the viewport.
pub const GARDEN_EXTENT: f64 = 95.0;

/// Fixed palette flowers are colored from.
pub const FLOWER_COLORS: [&str; 10] = [
    "#FDBA74", // amber
    "#F87171", // red
    "#FB923C", // orange
    "#EC4899", // pink
    "#F472B6", // light pink
    "#A78BFA", // violet
    "#818CF8", // indigo
    "#60A5FA", // blue
    "#38BDF8", // sky
    "#2DD4BF", // teal
];

/// A spawned reward token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flower {
    /// Stable global ID, assigned by the flower store on append.
    pub id: FlowerId,
    /// Visual size driven by the completed task's effort.
    pub magnitude: f64,
    /// Palette entry, chosen at derivation time.
    pub color: String,
    /// Horizontal garden position in `[0, GARDEN_EXTENT)`.
    pub x: f64,
    /// Vertical garden position in `[0, GARDEN_EXTENT)`.
    pub y: f64,
}

/// Bloom-engine output: a flower minus its identity.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowerSpec {
    pub magnitude: f64,
    pub color: String,
    pub x: f64,
    pub y: f64,
}

impl Flower {
    /// Materializes a spec with a fresh stable ID.
    pub fn from_spec(spec: FlowerSpec) -> Self {
        Self {
            id: Uuid::new_v4(),
            magnitude: spec.magnitude,
            color: spec.color,
            x: spec.x,
            y: spec.y,
        }
    }
}
