//! Domain model for the flower-garden task tracker.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep validation rules next to the records they protect.
//!
//! # Invariants
//! - Every task and flower is identified by a stable UUID.
//! - Flowers are immutable once created.

pub mod daily_note;
pub mod flower;
pub mod task;
