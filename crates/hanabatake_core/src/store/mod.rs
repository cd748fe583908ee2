//! In-memory collection owners.
//!
//! # Responsibility
//! - Hold the task and flower collections behind named mutation methods.
//! - Expose snapshot-style read views, decoupled from any rendering concern.

pub mod flower_store;
pub mod task_store;
