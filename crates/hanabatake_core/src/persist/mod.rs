//! Durable state restoration and snapshot saving.
//!
//! # Responsibility
//! - Scope load/save of the named state documents.
//! - Guarantee the load-before-save ordering invariant.

pub mod state_manager;
