//! Bloom derivation: completed effort in, flower specs out.
//!
//! # Responsibility
//! - Turn one completion edge into zero-or-more flower specs.
//! - Route all randomness through an injectable source.

pub mod engine;
pub mod random;
