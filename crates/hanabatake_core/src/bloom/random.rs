//! Random source abstraction for bloom derivation.
//!
//! # Responsibility
//! - Decouple derivation outputs from the process PRNG.
//! - Make color and position choices reproducible in tests.

use rand::Rng;

/// Uniform random source consumed by the bloom engine.
pub trait RandomSource {
    /// Returns a uniform value in `[0, 1)`.
    fn unit(&mut self) -> f64;
}

/// Thread-local PRNG-backed source for production use.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandomSource;

impl RandomSource for ThreadRandomSource {
    fn unit(&mut self) -> f64 {
        rand::rng().random::<f64>()
    }
}
