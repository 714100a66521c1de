//! Random source port
//!
//! Defines the single primitive the scoring engine draws from.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of uniform draws in `[0, 1)`
///
/// Scoring functions take this as an explicit parameter, so a seeded
/// generator (or a scripted sequence in tests) makes a verdict reproducible.
pub trait RandomSource {
    /// Next uniform value in `[0, 1)`
    fn unit(&mut self) -> f64;
}

impl RandomSource for StdRng {
    fn unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

impl RandomSource for ThreadRng {
    fn unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Generator picked at the edge: seeded when a seed is given, else the
/// thread-local one
#[derive(Debug)]
pub enum Draws {
    /// Reproducible sequence
    Seeded(StdRng),
    /// Fresh entropy
    Thread(ThreadRng),
}

impl Draws {
    /// Seeded generator for `Some`, thread generator for `None`
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::Seeded(StdRng::seed_from_u64(seed)),
            None => Self::Thread(rand::rng()),
        }
    }
}

impl RandomSource for Draws {
    fn unit(&mut self) -> f64 {
        match self {
            Self::Seeded(rng) => rng.unit(),
            Self::Thread(rng) => rng.unit(),
        }
    }
}
