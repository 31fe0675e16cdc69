//! Injectable uniform random sources for the promotion draw.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Supplier of uniform fractions in `[0, 1)`.
pub trait RandomSource {
    fn next_fraction(&mut self) -> f64;
}

/// Process randomness backed by `rand::thread_rng`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_fraction(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Reproducible stream seeded from a `u64`.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_fraction(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Returns the same fraction on every draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedFraction(pub f64);

impl RandomSource for FixedFraction {
    fn next_fraction(&mut self) -> f64 {
        self.0
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_fraction(&mut self) -> f64 {
        (**self).next_fraction()
    }
}
