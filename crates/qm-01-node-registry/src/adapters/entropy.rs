//! Entropy adapters backed by `rand`.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::ports::EntropySource;

/// Thread-local, OS-seeded generator. Not reproducible.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn next_u64(&self) -> u64 {
        rand::thread_rng().next_u64()
    }
}

/// Deterministic generator for tests and reproducible simulations.
///
/// The inner `StdRng` is locked per draw, so a single instance can be shared
/// by every subsystem of a network.
#[derive(Debug)]
pub struct SeededEntropy {
    seed: u64,
    rng: Mutex<StdRng>,
}

impl SeededEntropy {
    /// Create a generator from a `u64` seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// The seed this generator was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl EntropySource for SeededEntropy {
    fn next_u64(&self) -> u64 {
        self.rng.lock().next_u64()
    }
}
