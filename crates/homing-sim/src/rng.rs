//! Random source for launch jitter, trail emission and spark variation.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Uniform integer draws backed by a ChaCha8 stream.
///
/// Seeded once. With a fixed seed the whole simulation is reproducible.
pub struct RandomSource {
    rng: ChaCha8Rng,
}

impl RandomSource {
    /// Seed from `seed`, or from OS entropy when `None`.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self {
                rng: ChaCha8Rng::from_entropy(),
            },
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Uniform draw from the inclusive range `[min, max]`.
    pub fn int(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        self.rng.gen_range(min..=max)
    }

    /// Uniform draw from `{0.00, 0.01, ..., 0.99}`.
    pub fn fraction(&mut self) -> f32 {
        self.int(0, 99) as f32 / 100.0
    }

    /// True with probability `1 / n`.
    pub fn one_in(&mut self, n: i32) -> bool {
        self.int(0, n - 1) == 0
    }
}
