//! Deterministic random number generation for baseline play.
//!
//! The rules engines themselves are deterministic and never draw random
//! numbers. Randomness lives with the drivers: the uniform-random baseline
//! picks among `legal_actions()`, and a search driver may sample from an
//! evaluator's policy. Both go through `GameRng` so a seed fully reproduces a
//! game.
//!
//! ```
//! use rust_duel::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut game_rng = rng.fork();
//!
//! let mut replay = GameRng::new(42).fork();
//! assert_eq!(game_rng.gen_range_usize(0..100), replay.gen_range_usize(0..100));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded ChaCha8 generator with deterministic forking.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// The seed this generator was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive an independent generator, one per game in a batch.
    ///
    /// The n-th fork of a given seed is always the same generator.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self::new(fork_seed)
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Pick one element with equal probability.
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }

    /// Pick an index with probability proportional to its weight.
    ///
    /// Returns `None` if weights are empty or sum to zero.
    pub fn choose_weighted(&mut self, weights: &[f32]) -> Option<usize> {
        let total: f32 = weights.iter().sum();
        if weights.is_empty() || total <= 0.0 {
            return None;
        }

        let mut threshold = self.inner.gen::<f32>() * total;
        for (i, &weight) in weights.iter().enumerate() {
            threshold -= weight;
            if threshold <= 0.0 && weight > 0.0 {
                return Some(i);
            }
        }

        // Rounding left a sliver of mass: fall back to the last non-zero weight.
        weights.iter().rposition(|&w| w > 0.0)
    }
}
