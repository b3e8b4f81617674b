//! Seedable randomness for board generation, strategies, and search.
//!
//! Nothing in the crate touches a global RNG. Every random draw goes
//! through a `GameRng` handed in by the caller, so a session replays
//! exactly from its seed.
//!
//! Two ways to derive new streams:
//!
//! - `fork`: a fresh stream per call, used for search rollouts
//! - `for_context`: a stream fixed by name, so board generation and each
//!   player's strategy never perturb one another
//!
//! ```
//! use last_teddy::core::GameRng;
//!
//! let root = GameRng::new(7);
//! let mut board = root.for_context("board");
//! let mut again = GameRng::new(7).for_context("board");
//!
//! assert_eq!(board.gen_range(1..=100), again.gen_range(1..=100));
//! ```

use std::hash::{Hash, Hasher};
use std::ops::RangeInclusive;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Golden-ratio increment spreading fork seeds apart.
const FORK_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// ChaCha8 stream that remembers its seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    forks: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            forks: 0,
        }
    }

    /// Seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive the next child stream. The n-th fork of a given seed is
    /// always the same stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.forks += 1;
        Self::new(self.seed.wrapping_add(self.forks.wrapping_mul(FORK_STRIDE)))
    }

    /// Derive a stream keyed by `context` and this stream's seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        (self.seed, context).hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Uniform draw from an inclusive range. The range must not be empty.
    pub fn gen_range(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.inner.gen_range(range)
    }

    /// Uniform index in `0..len`. `len` must be positive.
    pub fn gen_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    /// Uniform pick from a slice, `None` if it is empty.
    #[must_use]
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.inner)
    }

    /// Index drawn in proportion to `weights`.
    ///
    /// Weights need not be normalized. Returns `None` when there is no
    /// positive weight to draw from.
    pub fn choose_weighted(&mut self, weights: &[f64]) -> Option<usize> {
        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return None;
        }

        let mut remaining = self.inner.gen::<f64>() * total;
        for (i, &weight) in weights.iter().enumerate() {
            if remaining < weight {
                return Some(i);
            }
            remaining -= weight;
        }

        // Rounding can leave a sliver past the last weight.
        weights.iter().rposition(|&w| w > 0.0)
    }
}
