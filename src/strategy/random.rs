//! Uniformly random play, used for the easy difficulty.

use crate::core::{Configuration, GameRng, Move};

use super::{Difficulty, Strategy};

/// Picks uniformly among legal moves, ignoring difficulty.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    rng: GameRng,
}

impl RandomStrategy {
    /// Create a strategy seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    /// Create a strategy drawing from an existing stream.
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Strategy for RandomStrategy {
    fn choose_move(&mut self, configuration: &Configuration, _difficulty: Difficulty) -> Option<Move> {
        configuration.random_move(&mut self.rng)
    }
}
