//! Picks a strategy per difficulty level.

use crate::core::{Configuration, GameRng, Move};
use crate::mcts::MCTSConfig;

use super::{Difficulty, MctsStrategy, RandomStrategy, Strategy};

/// Routes each request to a strategy picked by difficulty.
pub struct DifficultyStrategy {
    easy: Box<dyn Strategy>,
    hard: Box<dyn Strategy>,
}

impl DifficultyStrategy {
    /// Combine an easy and a hard strategy.
    pub fn new(easy: impl Strategy + 'static, hard: impl Strategy + 'static) -> Self {
        Self {
            easy: Box::new(easy),
            hard: Box::new(hard),
        }
    }

    /// Random play when easy, tree search when hard, both seeded from `rng`.
    pub fn standard(rng: &GameRng, mcts: MCTSConfig) -> Self {
        let easy = RandomStrategy::from_rng(rng.for_context("easy"));
        let hard = MctsStrategy::new(mcts.with_seed(rng.for_context("hard").seed()));
        Self::new(easy, hard)
    }
}

impl Strategy for DifficultyStrategy {
    fn choose_move(&mut self, configuration: &Configuration, difficulty: Difficulty) -> Option<Move> {
        match difficulty {
            Difficulty::Easy => self.easy.choose_move(configuration, difficulty),
            Difficulty::Hard => self.hard.choose_move(configuration, difficulty),
        }
    }
}
