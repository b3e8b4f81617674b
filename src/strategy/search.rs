//! Monte Carlo tree search wrapped as a `Strategy`.

use crate::core::{Configuration, Move, PlayerName};
use crate::mcts::{MCTSConfig, MCTSSearch, SearchStats};

use super::{Difficulty, Strategy};

/// Chooses moves by Monte Carlo tree search.
///
/// The game is impartial, so the search always runs from `Player1`'s
/// seat; only the board matters.
pub struct MctsStrategy {
    search: MCTSSearch,
}

impl MctsStrategy {
    /// Create a strategy with the given search settings.
    #[must_use]
    pub fn new(config: MCTSConfig) -> Self {
        Self {
            search: MCTSSearch::new(config),
        }
    }

    /// Statistics from the most recent search.
    #[must_use]
    pub fn last_stats(&self) -> &SearchStats {
        self.search.stats()
    }
}

impl Default for MctsStrategy {
    fn default() -> Self {
        Self::new(MCTSConfig::default())
    }
}

impl Strategy for MctsStrategy {
    fn choose_move(&mut self, configuration: &Configuration, _difficulty: Difficulty) -> Option<Move> {
        self.search.search(configuration, PlayerName::Player1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_winning_move() {
        let mut strategy = MctsStrategy::new(MCTSConfig::default().with_iterations(500));
        let board = Configuration::from(vec![3]);

        assert_eq!(strategy.choose_move(&board, Difficulty::Hard), Some(Move::new(0, 2)));
        assert!(strategy.last_stats().iterations > 0);
    }

    #[test]
    fn test_empty_board() {
        let mut strategy = MctsStrategy::default();
        assert_eq!(strategy.choose_move(&Configuration::from(vec![0, 0]), Difficulty::Hard), None);
    }
}
