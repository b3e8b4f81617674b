//! Session configuration.

use serde::{Deserialize, Serialize};

use crate::core::{BoardConfig, PlayerMap, PlayerName};
use crate::mcts::MCTSConfig;
use crate::strategy::Difficulty;

/// Settings for a run of consecutive games.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Games to play.
    pub games: u32,

    /// Who moves first in game 1. The first mover alternates after that.
    pub first_player: PlayerName,

    /// Difficulty passed to each player's strategy.
    pub difficulties: PlayerMap<Difficulty>,

    /// Bounds for every new board.
    pub board: BoardConfig,

    /// Moves a strategy may submit per turn before the session gives up.
    pub max_attempts: u32,

    /// Seed for board generation and the standard strategies.
    pub seed: u64,

    /// Search settings for `Hard` players in a standard session.
    pub mcts: MCTSConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            games: 10,
            first_player: PlayerName::Player1,
            difficulties: PlayerMap::from_pair(Difficulty::Easy, Difficulty::Hard),
            board: BoardConfig::default(),
            max_attempts: 3,
            seed: 42,
            mcts: MCTSConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of games.
    pub fn with_games(mut self, games: u32) -> Self {
        self.games = games;
        self
    }

    /// Set who moves first in game 1.
    pub fn with_first_player(mut self, player: PlayerName) -> Self {
        self.first_player = player;
        self
    }

    /// Set a player's difficulty.
    pub fn with_difficulty(mut self, player: PlayerName, difficulty: Difficulty) -> Self {
        self.difficulties[player] = difficulty;
        self
    }

    /// Set the board bounds.
    pub fn with_board(mut self, board: BoardConfig) -> Self {
        self.board = board;
        self
    }

    /// Set the per-turn attempt limit.
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Set the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the search settings for hard players.
    pub fn with_mcts(mut self, mcts: MCTSConfig) -> Self {
        self.mcts = mcts;
        self
    }

    /// Who moves first in game `number` (1-based).
    ///
    /// Odd games go to `first_player`, even games to the other player.
    #[must_use]
    pub fn first_player_for(&self, number: u32) -> PlayerName {
        if number % 2 == 1 {
            self.first_player
        } else {
            self.first_player.other()
        }
    }
}
