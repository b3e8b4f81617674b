//! Move selection for computer players.
//!
//! A `Strategy` turns a board and a difficulty into a move. The engine
//! never calls strategies itself; the session driver does.
//!
//! - `RandomStrategy`: uniform over legal moves
//! - `MctsStrategy`: Monte Carlo tree search
//! - `DifficultyStrategy`: one strategy for `Easy`, another for `Hard`

mod difficulty;
mod random;
mod search;

pub use difficulty::DifficultyStrategy;
pub use random::RandomStrategy;
pub use search::MctsStrategy;

use serde::{Deserialize, Serialize};

use crate::core::{Configuration, Move};

/// How hard a computer player should try.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

/// Chooses moves.
pub trait Strategy {
    /// Pick a move on `configuration`.
    ///
    /// Returns `None` only when the board is empty. A returned move is
    /// not trusted; the engine validates it.
    fn choose_move(&mut self, configuration: &Configuration, difficulty: Difficulty) -> Option<Move>;
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn choose_move(&mut self, configuration: &Configuration, difficulty: Difficulty) -> Option<Move> {
        (**self).choose_move(configuration, difficulty)
    }
}
