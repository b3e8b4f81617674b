//! # last-teddy
//!
//! Engine for "Don't Take The Last Teddy": two players take turns removing
//! objects from a row of bins, and whoever takes the last object loses.
//!
//! ## Design Principles
//!
//! 1. **Value-Semantics Boards**: `Configuration` is never mutated. Applying
//!    a move returns a new board backed by a persistent vector.
//!
//! 2. **Explicit Control Flow**: the engine returns `TurnResult` values
//!    instead of firing events. Callers decide what happens next.
//!
//! 3. **Injected Randomness**: every random draw goes through a seeded
//!    `GameRng`, so games and searches replay exactly.
//!
//! ## Modules
//!
//! - `core`: players, boards, moves, RNG, errors, board bounds
//! - `engine`: board generation, move application, turn state machine
//! - `strategy`: the pluggable move-selection interface
//! - `mcts`: Monte Carlo Tree Search used by the hard strategy
//! - `session`: multi-game driver with alternating first mover

pub mod core;
pub mod engine;
pub mod mcts;
pub mod session;
pub mod strategy;

pub use crate::core::{
    BoardConfig, Configuration, GameRng, Move, MoveError, MoveRecord, PlayerMap,
    PlayerName, RangeError,
};

pub use crate::engine::{apply_move, is_terminal, new_game, Game, GameResult, TurnResult, TurnState};

pub use crate::strategy::{Difficulty, DifficultyStrategy, MctsStrategy, RandomStrategy, Strategy};

pub use crate::mcts::{MCTSConfig, MCTSSearch, SearchStats};

pub use crate::session::{GameRecord, Session, SessionConfig, SessionError, SessionReport};
