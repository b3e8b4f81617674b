//! The game engine.
//!
//! - `rules`: pure functions to generate boards, apply moves, and detect
//!   the end of a game
//! - `game`: the two-player turn state machine built on those rules
//!
//! The engine never interprets who a player is or how moves are chosen.
//! Callers (a session driver, a UI, tests) submit moves and act on the
//! returned `TurnResult`.

pub mod game;
pub mod rules;

pub use game::{Game, GameResult, TurnResult, TurnState};
pub use rules::{apply_move, is_terminal, new_game};
