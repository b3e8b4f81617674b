//! Core engine types: players, board configuration, moves, RNG, errors,
//! and board generation bounds.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Move, MoveRecord};
pub use config::BoardConfig;
pub use error::{MoveError, RangeError};
pub use player::{PlayerMap, PlayerName};
pub use rng::GameRng;
pub use state::Configuration;
