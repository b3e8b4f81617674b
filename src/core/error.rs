//! Engine error types.
//!
//! - `RangeError`: board generation bounds are malformed. Fatal to the
//!   generation call; bounds are never clamped.
//! - `MoveError`: a move was rejected. Recoverable; the game state is
//!   left exactly as it was and the caller must submit another move.

use serde::{Deserialize, Serialize};

use super::player::PlayerName;

/// Malformed bounds for board generation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum RangeError {
    /// Minimum bin count exceeds the maximum.
    #[display("bin count range is empty: min {min} > max {max}")]
    BinCount { min: u32, max: u32 },

    /// Minimum objects per bin exceeds the maximum.
    #[display("objects per bin range is empty: min {min} > max {max}")]
    ObjectCount { min: u32, max: u32 },

    /// The maximum bin count is zero, so no board can be built.
    #[display("board must allow at least one bin")]
    NoBins,

    /// The maximum objects per bin is zero, so every board starts empty.
    #[display("bins must allow at least one object")]
    NoObjects,
}

impl std::error::Error for RangeError {}

/// A rejected move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum MoveError {
    /// Bin index is past the end of the configuration.
    #[display("bin {bin} is out of range for a board of {bin_count} bins")]
    BinOutOfRange { bin: usize, bin_count: usize },

    /// Quantity is zero.
    #[display("must take at least one object")]
    ZeroQuantity,

    /// Quantity is larger than what the bin holds.
    #[display("cannot take {quantity} from bin {bin} holding {available}")]
    NotEnoughObjects {
        bin: usize,
        quantity: u32,
        available: u32,
    },

    /// The move came from the player who is not on turn.
    #[display("it is not {_0}'s turn")]
    NotYourTurn(PlayerName),

    /// The game has already ended.
    #[display("game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
