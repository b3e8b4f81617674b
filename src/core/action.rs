//! Moves and move history.
//!
//! A move names a bin and how many objects to take from it. Whether it is
//! legal depends on the configuration it is applied to; see
//! `Configuration::validate`.

use serde::{Deserialize, Serialize};

use super::player::PlayerName;
use super::state::Configuration;

/// Take `quantity` objects from bin `bin`.
///
/// ```
/// use last_teddy::core::Move;
///
/// let mv = Move::new(0, 3);
/// assert_eq!(mv.bin, 0);
/// assert_eq!(mv.quantity, 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Zero-based bin index.
    pub bin: usize,

    /// Objects to remove.
    pub quantity: u32,
}

impl Move {
    /// Create a new move.
    #[must_use]
    pub const fn new(bin: usize, quantity: u32) -> Self {
        Self { bin, quantity }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "take {} from bin {}", self.quantity, self.bin)
    }
}

/// An accepted move with the configuration it produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: PlayerName,

    /// The move taken.
    pub mv: Move,

    /// Turn number, starting at 1.
    pub turn: u32,

    /// Configuration after the move.
    pub result: Configuration,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(player: PlayerName, mv: Move, turn: u32, result: Configuration) -> Self {
        Self {
            player,
            mv,
            turn,
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        assert_eq!(Move::new(2, 1).to_string(), "take 1 from bin 2");
    }

    #[test]
    fn test_move_hash() {
        use std::collections::HashSet;

        let moves: HashSet<_> = [Move::new(0, 1), Move::new(0, 1), Move::new(1, 1)]
            .into_iter()
            .collect();
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn test_move_record_serialization() {
        let record = MoveRecord::new(
            PlayerName::Player2,
            Move::new(1, 2),
            4,
            Configuration::from(vec![0, 1]),
        );

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
