//! Game records and session reports.
//!
//! A `GameRecord` captures one finished game: the board it started on, who
//! moved first, every accepted move, and the result. Records can be
//! stored compactly with bincode or as JSON through serde.

use serde::{Deserialize, Serialize};

use crate::core::{Configuration, MoveRecord, PlayerMap, PlayerName};
use crate::engine::GameResult;

/// One finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Game number within the session, starting at 1.
    pub number: u32,

    /// Player who moved first.
    pub first_player: PlayerName,

    /// Board the game started on.
    pub start: Configuration,

    /// Accepted moves in order.
    pub moves: Vec<MoveRecord>,

    /// Final result.
    pub result: GameResult,

    /// Moves the engine rejected along the way.
    pub rejected_moves: u32,
}

impl GameRecord {
    /// Number of accepted moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Check if no moves were made.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Moves made by one player.
    pub fn player_moves(&self, player: PlayerName) -> impl Iterator<Item = &MoveRecord> {
        self.moves.iter().filter(move |m| m.player == player)
    }

    /// Board after the last move.
    #[must_use]
    pub fn final_configuration(&self) -> &Configuration {
        self.moves.last().map_or(&self.start, |m| &m.result)
    }

    /// Serialize with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Deserialize from bincode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

/// Everything a session produced.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionReport {
    /// Finished games in order.
    pub games: Vec<GameRecord>,

    /// Wins per player.
    pub wins: PlayerMap<u32>,

    /// True if the session was stopped before playing every game.
    pub aborted: bool,
}

impl SessionReport {
    /// Add a finished game.
    pub fn push(&mut self, record: GameRecord) {
        self.wins[record.result.winner] += 1;
        self.games.push(record);
    }

    /// Number of games finished.
    #[must_use]
    pub fn games_played(&self) -> u32 {
        self.games.len() as u32
    }

    /// Fraction of finished games won by `player`.
    #[must_use]
    pub fn win_rate(&self, player: PlayerName) -> f64 {
        if self.games.is_empty() {
            0.0
        } else {
            self.wins[player] as f64 / self.games.len() as f64
        }
    }
}
