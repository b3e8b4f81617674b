//! Player identification and per-player data storage.
//!
//! ## PlayerName
//!
//! The game is strictly two-player, so players are a two-valued enum
//! rather than an open-ended index.
//!
//! ## PlayerMap
//!
//! Per-player storage with one slot per player, indexable by `PlayerName`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerName {
    Player1,
    Player2,
}

impl PlayerName {
    /// Both players, in seating order.
    pub const ALL: [PlayerName; 2] = [PlayerName::Player1, PlayerName::Player2];

    /// The opponent of this player.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            PlayerName::Player1 => PlayerName::Player2,
            PlayerName::Player2 => PlayerName::Player1,
        }
    }

    /// Seat index (0 for `Player1`, 1 for `Player2`).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerName::Player1 => 0,
            PlayerName::Player2 => 1,
        }
    }
}

impl std::fmt::Display for PlayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use last_teddy::core::{PlayerMap, PlayerName};
///
/// let mut wins: PlayerMap<u32> = PlayerMap::with_value(0);
/// wins[PlayerName::Player2] += 1;
///
/// assert_eq!(wins[PlayerName::Player1], 0);
/// assert_eq!(wins[PlayerName::Player2], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(mut factory: impl FnMut(PlayerName) -> T) -> Self {
        Self {
            data: [factory(PlayerName::Player1), factory(PlayerName::Player2)],
        }
    }

    /// Create a map from explicit values for each player.
    pub fn from_pair(player1: T, player2: T) -> Self {
        Self {
            data: [player1, player2],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerName) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerName) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerName, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerName, &T)> {
        PlayerName::ALL.into_iter().zip(self.data.iter())
    }

    /// Apply a function to each entry, producing a new map.
    pub fn map<U>(&self, mut f: impl FnMut(PlayerName, &T) -> U) -> PlayerMap<U> {
        PlayerMap::new(|player| f(player, self.get(player)))
    }
}

impl<T: Default> Default for PlayerMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<PlayerName> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerName) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerName> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerName) -> &mut Self::Output {
        self.get_mut(player)
    }
}
