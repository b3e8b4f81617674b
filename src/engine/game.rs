//! Turn state machine for a single game.
//!
//! ```text
//! AwaitingMove(p) --valid move, board not empty--> AwaitingMove(p.other())
//! AwaitingMove(p) --valid move, board empty------> GameOver(p.other())
//! AwaitingMove(p) --invalid move-----------------> AwaitingMove(p)   (error returned)
//! ```
//!
//! The player who takes the last object loses. `Game::play` reports each
//! transition as a `TurnResult` value; there are no callbacks to register.

use serde::{Deserialize, Serialize};

use crate::core::{Configuration, Move, MoveError, MoveRecord, PlayerName};

use super::rules::{apply_move, is_terminal};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameResult {
    /// The player who did not empty the board.
    pub winner: PlayerName,
}

impl GameResult {
    /// Result with the given winner.
    #[must_use]
    pub const fn won_by(winner: PlayerName) -> Self {
        Self { winner }
    }

    /// Result of `mover` emptying the board.
    #[must_use]
    pub const fn emptied_by(mover: PlayerName) -> Self {
        Self {
            winner: mover.other(),
        }
    }

    /// The player who took the last object.
    #[must_use]
    pub const fn loser(&self) -> PlayerName {
        self.winner.other()
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerName) -> bool {
        self.winner == player
    }
}

/// Where a game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    /// Waiting on the given player.
    AwaitingMove(PlayerName),
    /// Finished.
    GameOver(GameResult),
}

/// What an accepted move led to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnResult {
    /// The game goes on with `next` to move on `configuration`.
    Continue {
        next: PlayerName,
        configuration: Configuration,
    },
    /// The move emptied the board.
    Over(GameResult),
}

/// A single game in progress.
#[derive(Clone, Debug)]
pub struct Game {
    start: Configuration,
    configuration: Configuration,
    first_player: PlayerName,
    state: TurnState,
    history: Vec<MoveRecord>,
}

impl Game {
    /// Start a game on `configuration` with `first_player` to move.
    ///
    /// A board that is already empty has no moves to make. The notional
    /// last mover is the player seated before `first_player`, so
    /// `first_player` wins immediately.
    #[must_use]
    pub fn new(configuration: Configuration, first_player: PlayerName) -> Self {
        let state = if is_terminal(&configuration) {
            TurnState::GameOver(GameResult::won_by(first_player))
        } else {
            TurnState::AwaitingMove(first_player)
        };

        Self {
            start: configuration.clone(),
            configuration,
            first_player,
            state,
            history: Vec::new(),
        }
    }

    /// Submit a move for `player`.
    ///
    /// On error nothing changes and the same player is still on turn.
    pub fn play(&mut self, player: PlayerName, mv: Move) -> Result<TurnResult, MoveError> {
        let active = match self.state {
            TurnState::GameOver(_) => return Err(MoveError::GameOver),
            TurnState::AwaitingMove(active) => active,
        };
        if player != active {
            return Err(MoveError::NotYourTurn(player));
        }

        let next = apply_move(&self.configuration, &mv)?;
        let turn = self.history.len() as u32 + 1;
        log::debug!("turn {turn}: {player} {mv} -> {next}");

        self.history.push(MoveRecord::new(player, mv, turn, next.clone()));
        self.configuration = next;

        if is_terminal(&self.configuration) {
            let result = GameResult::emptied_by(player);
            self.state = TurnState::GameOver(result);
            Ok(TurnResult::Over(result))
        } else {
            let next_player = player.other();
            self.state = TurnState::AwaitingMove(next_player);
            Ok(TurnResult::Continue {
                next: next_player,
                configuration: self.configuration.clone(),
            })
        }
    }

    /// Current board.
    #[must_use]
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Board the game started on.
    #[must_use]
    pub fn starting_configuration(&self) -> &Configuration {
        &self.start
    }

    /// Player who moved first.
    #[must_use]
    pub fn first_player(&self) -> PlayerName {
        self.first_player
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Player on turn, or `None` once the game is over.
    #[must_use]
    pub fn active_player(&self) -> Option<PlayerName> {
        match self.state {
            TurnState::AwaitingMove(player) => Some(player),
            TurnState::GameOver(_) => None,
        }
    }

    /// Final result, once there is one.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.state {
            TurnState::AwaitingMove(_) => None,
            TurnState::GameOver(result) => Some(result),
        }
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.state, TurnState::GameOver(_))
    }

    /// Accepted moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }
}
