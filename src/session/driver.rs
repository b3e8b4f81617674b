//! Session driver: plays a sequence of games between two strategies.

use std::ops::ControlFlow;

use crate::core::{GameRng, MoveError, PlayerMap, PlayerName, RangeError};
use crate::engine::{new_game, Game, TurnState};
use crate::strategy::{DifficultyStrategy, Strategy};

use super::config::SessionConfig;
use super::record::{GameRecord, SessionReport};

/// Why a session stopped with an error.
#[derive(Clone, Debug, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// Board bounds are malformed.
    #[display("invalid board bounds: {_0}")]
    Range(RangeError),

    /// A strategy kept submitting rejected moves.
    #[display("{player} made no valid move in {attempts} attempts: {error}")]
    InvalidMove {
        player: PlayerName,
        attempts: u32,
        error: MoveError,
    },

    /// A strategy returned no move on a board that still had objects.
    #[display("{_0} returned no move")]
    NoMove(PlayerName),
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Range(err) => Some(err),
            SessionError::InvalidMove { error, .. } => Some(error),
            SessionError::NoMove(_) => None,
        }
    }
}

impl From<RangeError> for SessionError {
    fn from(err: RangeError) -> Self {
        SessionError::Range(err)
    }
}

/// Plays `SessionConfig::games` games, alternating who moves first.
///
/// ```
/// use last_teddy::mcts::MCTSConfig;
/// use last_teddy::session::{Session, SessionConfig};
///
/// let config = SessionConfig::default()
///     .with_games(2)
///     .with_mcts(MCTSConfig::default().with_iterations(50));
/// let mut session = Session::standard(config).unwrap();
///
/// let report = session.run_to_end().unwrap();
/// assert_eq!(report.games_played(), 2);
/// ```
pub struct Session {
    config: SessionConfig,
    strategies: PlayerMap<Box<dyn Strategy>>,
    board_rng: GameRng,
    report: SessionReport,
}

impl Session {
    /// Create a session between two strategies.
    pub fn new(
        config: SessionConfig,
        player1: impl Strategy + 'static,
        player2: impl Strategy + 'static,
    ) -> Result<Self, SessionError> {
        config.board.validate()?;

        let board_rng = GameRng::new(config.seed).for_context("board");
        let player1: Box<dyn Strategy> = Box::new(player1);
        let player2: Box<dyn Strategy> = Box::new(player2);
        Ok(Self {
            config,
            strategies: PlayerMap::from_pair(player1, player2),
            board_rng,
            report: SessionReport::default(),
        })
    }

    /// Create a session where each player uses `DifficultyStrategy::standard`.
    pub fn standard(config: SessionConfig) -> Result<Self, SessionError> {
        let root = GameRng::new(config.seed);
        let player1 = DifficultyStrategy::standard(&root.for_context("player1"), config.mcts.clone());
        let player2 = DifficultyStrategy::standard(&root.for_context("player2"), config.mcts.clone());
        Self::new(config, player1, player2)
    }

    /// Session settings.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Results so far.
    #[must_use]
    pub fn report(&self) -> &SessionReport {
        &self.report
    }

    /// Check if every game has been played.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.report.games_played() >= self.config.games
    }

    /// Play the next game, or `None` once all games are done.
    pub fn play_next(&mut self) -> Option<Result<GameRecord, SessionError>> {
        if self.is_finished() {
            return None;
        }

        let number = self.report.games_played() + 1;
        Some(self.play_game(number).map(|record| {
            self.report.push(record.clone());
            record
        }))
    }

    /// Play remaining games, calling `observer` after each one.
    ///
    /// Returning `ControlFlow::Break` from the observer stops the session
    /// before the next game starts. Games are never interrupted midway.
    pub fn run(
        &mut self,
        mut observer: impl FnMut(&GameRecord, &PlayerMap<u32>) -> ControlFlow<()>,
    ) -> Result<SessionReport, SessionError> {
        while let Some(outcome) = self.play_next() {
            let record = outcome?;
            if observer(&record, &self.report.wins).is_break() {
                if !self.is_finished() {
                    log::info!("session stopped after {} games", record.number);
                }
                break;
            }
        }
        self.report.aborted = !self.is_finished();

        log::info!(
            "session over: {} wins {}, {} wins {}",
            PlayerName::Player1,
            self.report.wins[PlayerName::Player1],
            PlayerName::Player2,
            self.report.wins[PlayerName::Player2],
        );
        Ok(self.report.clone())
    }

    /// Play every remaining game.
    pub fn run_to_end(&mut self) -> Result<SessionReport, SessionError> {
        self.run(|_, _| ControlFlow::Continue(()))
    }

    fn play_game(&mut self, number: u32) -> Result<GameRecord, SessionError> {
        let first_player = self.config.first_player_for(number);
        let start = new_game(&self.config.board, &mut self.board_rng)?;
        log::info!("game {number}: {first_player} first on {start}");

        let mut game = Game::new(start, first_player);
        let mut rejected_moves = 0;

        let result = loop {
            match game.state() {
                TurnState::GameOver(result) => break result,
                TurnState::AwaitingMove(player) => {
                    rejected_moves += self.take_turn(&mut game, player)?;
                }
            }
        };

        log::info!("game {number}: {} wins, {} took the last object", result.winner, result.loser());

        Ok(GameRecord {
            number,
            first_player,
            start: game.starting_configuration().clone(),
            moves: game.history().to_vec(),
            result,
            rejected_moves,
        })
    }

    /// Ask `player` for moves until one is accepted. Returns how many
    /// were rejected first.
    fn take_turn(&mut self, game: &mut Game, player: PlayerName) -> Result<u32, SessionError> {
        let difficulty = self.config.difficulties[player];
        let max_attempts = self.config.max_attempts.max(1);
        let mut attempts = 0;

        loop {
            attempts += 1;
            let mv = self.strategies[player]
                .choose_move(game.configuration(), difficulty)
                .ok_or(SessionError::NoMove(player))?;

            match game.play(player, mv) {
                Ok(_) => return Ok(attempts - 1),
                Err(error) if attempts >= max_attempts => {
                    return Err(SessionError::InvalidMove {
                        player,
                        attempts,
                        error,
                    });
                }
                Err(error) => log::warn!("{player} tried to {mv}: {error}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BoardConfig, Configuration, Move};
    use crate::strategy::{Difficulty, RandomStrategy};

    /// Always takes one object from the first non-empty bin.
    struct TakeOne;

    impl Strategy for TakeOne {
        fn choose_move(&mut self, configuration: &Configuration, _: Difficulty) -> Option<Move> {
            configuration.non_empty_bins().next().map(|bin| Move::new(bin, 1))
        }
    }

    struct Stubborn;

    impl Strategy for Stubborn {
        fn choose_move(&mut self, _: &Configuration, _: Difficulty) -> Option<Move> {
            Some(Move::new(99, 1))
        }
    }

    #[test]
    fn test_rejects_bad_bounds_up_front() {
        let config = SessionConfig::default().with_board(BoardConfig::new(4, 1, 1, 1));
        let err = Session::new(config, TakeOne, TakeOne).err().unwrap();

        assert_eq!(err, SessionError::Range(RangeError::BinCount { min: 4, max: 1 }));
    }

    #[test]
    fn test_take_one_parity() {
        // Three single objects, one taken per turn: the first player takes
        // the first and third, so always loses.
        let config = SessionConfig::default()
            .with_games(4)
            .with_board(BoardConfig::new(3, 3, 1, 1));
        let mut session = Session::new(config, TakeOne, TakeOne).unwrap();

        let report = session.run_to_end().unwrap();

        for record in &report.games {
            assert_eq!(record.result.loser(), record.first_player);
            assert_eq!(record.len(), 3);
        }
        assert_eq!(report.wins, PlayerMap::from_pair(2, 2));
    }

    #[test]
    fn test_invalid_moves_exhaust_attempts() {
        let config = SessionConfig::default().with_max_attempts(2);
        let mut session = Session::new(config, Stubborn, TakeOne).unwrap();

        let err = session.play_next().unwrap().unwrap_err();
        assert!(matches!(
            err,
            SessionError::InvalidMove {
                player: PlayerName::Player1,
                attempts: 2,
                error: MoveError::BinOutOfRange { bin: 99, .. },
            }
        ));
        assert_eq!(session.report().games_played(), 0);
    }

    #[test]
    fn test_play_next_stops() {
        let config = SessionConfig::default().with_games(1);
        let mut session = Session::new(config, RandomStrategy::new(1), RandomStrategy::new(2)).unwrap();

        assert!(session.play_next().unwrap().is_ok());
        assert!(session.is_finished());
        assert!(session.play_next().is_none());
    }

    #[test]
    fn test_error_display() {
        let err = SessionError::NoMove(PlayerName::Player2);
        assert_eq!(err.to_string(), "Player 2 returned no move");
    }
}
