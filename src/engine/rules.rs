//! The game's rules as pure functions.
//!
//! - `new_game`: draw a fresh board within configured bounds
//! - `apply_move`: validate a move and return the resulting board
//! - `is_terminal`: the game is over when every bin is empty
//!
//! None of these touch shared state. The turn state machine in
//! `engine::game` is layered on top.

use crate::core::{BoardConfig, Configuration, GameRng, Move, MoveError, RangeError};

/// Draw a new board.
///
/// The bin count is drawn uniformly from `[min_bins, max_bins]`, then each
/// bin's count uniformly from `[min_objects_per_bin, max_objects_per_bin]`.
///
/// ```
/// use last_teddy::core::{BoardConfig, GameRng};
/// use last_teddy::engine::new_game;
///
/// let mut rng = GameRng::new(42);
/// let board = new_game(&BoardConfig::new(2, 2, 3, 3), &mut rng).unwrap();
/// assert_eq!(board.to_vec(), vec![3, 3]);
/// ```
pub fn new_game(config: &BoardConfig, rng: &mut GameRng) -> Result<Configuration, RangeError> {
    config.validate()?;

    let bin_count = rng.gen_range(config.min_bins..=config.max_bins);
    let bins: Vec<u32> = (0..bin_count)
        .map(|_| rng.gen_range(config.min_objects_per_bin..=config.max_objects_per_bin))
        .collect();

    Ok(Configuration::from(bins))
}

/// Validate `mv` against `config` and return the resulting board.
#[inline]
pub fn apply_move(config: &Configuration, mv: &Move) -> Result<Configuration, MoveError> {
    config.apply(mv)
}

/// True iff every bin is empty.
#[inline]
#[must_use]
pub fn is_terminal(config: &Configuration) -> bool {
    config.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_fixed_bounds() {
        let mut rng = GameRng::new(1);
        let config = new_game(&BoardConfig::new(2, 2, 3, 3), &mut rng).unwrap();

        assert_eq!(config.to_vec(), vec![3, 3]);
        assert!(!is_terminal(&config));
    }

    #[test]
    fn test_new_game_within_bounds() {
        let bounds = BoardConfig::new(1, 6, 2, 9);
        let mut rng = GameRng::new(99);

        for _ in 0..200 {
            let config = new_game(&bounds, &mut rng).unwrap();
            assert!((1..=6).contains(&(config.bin_count() as u32)));
            assert!(config.bins().all(|c| (2..=9).contains(&c)));
        }
    }

    #[test]
    fn test_new_game_rejects_bad_bounds() {
        let mut rng = GameRng::new(1);

        assert_eq!(
            new_game(&BoardConfig::new(3, 2, 1, 1), &mut rng),
            Err(RangeError::BinCount { min: 3, max: 2 })
        );
        assert_eq!(
            new_game(&BoardConfig::new(1, 2, 5, 1), &mut rng),
            Err(RangeError::ObjectCount { min: 5, max: 1 })
        );
    }

    #[test]
    fn test_new_game_deterministic() {
        let bounds = BoardConfig::default();
        let a = new_game(&bounds, &mut GameRng::new(7)).unwrap();
        let b = new_game(&bounds, &mut GameRng::new(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_walkthrough() {
        let start = Configuration::from(vec![3, 3]);

        let middle = apply_move(&start, &Move::new(0, 3)).unwrap();
        assert_eq!(middle.to_vec(), vec![0, 3]);
        assert!(!is_terminal(&middle));

        assert!(apply_move(&middle, &Move::new(1, 4)).is_err());
        assert_eq!(middle.to_vec(), vec![0, 3]);

        let end = apply_move(&middle, &Move::new(1, 3)).unwrap();
        assert_eq!(end.to_vec(), vec![0, 0]);
        assert!(is_terminal(&end));
    }
}
