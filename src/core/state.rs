//! Board configuration: the full game state.
//!
//! A `Configuration` is an ordered sequence of bin counts. It has value
//! semantics: applying a move returns a new configuration and leaves the
//! input untouched.
//!
//! ## Persistent Data Structures
//!
//! Counts live in an `im::Vector`, so cloning is O(1) and an applied move
//! shares structure with its predecessor. Search code clones
//! configurations freely.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::Move;
use super::error::MoveError;
use super::rng::GameRng;

/// Remaining object counts, one per bin.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Configuration {
    bins: Vector<u32>,
}

impl Configuration {
    /// Create a configuration from bin counts.
    pub fn new(bins: impl IntoIterator<Item = u32>) -> Self {
        Self {
            bins: bins.into_iter().collect(),
        }
    }

    /// Number of bins. Fixed for the lifetime of a game.
    #[must_use]
    pub fn bin_count(&self) -> usize {
        self.bins.len()
    }

    /// Count in a bin, or `None` if out of range.
    #[must_use]
    pub fn get(&self, bin: usize) -> Option<u32> {
        self.bins.get(bin).copied()
    }

    /// Iterate over bin counts in order.
    pub fn bins(&self) -> impl Iterator<Item = u32> + '_ {
        self.bins.iter().copied()
    }

    /// Bin counts as a plain vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<u32> {
        self.bins().collect()
    }

    /// Total objects left on the board.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.bins().map(u64::from).sum()
    }

    /// True when every bin is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bins().all(|count| count == 0)
    }

    /// Indices of bins that still hold objects.
    pub fn non_empty_bins(&self) -> impl Iterator<Item = usize> + '_ {
        self.bins()
            .enumerate()
            .filter(|&(_, count)| count > 0)
            .map(|(i, _)| i)
    }

    /// Check a move against this configuration.
    pub fn validate(&self, mv: &Move) -> Result<(), MoveError> {
        let available = self.get(mv.bin).ok_or(MoveError::BinOutOfRange {
            bin: mv.bin,
            bin_count: self.bin_count(),
        })?;

        if mv.quantity == 0 {
            return Err(MoveError::ZeroQuantity);
        }
        if mv.quantity > available {
            return Err(MoveError::NotEnoughObjects {
                bin: mv.bin,
                quantity: mv.quantity,
                available,
            });
        }
        Ok(())
    }

    /// Apply a move, returning the resulting configuration.
    ///
    /// `self` is never modified.
    ///
    /// ```
    /// use last_teddy::core::{Configuration, Move};
    ///
    /// let before = Configuration::from(vec![3, 3]);
    /// let after = before.apply(&Move::new(0, 3)).unwrap();
    ///
    /// assert_eq!(after.to_vec(), vec![0, 3]);
    /// assert_eq!(before.to_vec(), vec![3, 3]);
    /// ```
    pub fn apply(&self, mv: &Move) -> Result<Configuration, MoveError> {
        self.validate(mv)?;
        let remaining = self.bins[mv.bin] - mv.quantity;
        Ok(Self {
            bins: self.bins.update(mv.bin, remaining),
        })
    }

    /// Apply a move already known to be legal, e.g. one from `legal_moves`.
    pub(crate) fn apply_legal(&self, mv: &Move) -> Configuration {
        debug_assert!(self.validate(mv).is_ok(), "illegal move {mv} on {self}");
        Self {
            bins: self.bins.update(mv.bin, self.bins[mv.bin] - mv.quantity),
        }
    }

    /// Every legal move, bin by bin, smallest quantity first.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        self.bins()
            .enumerate()
            .flat_map(|(bin, count)| (1..=count).map(move |quantity| Move::new(bin, quantity)))
            .collect()
    }

    /// Legal moves, thinned out when there are more than `limit`.
    ///
    /// A thinned list keeps, per bin, the smallest quantities and the ones
    /// that leave a bin nearly or fully empty. Those endings decide the
    /// game. The result never exceeds roughly `limit` moves.
    #[must_use]
    pub fn candidate_moves(&self, limit: usize) -> Vec<Move> {
        if self.total() <= limit as u64 {
            return self.legal_moves();
        }

        let non_empty = self.non_empty_bins().count().max(1);
        let per_end = u32::try_from(limit / (2 * non_empty)).unwrap_or(u32::MAX).max(1);

        let mut moves = Vec::new();
        for (bin, count) in self.bins().enumerate().filter(|&(_, c)| c > 0) {
            let low = per_end.min(count);
            let high_start = count.saturating_sub(per_end).max(low) + 1;
            moves.extend((1..=low).map(|q| Move::new(bin, q)));
            moves.extend((high_start..=count).map(|q| Move::new(bin, q)));
        }
        moves
    }

    /// A legal move drawn uniformly from all legal moves, or `None` on an
    /// empty board.
    ///
    /// Bins are weighted by their counts, so each `(bin, quantity)` pair is
    /// equally likely. Costs O(bins) regardless of how many objects remain.
    pub fn random_move(&self, rng: &mut GameRng) -> Option<Move> {
        let weights: Vec<f64> = self.bins().map(f64::from).collect();
        let bin = rng.choose_weighted(&weights)?;
        let quantity = rng.gen_range(1..=self.bins[bin]);
        Some(Move::new(bin, quantity))
    }
}

impl From<Vec<u32>> for Configuration {
    fn from(bins: Vec<u32>) -> Self {
        Self::new(bins)
    }
}

impl std::fmt::Display for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, count) in self.bins().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{count}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basics() {
        let config = Configuration::from(vec![3, 0, 2]);

        assert_eq!(config.bin_count(), 3);
        assert_eq!(config.get(0), Some(3));
        assert_eq!(config.get(3), None);
        assert_eq!(config.total(), 5);
        assert!(!config.is_empty());
        assert_eq!(config.non_empty_bins().collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(config.to_string(), "[3, 0, 2]");
    }

    #[test]
    fn test_empty() {
        assert!(Configuration::from(vec![0, 0]).is_empty());
        assert!(Configuration::new(std::iter::empty()).is_empty());
    }

    #[test]
    fn test_apply_subtracts() {
        let config = Configuration::from(vec![3, 3]);
        let next = config.apply(&Move::new(1, 2)).unwrap();

        assert_eq!(next.to_vec(), vec![3, 1]);
        assert_eq!(config.to_vec(), vec![3, 3]);
    }

    #[test]
    fn test_apply_rejects_bad_moves() {
        let config = Configuration::from(vec![0, 3]);

        assert_eq!(
            config.apply(&Move::new(2, 1)),
            Err(MoveError::BinOutOfRange { bin: 2, bin_count: 2 })
        );
        assert_eq!(config.apply(&Move::new(1, 0)), Err(MoveError::ZeroQuantity));
        assert_eq!(
            config.apply(&Move::new(1, 4)),
            Err(MoveError::NotEnoughObjects {
                bin: 1,
                quantity: 4,
                available: 3
            })
        );
        assert_eq!(
            config.apply(&Move::new(0, 1)),
            Err(MoveError::NotEnoughObjects {
                bin: 0,
                quantity: 1,
                available: 0
            })
        );
    }

    #[test]
    fn test_legal_moves() {
        let config = Configuration::from(vec![2, 0, 1]);

        assert_eq!(
            config.legal_moves(),
            vec![Move::new(0, 1), Move::new(0, 2), Move::new(2, 1)]
        );
        assert!(Configuration::from(vec![0, 0]).legal_moves().is_empty());
    }

    #[test]
    fn test_random_move_is_legal_and_covers_moves() {
        let config = Configuration::from(vec![2, 0, 1]);
        let mut rng = GameRng::new(4);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..300 {
            let mv = config.random_move(&mut rng).unwrap();
            assert!(config.validate(&mv).is_ok());
            seen.insert(mv);
        }

        assert_eq!(seen.len(), config.legal_moves().len());
        assert_eq!(Configuration::from(vec![0, 0]).random_move(&mut rng), None);
    }

    #[test]
    fn test_candidate_moves() {
        let small = Configuration::from(vec![2, 3]);
        assert_eq!(small.candidate_moves(100), small.legal_moves());

        let huge = Configuration::from(vec![u32::MAX, 0, 10]);
        let moves = huge.candidate_moves(8);

        assert_eq!(
            moves,
            vec![
                Move::new(0, 1),
                Move::new(0, 2),
                Move::new(0, u32::MAX - 1),
                Move::new(0, u32::MAX),
                Move::new(2, 1),
                Move::new(2, 2),
                Move::new(2, 9),
                Move::new(2, 10),
            ]
        );
        assert!(moves.iter().all(|mv| huge.validate(mv).is_ok()));
    }

    #[test]
    fn test_random_move_on_huge_bins() {
        let config = Configuration::from(vec![u32::MAX, 0, u32::MAX]);
        let mut rng = GameRng::new(9);

        for _ in 0..100 {
            let mv = config.random_move(&mut rng).unwrap();
            assert_ne!(mv.bin, 1);
            assert!(config.apply(&mv).is_ok());
        }
    }

    #[test]
    fn test_serialization() {
        let config = Configuration::from(vec![4, 1, 0]);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: Configuration = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
