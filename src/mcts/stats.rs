//! Search statistics.

use serde::{Deserialize, Serialize};

/// Statistics collected during one search.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Iterations performed.
    pub iterations: u32,

    /// Nodes added to the tree.
    pub nodes_expanded: u32,

    /// Random rollouts performed.
    pub simulations: u32,

    /// Iterations that ended on an already-known empty board.
    pub terminal_hits: u32,

    /// Maximum depth reached.
    pub max_depth: u32,

    /// Wall time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Iterations per second of wall time.
    #[must_use]
    pub fn iterations_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.iterations as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
