//! Board generation configuration.
//!
//! A `BoardConfig` describes the inclusive ranges new boards are drawn
//! from. Bounds are validated, never clamped.

use serde::{Deserialize, Serialize};

use super::error::RangeError;

/// Inclusive bounds for generating a new board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Fewest bins a board may have.
    pub min_bins: u32,

    /// Most bins a board may have.
    pub max_bins: u32,

    /// Fewest objects a bin may start with.
    pub min_objects_per_bin: u32,

    /// Most objects a bin may start with.
    pub max_objects_per_bin: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            min_bins: 2,
            max_bins: 4,
            min_objects_per_bin: 1,
            max_objects_per_bin: 5,
        }
    }
}

impl BoardConfig {
    /// Create a config from explicit bounds.
    #[must_use]
    pub fn new(min_bins: u32, max_bins: u32, min_objects_per_bin: u32, max_objects_per_bin: u32) -> Self {
        Self {
            min_bins,
            max_bins,
            min_objects_per_bin,
            max_objects_per_bin,
        }
    }

    /// Set the inclusive bin count range.
    #[must_use]
    pub fn with_bins(mut self, min: u32, max: u32) -> Self {
        self.min_bins = min;
        self.max_bins = max;
        self
    }

    /// Set the inclusive objects-per-bin range.
    #[must_use]
    pub fn with_objects_per_bin(mut self, min: u32, max: u32) -> Self {
        self.min_objects_per_bin = min;
        self.max_objects_per_bin = max;
        self
    }

    /// Check that every range is non-empty and can produce a playable board.
    pub fn validate(&self) -> Result<(), RangeError> {
        if self.min_bins > self.max_bins {
            return Err(RangeError::BinCount {
                min: self.min_bins,
                max: self.max_bins,
            });
        }
        if self.min_objects_per_bin > self.max_objects_per_bin {
            return Err(RangeError::ObjectCount {
                min: self.min_objects_per_bin,
                max: self.max_objects_per_bin,
            });
        }
        if self.max_bins == 0 {
            return Err(RangeError::NoBins);
        }
        if self.max_objects_per_bin == 0 {
            return Err(RangeError::NoObjects);
        }
        Ok(())
    }
}
