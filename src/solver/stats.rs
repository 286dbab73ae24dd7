//! Solver statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during a search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Rounds resolved (nodes popped and expanded).
    pub states_expanded: u64,

    /// Live states admitted to the frontier, seed included.
    pub states_admitted: u64,

    /// Popped states skipped because an equal battle was already expanded.
    pub duplicates_skipped: u64,

    /// Winning states generated (not all are necessarily popped).
    pub victories_seen: u64,

    /// Rounds or branches that ended with the player dead or out of options.
    pub dead_ends: u64,

    /// Largest frontier size observed.
    pub peak_frontier: usize,

    /// Deepest round expanded.
    pub max_round: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate expansions per second.
    #[must_use]
    pub fn states_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.states_expanded as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Record the current frontier size.
    pub fn observe_frontier(&mut self, len: usize) {
        self.peak_frontier = self.peak_frontier.max(len);
    }
}
