//! Solver configuration parameters.

use serde::{Deserialize, Serialize};

/// Order in which frontier states are expanded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchStrategy {
    /// Cheapest state first. A victory is reported when it is popped, so the
    /// reported cost is the true minimum.
    #[default]
    CostOrdered,

    /// Plain FIFO. The first victory generated is reported. Relies on rounds
    /// being expanded in layers for its answer to be the cheapest.
    BreadthFirst,
}

/// Solver configuration parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum live states ever admitted to the frontier, seed included.
    /// Hitting it ends the search as a loss.
    pub frontier_capacity: usize,

    /// Expansion order.
    pub strategy: SearchStrategy,

    /// Skip states whose battle (ignoring cost) was already expanded.
    /// Only honoured by `CostOrdered`, where the first expansion is the cheapest.
    pub dedupe_states: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            frontier_capacity: 1 << 20,
            strategy: SearchStrategy::CostOrdered,
            dedupe_states: true,
        }
    }
}

impl SearchConfig {
    /// Create a new config with custom frontier capacity.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Frontier must hold at least the seed state");
        self.frontier_capacity = capacity;
        self
    }

    /// Create a new config with custom strategy.
    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Create a new config with state deduplication on or off.
    pub fn with_dedupe(mut self, dedupe: bool) -> Self {
        self.dedupe_states = dedupe;
        self
    }

    /// Whether deduplication is in effect for the configured strategy.
    #[must_use]
    pub fn dedupes(&self) -> bool {
        self.dedupe_states && self.strategy == SearchStrategy::CostOrdered
    }
}
