//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one decision.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes entered (every max/min call plus the root).
    pub nodes: u64,

    /// Successor states forecast.
    pub forecasts: u64,

    /// Horizon leaves handed to the evaluator.
    pub leaves: u64,

    /// Alpha and beta cutoffs taken.
    pub cutoffs: u64,

    /// Deepest fully completed depth.
    pub completed_depth: u32,

    /// Whether the deadline cut the search short.
    pub timed_out: bool,

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

    /// Nodes entered per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Mean successors forecast per expanded node.
    #[must_use]
    pub fn effective_branching(&self) -> f64 {
        let expanded = self.nodes.saturating_sub(self.leaves);
        if expanded == 0 {
            0.0
        } else {
            self.forecasts as f64 / expanded as f64
        }
    }
}
