//! Search statistics for diagnostics and pruning comparisons.

use serde::{Deserialize, Serialize};

/// Statistics collected during a single search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// States entered by the recursion, root included.
    pub nodes_visited: u64,

    /// Terminal states scored with the model's payoff.
    pub leaves_evaluated: u64,

    /// Horizon states scored with the static evaluator.
    pub heuristic_evaluations: u64,

    /// Times a node stopped examining children early.
    pub cutoffs: u64,

    /// Deepest ply reached (root = 0).
    pub max_depth: u32,
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

    /// Leaves scored by either the model or the evaluator.
    #[must_use]
    pub fn evaluations(&self) -> u64 {
        self.leaves_evaluated + self.heuristic_evaluations
    }

    /// Fraction of `baseline`'s visited nodes this search skipped.
    ///
    /// Returns 0.0 against an empty baseline.
    #[must_use]
    pub fn prune_ratio_against(&self, baseline: &SearchStats) -> f64 {
        if baseline.nodes_visited == 0 {
            0.0
        } else {
            1.0 - self.nodes_visited as f64 / baseline.nodes_visited as f64
        }
    }

    pub(crate) fn record_depth(&mut self, depth: u32) {
        self.max_depth = self.max_depth.max(depth);
    }
}
