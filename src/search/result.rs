//! Search results.

use serde::{Deserialize, Serialize};

use super::stats::SearchStats;

/// Outcome of a search from the start state.
///
/// `V` is `f64` for the two-player engines (value for the root player)
/// and `Payoff` for general minimax.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResult<A, V = f64> {
    /// Action to take at the root. `None` only if the start state is terminal.
    pub action: Option<A>,

    /// Backed-up value of the start state.
    pub value: V,

    /// Statistics for this search.
    pub stats: SearchStats,
}

/// Action/value pair backed up from one recursion frame.
#[derive(Clone, Debug)]
pub(crate) struct Scored<A, V = f64> {
    pub action: Option<A>,
    pub value: V,
}

impl<A, V> Scored<A, V> {
    pub fn leaf(value: V) -> Self {
        Self { action: None, value }
    }

    pub fn into_result(self, stats: SearchStats) -> SearchResult<A, V> {
        SearchResult {
            action: self.action,
            value: self.value,
            stats,
        }
    }
}
