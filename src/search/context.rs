//! Per-search bookkeeping shared by the engines' recursions.

use crate::core::{Payoff, PlayerId};
use crate::game::GameModel;

use super::config::SearchConfig;
use super::error::SearchError;
use super::stats::SearchStats;

/// Borrowed game and config plus the statistics of one search.
///
/// Every recursion frame goes through `enter`, so the depth guard and
/// node counts are enforced the same way in all engines.
pub(crate) struct SearchContext<'a, G: GameModel> {
    pub game: &'a G,
    config: &'a SearchConfig,
    pub stats: SearchStats,
}

impl<'a, G: GameModel> SearchContext<'a, G> {
    pub fn new(game: &'a G, config: &'a SearchConfig) -> Self {
        Self {
            game,
            config,
            stats: SearchStats::default(),
        }
    }

    /// Record a visit at `depth`, failing past the depth guard.
    pub fn enter(&mut self, depth: u32) -> Result<(), SearchError> {
        if self.config.exceeds(depth) {
            return Err(SearchError::DepthLimitExceeded {
                limit: self.config.max_depth,
            });
        }
        self.stats.nodes_visited += 1;
        self.stats.record_depth(depth);
        Ok(())
    }

    /// Legal actions of a non-terminal state; empty sets are a malformed game.
    pub fn actions(&self, state: &G::State, depth: u32) -> Result<Vec<G::Action>, SearchError> {
        let actions = self.game.available_actions(state);
        if actions.is_empty() {
            return Err(SearchError::DeadEnd { depth });
        }
        Ok(actions)
    }

    /// Full payoff vector of a terminal state.
    pub fn terminal_payoff(&mut self, state: &G::State) -> Payoff {
        self.stats.leaves_evaluated += 1;
        self.game.evaluate(state)
    }

    /// One player's payoff at a terminal state.
    pub fn terminal_value(&mut self, state: &G::State, player: PlayerId) -> Result<f64, SearchError> {
        let payoff = self.terminal_payoff(state);
        entry(&payoff, player)
    }
}

/// A player's entry of a payoff vector.
pub(crate) fn entry(payoff: &Payoff, player: PlayerId) -> Result<f64, SearchError> {
    payoff.get(player).ok_or(SearchError::MissingPayoff {
        player,
        len: payoff.player_count(),
    })
}

/// Whether `value` replaces `best`; ties keep the earlier action.
pub(crate) fn improves(best: Option<f64>, value: f64, maximizing: bool) -> bool {
    match best {
        None => true,
        Some(best) if maximizing => value > best,
        Some(best) => value < best,
    }
}
