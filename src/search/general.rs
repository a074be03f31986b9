//! Minimax generalized to N players and arbitrary payoffs.
//!
//! Each frame backs up the whole payoff vector of the successor that is
//! best for the player to move, judged only by that player's own entry.
//! Nothing is assumed about how one player's gain relates to another's.

use tracing::debug;

use crate::core::Payoff;
use crate::game::GameModel;

use super::config::SearchConfig;
use super::context::{entry, improves, SearchContext};
use super::error::SearchError;
use super::result::{Scored, SearchResult};
use super::stats::SearchStats;

/// N-player, general-sum minimax.
#[derive(Clone, Debug, Default)]
pub struct GeneralMinimax {
    config: SearchConfig,
    stats: SearchStats,
}

impl GeneralMinimax {
    /// Create a new general minimax engine.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    /// Search from the game's start state.
    ///
    /// The result value is the payoff vector the game reaches under
    /// optimal self-interested play.
    pub fn search<G: GameModel>(
        &mut self,
        game: &G,
    ) -> Result<SearchResult<G::Action, Payoff>, SearchError> {
        let start = game.start_state();
        debug!(players = game.player_count(), "general minimax search started");

        let mut ctx = SearchContext::new(game, &self.config);
        let scored = general_node(&mut ctx, &start, 0);
        self.stats = ctx.stats;
        let scored = scored?;

        debug!(
            action = ?scored.action,
            value = ?scored.value.as_slice(),
            nodes = self.stats.nodes_visited,
            "general minimax search finished"
        );
        Ok(scored.into_result(self.stats.clone()))
    }

    /// Statistics of the last search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

fn general_node<G: GameModel>(
    ctx: &mut SearchContext<'_, G>,
    state: &G::State,
    depth: u32,
) -> Result<Scored<G::Action, Payoff>, SearchError> {
    ctx.enter(depth)?;

    if ctx.game.is_terminal(state) {
        return Ok(Scored::leaf(ctx.terminal_payoff(state)));
    }

    let mover = ctx.game.player_to_move(state);
    let mut best: Option<(G::Action, f64, Payoff)> = None;

    for action in ctx.actions(state, depth)? {
        let child = ctx.game.transition(state, &action);
        let payoff = general_node(ctx, &child, depth + 1)?.value;
        let own = entry(&payoff, mover)?;

        if improves(best.as_ref().map(|(_, v, _)| *v), own, true) {
            best = Some((action, own, payoff));
        }
    }

    best.map(|(action, _, payoff)| Scored {
        action: Some(action),
        value: payoff,
    })
    .ok_or(SearchError::DeadEnd { depth })
}

/// Choose the root action with a default-configured `GeneralMinimax`.
pub fn general_minimax<G: GameModel>(game: &G) -> Result<Option<G::Action>, SearchError> {
    GeneralMinimax::default().search(game).map(|result| result.action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::dag::samples;

    #[test]
    fn test_general_constant_sum_dag() {
        let result = GeneralMinimax::default()
            .search(&samples::constant_sum_dag())
            .unwrap();

        assert_eq!(result.action, Some(2));
        assert_eq!(result.value, Payoff::pair(2.0, -2.0));
    }

    #[test]
    fn test_general_sum_dag() {
        // Player 1 at node 3 is indifferent between 10 and 12 and takes 10,
        // which also pays player 0 the most.
        let result = GeneralMinimax::default()
            .search(&samples::general_sum_dag())
            .unwrap();

        assert_eq!(result.action, Some(3));
        assert_eq!(result.value, Payoff::pair(20.0, 16.0));
        assert_eq!(result.stats.leaves_evaluated, 9);
    }

    #[test]
    fn test_general_small_dag() {
        assert_eq!(general_minimax(&samples::small_dag()), Ok(Some(1)));
    }
}
