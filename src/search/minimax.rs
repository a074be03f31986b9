//! Exhaustive minimax for two-player, constant-sum games.
//!
//! Every terminal is scored from the root player's perspective. States
//! where the root player moves take the maximum over successors; all other
//! states take the minimum. This is only sound when the two players'
//! payoffs sum to a constant; use `GeneralMinimax` otherwise.

use tracing::debug;

use crate::core::PlayerId;
use crate::game::GameModel;

use super::config::SearchConfig;
use super::context::{improves, SearchContext};
use super::error::SearchError;
use super::result::{Scored, SearchResult};
use super::stats::SearchStats;

/// Full-width minimax search.
#[derive(Clone, Debug, Default)]
pub struct Minimax {
    config: SearchConfig,
    stats: SearchStats,
}

impl Minimax {
    /// Create a new minimax engine.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    /// Search from the game's start state.
    pub fn search<G: GameModel>(&mut self, game: &G) -> Result<SearchResult<G::Action>, SearchError> {
        let start = game.start_state();
        let root_player = game.player_to_move(&start);
        debug!(%root_player, "minimax search started");

        let mut ctx = SearchContext::new(game, &self.config);
        let scored = minimax_node(&mut ctx, &start, 0, root_player);
        self.stats = ctx.stats;
        let scored = scored?;

        debug!(
            action = ?scored.action,
            value = scored.value,
            nodes = self.stats.nodes_visited,
            "minimax search finished"
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

fn minimax_node<G: GameModel>(
    ctx: &mut SearchContext<'_, G>,
    state: &G::State,
    depth: u32,
    root_player: PlayerId,
) -> Result<Scored<G::Action>, SearchError> {
    ctx.enter(depth)?;

    if ctx.game.is_terminal(state) {
        return ctx.terminal_value(state, root_player).map(Scored::leaf);
    }

    let maximizing = ctx.game.player_to_move(state) == root_player;
    let mut best: Option<(G::Action, f64)> = None;

    for action in ctx.actions(state, depth)? {
        let child = ctx.game.transition(state, &action);
        let value = minimax_node(ctx, &child, depth + 1, root_player)?.value;

        if improves(best.as_ref().map(|(_, v)| *v), value, maximizing) {
            best = Some((action, value));
        }
    }

    best.map(|(action, value)| Scored {
        action: Some(action),
        value,
    })
    .ok_or(SearchError::DeadEnd { depth })
}

/// Choose the root action with a default-configured `Minimax`.
pub fn minimax<G: GameModel>(game: &G) -> Result<Option<G::Action>, SearchError> {
    Minimax::default().search(game).map(|result| result.action)
}
