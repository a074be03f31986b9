//! Alpha-beta pruning for two-player, constant-sum games.
//!
//! Each frame carries a window `[alpha, beta]`: `alpha` is the value the
//! root player can already guarantee along the path, `beta` the value the
//! opponent can already hold them to. A maximizing frame stops as soon as
//! its best value reaches `beta`, a minimizing frame as soon as its best
//! value falls to `alpha`. The root action and value always equal those of
//! `Minimax`; only the number of visited nodes changes.

use tracing::{debug, trace};

use crate::core::PlayerId;
use crate::game::{Evaluator, GameModel};

use super::config::SearchConfig;
use super::context::{improves, SearchContext};
use super::error::SearchError;
use super::result::{Scored, SearchResult};
use super::stats::SearchStats;

/// Search window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Window {
    pub alpha: f64,
    pub beta: f64,
}

impl Window {
    /// The unbounded window used at the root.
    pub fn full() -> Self {
        Self {
            alpha: f64::NEG_INFINITY,
            beta: f64::INFINITY,
        }
    }
}

/// Remaining ply budget and the evaluator used once it runs out.
pub(crate) struct Horizon<'e, G: GameModel> {
    pub remaining: u32,
    pub evaluator: &'e dyn Evaluator<G>,
}

impl<'e, G: GameModel> Horizon<'e, G> {
    fn descend(&self) -> Self {
        Self {
            remaining: self.remaining.saturating_sub(1),
            evaluator: self.evaluator,
        }
    }
}

/// Full-depth alpha-beta search.
#[derive(Clone, Debug, Default)]
pub struct AlphaBeta {
    config: SearchConfig,
    stats: SearchStats,
}

impl AlphaBeta {
    /// Create a new alpha-beta engine.
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
        debug!(%root_player, "alpha-beta search started");

        let mut ctx = SearchContext::new(game, &self.config);
        let scored = alpha_beta_node(&mut ctx, &start, 0, Window::full(), root_player, None);
        self.stats = ctx.stats;
        let scored = scored?;

        debug!(
            action = ?scored.action,
            value = scored.value,
            nodes = self.stats.nodes_visited,
            cutoffs = self.stats.cutoffs,
            "alpha-beta search finished"
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

/// One alpha-beta frame, optionally bounded by a ply horizon.
///
/// Terminal states are scored by the model even when the horizon is
/// exhausted; the evaluator only replaces unknown values.
pub(crate) fn alpha_beta_node<G: GameModel>(
    ctx: &mut SearchContext<'_, G>,
    state: &G::State,
    depth: u32,
    window: Window,
    root_player: PlayerId,
    horizon: Option<&Horizon<'_, G>>,
) -> Result<Scored<G::Action>, SearchError> {
    ctx.enter(depth)?;

    if ctx.game.is_terminal(state) {
        return ctx.terminal_value(state, root_player).map(Scored::leaf);
    }

    if let Some(horizon) = horizon.filter(|h| h.remaining == 0) {
        ctx.stats.heuristic_evaluations += 1;
        let value = horizon.evaluator.evaluate(state);
        trace!(depth, value, "horizon reached");
        return Ok(Scored::leaf(value));
    }

    let maximizing = ctx.game.player_to_move(state) == root_player;
    let child_horizon = horizon.map(Horizon::descend);
    let Window { mut alpha, mut beta } = window;
    let mut best: Option<(G::Action, f64)> = None;

    for action in ctx.actions(state, depth)? {
        let child = ctx.game.transition(state, &action);
        let value = alpha_beta_node(
            ctx,
            &child,
            depth + 1,
            Window { alpha, beta },
            root_player,
            child_horizon.as_ref(),
        )?
        .value;

        if improves(best.as_ref().map(|(_, v)| *v), value, maximizing) {
            best = Some((action, value));
        }
        let best_value = best.as_ref().map_or(value, |(_, v)| *v);

        if maximizing {
            if best_value >= beta {
                ctx.stats.cutoffs += 1;
                trace!(depth, best_value, beta, "beta cutoff");
                break;
            }
            alpha = alpha.max(best_value);
        } else {
            if best_value <= alpha {
                ctx.stats.cutoffs += 1;
                trace!(depth, best_value, alpha, "alpha cutoff");
                break;
            }
            beta = beta.min(best_value);
        }
    }

    best.map(|(action, value)| Scored {
        action: Some(action),
        value,
    })
    .ok_or(SearchError::DeadEnd { depth })
}

/// Choose the root action with a default-configured `AlphaBeta`.
pub fn alpha_beta<G: GameModel>(game: &G) -> Result<Option<G::Action>, SearchError> {
    AlphaBeta::default().search(game).map(|result| result.action)
}
