//! Depth-limited alpha-beta with a static evaluator at the horizon.
//!
//! `cutoff_ply` counts plies from the root: with a cutoff of 1 the states
//! reached by the searching player's first move are evaluated, with 2 the
//! states after the opponent's reply, and so on. Terminal states inside the
//! horizon are still scored with the model's payoff.

use tracing::debug;

use crate::game::{Evaluator, GameModel};

use super::alpha_beta::{alpha_beta_node, Horizon, Window};
use super::config::SearchConfig;
use super::context::SearchContext;
use super::error::SearchError;
use super::result::SearchResult;
use super::stats::SearchStats;

/// Alpha-beta search cut off after a fixed number of plies.
#[derive(Clone, Debug)]
pub struct CutoffAlphaBeta<E> {
    cutoff_ply: u32,
    evaluator: E,
    config: SearchConfig,
    stats: SearchStats,
}

impl<E> CutoffAlphaBeta<E> {
    /// Create a new cutoff engine.
    ///
    /// Fails with `InvalidCutoff` when `cutoff_ply` is zero.
    pub fn new(cutoff_ply: u32, evaluator: E, config: SearchConfig) -> Result<Self, SearchError> {
        if cutoff_ply == 0 {
            return Err(SearchError::InvalidCutoff { ply: cutoff_ply });
        }
        Ok(Self {
            cutoff_ply,
            evaluator,
            config,
            stats: SearchStats::default(),
        })
    }

    /// Search from the game's start state.
    pub fn search<G>(&mut self, game: &G) -> Result<SearchResult<G::Action>, SearchError>
    where
        G: GameModel,
        E: Evaluator<G>,
    {
        let start = game.start_state();
        let root_player = game.player_to_move(&start);
        debug!(%root_player, cutoff_ply = self.cutoff_ply, "cutoff search started");

        let horizon = Horizon {
            remaining: self.cutoff_ply,
            evaluator: &self.evaluator,
        };
        let mut ctx = SearchContext::new(game, &self.config);
        let scored = alpha_beta_node(&mut ctx, &start, 0, Window::full(), root_player, Some(&horizon));
        self.stats = ctx.stats;
        let scored = scored?;

        debug!(
            action = ?scored.action,
            value = scored.value,
            nodes = self.stats.nodes_visited,
            heuristic = self.stats.heuristic_evaluations,
            "cutoff search finished"
        );
        Ok(scored.into_result(self.stats.clone()))
    }

    /// Plies searched before the evaluator takes over.
    #[must_use]
    pub fn cutoff_ply(&self) -> u32 {
        self.cutoff_ply
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

/// Choose the root action with a default-configured `CutoffAlphaBeta`.
pub fn alpha_beta_cutoff<G, E>(
    game: &G,
    cutoff_ply: u32,
    evaluator: E,
) -> Result<Option<G::Action>, SearchError>
where
    G: GameModel,
    E: Evaluator<G>,
{
    CutoffAlphaBeta::new(cutoff_ply, evaluator, SearchConfig::default())?
        .search(game)
        .map(|result| result.action)
}
