//! Uniform interface over the search engines.
//!
//! - `Strategy`: choose a root action, whatever the engine
//! - `Algorithm`: serializable engine selector, parseable from a string
//! - `SearchEngine`: a boxed strategy picked by `Algorithm`

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::game::{Evaluator, GameModel, ZeroEvaluator};

use super::alpha_beta::AlphaBeta;
use super::config::SearchConfig;
use super::cutoff::CutoffAlphaBeta;
use super::error::SearchError;
use super::general::GeneralMinimax;
use super::minimax::Minimax;
use super::stats::SearchStats;

/// A search engine that picks a root action for a game.
pub trait Strategy<G: GameModel> {
    /// Short engine name for logs and reports.
    fn name(&self) -> &'static str;

    /// Choose an action for the player to move in the start state.
    ///
    /// Returns `Ok(None)` only when the start state is terminal.
    fn choose_action(&mut self, game: &G) -> Result<Option<G::Action>, SearchError>;

    /// Statistics of the last search.
    fn stats(&self) -> &SearchStats;
}

impl<G: GameModel> Strategy<G> for Minimax {
    fn name(&self) -> &'static str {
        "minimax"
    }

    fn choose_action(&mut self, game: &G) -> Result<Option<G::Action>, SearchError> {
        self.search(game).map(|result| result.action)
    }

    fn stats(&self) -> &SearchStats {
        Minimax::stats(self)
    }
}

impl<G: GameModel> Strategy<G> for AlphaBeta {
    fn name(&self) -> &'static str {
        "alphabeta"
    }

    fn choose_action(&mut self, game: &G) -> Result<Option<G::Action>, SearchError> {
        self.search(game).map(|result| result.action)
    }

    fn stats(&self) -> &SearchStats {
        AlphaBeta::stats(self)
    }
}

impl<G: GameModel, E: Evaluator<G>> Strategy<G> for CutoffAlphaBeta<E> {
    fn name(&self) -> &'static str {
        "cutoff"
    }

    fn choose_action(&mut self, game: &G) -> Result<Option<G::Action>, SearchError> {
        self.search(game).map(|result| result.action)
    }

    fn stats(&self) -> &SearchStats {
        CutoffAlphaBeta::stats(self)
    }
}

impl<G: GameModel> Strategy<G> for GeneralMinimax {
    fn name(&self) -> &'static str {
        "general"
    }

    fn choose_action(&mut self, game: &G) -> Result<Option<G::Action>, SearchError> {
        self.search(game).map(|result| result.action)
    }

    fn stats(&self) -> &SearchStats {
        GeneralMinimax::stats(self)
    }
}

/// Engine selector.
///
/// Parses from `"minimax"`, `"alphabeta"`, `"cutoff:<ply>"` and `"general"`.
///
/// ```
/// use adversarial_search::search::Algorithm;
///
/// let algorithm: Algorithm = "cutoff:3".parse().unwrap();
/// assert_eq!(algorithm, Algorithm::Cutoff { ply: 3 });
/// assert_eq!(algorithm.to_string(), "cutoff:3");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Algorithm {
    Minimax,
    AlphaBeta,
    Cutoff { ply: u32 },
    GeneralMinimax,
}

impl Algorithm {
    /// Whether the engine assumes a two-player, constant-sum game.
    #[must_use]
    pub fn requires_constant_sum(self) -> bool {
        !matches!(self, Algorithm::GeneralMinimax)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Minimax => write!(f, "minimax"),
            Algorithm::AlphaBeta => write!(f, "alphabeta"),
            Algorithm::Cutoff { ply } => write!(f, "cutoff:{}", ply),
            Algorithm::GeneralMinimax => write!(f, "general"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "minimax" => Ok(Algorithm::Minimax),
            "alphabeta" | "alpha-beta" | "alpha_beta" => Ok(Algorithm::AlphaBeta),
            "general" | "general-minimax" | "general_minimax" => Ok(Algorithm::GeneralMinimax),
            other => other
                .strip_prefix("cutoff:")
                .and_then(|ply| ply.parse().ok())
                .map(|ply| Algorithm::Cutoff { ply })
                .ok_or_else(|| SearchError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// A strategy chosen at runtime.
pub struct SearchEngine<G: GameModel> {
    algorithm: Algorithm,
    strategy: Box<dyn Strategy<G>>,
}

impl<G: GameModel> SearchEngine<G> {
    /// Build the engine for `algorithm`.
    ///
    /// The cutoff engine scores its horizon with `ZeroEvaluator`; use
    /// `with_cutoff_evaluator` to supply a real one.
    pub fn new(algorithm: Algorithm, config: SearchConfig) -> Result<Self, SearchError> {
        let strategy: Box<dyn Strategy<G>> = match algorithm {
            Algorithm::Minimax => Box::new(Minimax::new(config)),
            Algorithm::AlphaBeta => Box::new(AlphaBeta::new(config)),
            Algorithm::Cutoff { ply } => Box::new(CutoffAlphaBeta::new(ply, ZeroEvaluator, config)?),
            Algorithm::GeneralMinimax => Box::new(GeneralMinimax::new(config)),
        };
        Ok(Self { algorithm, strategy })
    }

    /// Build a cutoff engine with a custom evaluator.
    pub fn with_cutoff_evaluator<E>(ply: u32, evaluator: E, config: SearchConfig) -> Result<Self, SearchError>
    where
        E: Evaluator<G> + 'static,
    {
        Ok(Self {
            algorithm: Algorithm::Cutoff { ply },
            strategy: Box::new(CutoffAlphaBeta::new(ply, evaluator, config)?),
        })
    }

    /// Choose an action for the player to move in the start state.
    pub fn choose_action(&mut self, game: &G) -> Result<Option<G::Action>, SearchError> {
        self.strategy.choose_action(game)
    }

    /// The selected algorithm.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Name of the underlying strategy.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Statistics of the last search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        self.strategy.stats()
    }
}
