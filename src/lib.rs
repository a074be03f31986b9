//! # adversarial-search
//!
//! Move selection in finite, fully-observable, turn-based games.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: Engines are generic over the `GameModel` trait and
//!    never interpret states or actions.
//!
//! 2. **Stateless Search**: Each search is a pure depth-first recursion over
//!    immutable states. Nothing but statistics survives between calls.
//!
//! 3. **Explicit Assumptions**: The two-player engines assume a constant-sum
//!    game; `GeneralMinimax` assumes nothing about the payoff structure.
//!
//! ## Modules
//!
//! - `core`: Player IDs, payoff vectors, deterministic RNG
//! - `game`: `GameModel` contract and static `Evaluator`s
//! - `search`: Minimax, alpha-beta, cutoff alpha-beta, general minimax
//! - `games`: Explicit game DAGs for verification and benchmarks
//!
//! ## Example
//!
//! ```rust
//! use adversarial_search::games::dag::samples;
//! use adversarial_search::search::{alpha_beta, alpha_beta_cutoff, general_minimax, minimax};
//! use adversarial_search::game::ZeroEvaluator;
//!
//! let dag = samples::constant_sum_dag();
//!
//! assert_eq!(minimax(&dag).unwrap(), Some(2));
//! assert_eq!(alpha_beta(&dag).unwrap(), Some(2));
//! assert_eq!(alpha_beta_cutoff(&dag, 2, ZeroEvaluator).unwrap(), Some(2));
//! assert_eq!(general_minimax(&dag).unwrap(), Some(2));
//! ```

pub mod core;
pub mod game;
pub mod games;
pub mod search;

// Re-export commonly used types
pub use crate::core::{Payoff, PlayerId, TreeRng};

pub use crate::game::{Evaluator, GameModel, ZeroEvaluator};

pub use crate::search::{
    alpha_beta, alpha_beta_cutoff, general_minimax, minimax,
    Algorithm, AlphaBeta, CutoffAlphaBeta, GeneralMinimax, Minimax,
    SearchConfig, SearchEngine, SearchError, SearchResult, SearchStats, Strategy,
};

pub use crate::games::dag::{DagDefinition, DagError, DagState, GameDag, RandomTreeBuilder};
