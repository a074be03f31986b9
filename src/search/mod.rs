//! Game-tree search engines.
//!
//! ## Overview
//!
//! Four depth-first engines over any `GameModel`:
//!
//! - **Minimax**: exhaustive two-player, constant-sum search
//! - **AlphaBeta**: pruned minimax, same action and value, fewer nodes
//! - **CutoffAlphaBeta**: alpha-beta bounded by a ply horizon, with a
//!   caller-supplied `Evaluator` scoring horizon states
//! - **GeneralMinimax**: N players, arbitrary payoffs
//!
//! No state survives between searches except the last `SearchStats`.
//! Ties go to the first action in the model's enumeration order.
//!
//! ## Usage
//!
//! ```rust
//! use adversarial_search::games::dag::samples;
//! use adversarial_search::search::{AlphaBeta, Minimax, SearchConfig};
//!
//! let dag = samples::constant_sum_dag();
//!
//! let full = Minimax::new(SearchConfig::default()).search(&dag).unwrap();
//! let pruned = AlphaBeta::new(SearchConfig::default()).search(&dag).unwrap();
//!
//! assert_eq!(full.action, pruned.action);
//! assert_eq!(full.value, pruned.value);
//! assert!(pruned.stats.nodes_visited < full.stats.nodes_visited);
//! ```

pub mod alpha_beta;
pub mod config;
mod context;
pub mod cutoff;
pub mod error;
pub mod general;
pub mod minimax;
pub mod result;
pub mod stats;
pub mod strategy;

// Re-export main types
pub use alpha_beta::{alpha_beta, AlphaBeta};
pub use config::SearchConfig;
pub use cutoff::{alpha_beta_cutoff, CutoffAlphaBeta};
pub use error::SearchError;
pub use general::{general_minimax, GeneralMinimax};
pub use minimax::{minimax, Minimax};
pub use result::SearchResult;
pub use stats::SearchStats;
pub use strategy::{Algorithm, SearchEngine, Strategy};
