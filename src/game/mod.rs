//! Game model contract.
//!
//! Games implement `GameModel` to describe their tree; depth-limited search
//! additionally takes an `Evaluator`. The engines call into these traits
//! but never interpret game-specific states or actions.

pub mod evaluator;
pub mod model;

pub use evaluator::{Evaluator, ZeroEvaluator};
pub use model::GameModel;
