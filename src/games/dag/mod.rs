//! Explicit game DAGs for exercising the search engines.
//!
//! A `GameDag` is built from a boolean adjacency matrix (or a serializable
//! `DagDefinition`), a per-node turn table and payoffs for the terminal
//! nodes. Construction rejects anything the engines could not search:
//! cycles, non-terminal nodes without moves, terminals with moves, missing
//! or ragged payoffs.
//!
//! - `samples`: hand-built DAGs with known optimal play
//! - `RandomTreeBuilder`: seeded random trees for property tests and benches

mod definition;
mod error;
mod game;
mod random;
pub mod samples;

pub use definition::DagDefinition;
pub use error::DagError;
pub use game::{DagState, GameDag};
pub use random::RandomTreeBuilder;
