//! Core types: players, payoff vectors, deterministic RNG.
//!
//! These are game-agnostic building blocks shared by the game model
//! contract, the search engines and the bundled test games.

pub mod payoff;
pub mod player;
pub mod rng;

pub use payoff::Payoff;
pub use player::PlayerId;
pub use rng::TreeRng;
