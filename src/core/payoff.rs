//! Terminal payoff vectors.
//!
//! A `Payoff` holds one real-valued reward per player, indexed by
//! `PlayerId`. Payoffs only exist at terminal states.
//!
//! ## Example
//!
//! ```
//! use adversarial_search::core::{Payoff, PlayerId};
//!
//! let payoff = Payoff::from_slice(&[-1.0, 1.0]);
//! assert_eq!(payoff[PlayerId::new(0)], -1.0);
//! assert_eq!(payoff.get(PlayerId::new(2)), None);
//! assert_eq!(payoff.sum(), 0.0);
//! ```

use std::ops::Index;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;

/// Per-player rewards at a terminal state.
///
/// SmallVec keeps the common 2-4 player case off the heap.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payoff {
    values: SmallVec<[f64; 4]>,
}

impl Payoff {
    /// Create a payoff from one value per player.
    #[must_use]
    pub fn from_slice(values: &[f64]) -> Self {
        Self {
            values: SmallVec::from_slice(values),
        }
    }

    /// Create a two-player payoff.
    #[must_use]
    pub fn pair(first: f64, second: f64) -> Self {
        Self::from_slice(&[first, second])
    }

    /// Create a two-player zero-sum payoff from the first player's reward.
    #[must_use]
    pub fn zero_sum(first: f64) -> Self {
        Self::pair(first, -first)
    }

    /// Reward for a player, or `None` if the vector has no entry for them.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<f64> {
        self.values.get(player.index()).copied()
    }

    /// Number of entries (one per player).
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.values.len()
    }

    /// Sum of all entries.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    /// All entries in player order.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Iterate over (PlayerId, reward) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), *v))
    }

    /// Check whether both payoffs sum to the same constant within `tolerance`.
    #[must_use]
    pub fn is_constant_sum_with(&self, other: &Payoff, tolerance: f64) -> bool {
        self.player_count() == other.player_count()
            && (self.sum() - other.sum()).abs() <= tolerance
    }
}

impl From<Vec<f64>> for Payoff {
    fn from(values: Vec<f64>) -> Self {
        Self {
            values: SmallVec::from_vec(values),
        }
    }
}

impl Index<PlayerId> for Payoff {
    type Output = f64;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.values[player.index()]
    }
}
