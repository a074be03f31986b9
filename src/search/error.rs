//! Search errors.

use thiserror::Error;

use crate::core::PlayerId;

/// Errors that can occur during a search.
///
/// All of them are structural: retrying the same search on the same game
/// produces the same error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    #[error("cutoff ply must be positive, got {ply}")]
    InvalidCutoff { ply: u32 },

    #[error("non-terminal state at depth {depth} has no legal actions")]
    DeadEnd { depth: u32 },

    #[error("search exceeded the depth limit of {limit} plies")]
    DepthLimitExceeded { limit: u32 },

    #[error("payoff vector of length {len} has no entry for {player}")]
    MissingPayoff { player: PlayerId, len: usize },

    #[error("unknown search algorithm: {0}")]
    UnknownAlgorithm(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SearchError::InvalidCutoff { ply: 0 }.to_string(),
            "cutoff ply must be positive, got 0"
        );
        assert_eq!(
            SearchError::MissingPayoff { player: PlayerId::new(2), len: 2 }.to_string(),
            "payoff vector of length 2 has no entry for Player 2"
        );
    }
}
