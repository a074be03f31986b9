//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Search configuration parameters shared by every engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum recursion depth (0 = unlimited).
    /// Exceeding it reports a non-terminating game instead of overflowing
    /// the stack.
    pub max_depth: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_depth: 512 }
    }
}

impl SearchConfig {
    /// Create a new config with custom max depth.
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    /// Create a new config with no depth guard.
    pub fn unlimited(mut self) -> Self {
        self.max_depth = 0;
        self
    }

    /// Check whether `depth` is past the configured guard.
    #[must_use]
    pub fn exceeds(&self, depth: u32) -> bool {
        self.max_depth > 0 && depth > self.max_depth
    }
}
