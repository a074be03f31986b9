//! Deterministic random number generation for game-tree generators.
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Forkable**: Independent, reproducible streams per subtree
//!
//! ```
//! use adversarial_search::core::TreeRng;
//!
//! let mut a = TreeRng::new(42);
//! let mut b = TreeRng::new(42);
//! assert_eq!(a.gen_range_usize(0..100), b.gen_range_usize(0..100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded ChaCha8 RNG with forking.
#[derive(Clone, Debug)]
pub struct TreeRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl TreeRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self::new(fork_seed)
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Generate a random integer-valued reward in `[-magnitude, magnitude]`.
    ///
    /// Integer values keep sums exact so constant-sum checks need no tolerance.
    pub fn gen_reward(&mut self, magnitude: i32) -> f64 {
        f64::from(self.inner.gen_range(-magnitude..=magnitude))
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }
}
