//! Seeded random game trees.
//!
//! Used to check engine agreement on many shapes and to benchmark pruning.
//! The same builder settings and seed always produce the same tree.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::{Payoff, PlayerId, TreeRng};

use super::game::{Children, DagState, GameDag};

/// Builder for random game trees.
///
/// ```
/// use adversarial_search::games::dag::RandomTreeBuilder;
///
/// let dag = RandomTreeBuilder::new().depth(3).branching(2, 2).build(7);
/// assert_eq!(dag.node_count(), 15);
/// assert!(dag.is_constant_sum());
/// ```
#[derive(Clone, Debug)]
pub struct RandomTreeBuilder {
    depth: u32,
    min_branching: usize,
    max_branching: usize,
    player_count: usize,
    constant_sum: bool,
    reward_magnitude: i32,
    early_terminal_probability: f64,
    shuffled_turns: bool,
}

impl Default for RandomTreeBuilder {
    fn default() -> Self {
        Self {
            depth: 4,
            min_branching: 2,
            max_branching: 3,
            player_count: 2,
            constant_sum: true,
            reward_magnitude: 10,
            early_terminal_probability: 0.0,
            shuffled_turns: false,
        }
    }
}

impl RandomTreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum number of plies from the root to a terminal.
    pub fn depth(mut self, depth: u32) -> Self {
        assert!(depth > 0, "Tree depth must be positive");
        self.depth = depth;
        self
    }

    /// Inclusive range of moves at each decision node.
    pub fn branching(mut self, min: usize, max: usize) -> Self {
        assert!(min >= 1 && min <= max, "Branching range must satisfy 1 <= min <= max");
        self.min_branching = min;
        self.max_branching = max;
        self
    }

    /// Number of players. Anything but 2 also switches to general-sum payoffs.
    pub fn player_count(mut self, count: usize) -> Self {
        assert!((1..=8).contains(&count), "Player count must be 1-8");
        self.player_count = count;
        if count != 2 {
            self.constant_sum = false;
        }
        self
    }

    /// Zero-sum two-player payoffs (true) or independent per-player rewards.
    pub fn constant_sum(mut self, constant_sum: bool) -> Self {
        self.constant_sum = constant_sum;
        self
    }

    /// Rewards are integers in `[-magnitude, magnitude]`.
    pub fn reward_magnitude(mut self, magnitude: i32) -> Self {
        assert!(magnitude >= 0, "Reward magnitude must be non-negative");
        self.reward_magnitude = magnitude;
        self
    }

    /// Chance that a non-root node ends the game before full depth.
    pub fn early_terminal_probability(mut self, probability: f64) -> Self {
        assert!((0.0..=1.0).contains(&probability), "Probability must be in [0, 1]");
        self.early_terminal_probability = probability;
        self
    }

    /// Assign the mover of each node at random instead of round-robin.
    pub fn shuffled_turns(mut self, shuffled: bool) -> Self {
        self.shuffled_turns = shuffled;
        self
    }

    /// Generate the tree.
    pub fn build(&self, seed: u64) -> GameDag {
        assert!(
            !self.constant_sum || self.player_count == 2,
            "Constant-sum trees need exactly 2 players"
        );

        let mut shape_rng = TreeRng::new(seed);
        let mut reward_rng = shape_rng.fork();

        let root_player = PlayerId::new(0);
        let mut children: Vec<Children> = vec![Children::new()];
        let mut turns = vec![root_player];
        let mut depths = vec![0u32];
        let mut terminals = FxHashSet::default();
        let mut payoffs = FxHashMap::default();

        // Nodes are numbered breadth-first, so index order is processing order.
        let mut node = 0;
        while node < children.len() {
            let depth = depths[node];
            let ends_early = depth > 0 && shape_rng.gen_bool(self.early_terminal_probability);

            if depth == self.depth || ends_early {
                terminals.insert(node);
                payoffs.insert(node, self.random_payoff(&mut reward_rng));
                node += 1;
                continue;
            }

            let width = shape_rng.gen_range_usize(self.min_branching..self.max_branching + 1);
            for _ in 0..width {
                let child = children.len();
                let mover = if self.shuffled_turns {
                    PlayerId::new(shape_rng.gen_range_usize(0..self.player_count) as u8)
                } else {
                    turns[node].next(self.player_count)
                };
                children.push(Children::new());
                turns.push(mover);
                depths.push(depth + 1);
                children[node].push(child);
            }
            node += 1;
        }

        match GameDag::from_children(
            children,
            DagState::new(0, root_player),
            terminals,
            payoffs,
            turns,
        ) {
            Ok(dag) => dag,
            Err(err) => unreachable!("generated tree is well-formed: {}", err),
        }
    }

    fn random_payoff(&self, rng: &mut TreeRng) -> Payoff {
        if self.constant_sum {
            Payoff::zero_sum(rng.gen_reward(self.reward_magnitude))
        } else {
            (0..self.player_count)
                .map(|_| rng.gen_reward(self.reward_magnitude))
                .collect::<Vec<_>>()
                .into()
        }
    }
}
