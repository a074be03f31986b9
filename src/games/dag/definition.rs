//! Serializable description of a game DAG.
//!
//! `DagDefinition` is the plain-data form of a `GameDag`: an edge list, a
//! turn table and the terminal payoffs. Terminal nodes are exactly the keys
//! of `payoffs`. Converting back into a `GameDag` runs the same validation
//! as `GameDag::from_matrix`.

use std::collections::BTreeMap;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{Payoff, PlayerId};

use super::error::DagError;
use super::game::{Children, DagState, GameDag};

/// Plain-data game DAG.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DagDefinition {
    /// Number of nodes.
    pub node_count: usize,

    /// Directed edges `(from, to)`. Per-node order is action order.
    pub edges: Vec<(usize, usize)>,

    /// Start node. The player to move there comes from `turns`.
    pub start: usize,

    /// Player to move at each node.
    pub turns: Vec<PlayerId>,

    /// Payoff vector of every terminal node.
    pub payoffs: BTreeMap<usize, Payoff>,
}

impl GameDag {
    /// Build a validated DAG from its definition.
    pub fn from_definition(definition: &DagDefinition) -> Result<Self, DagError> {
        let mut children: Vec<Children> = vec![Children::new(); definition.node_count];
        for &(from, to) in &definition.edges {
            let edges = children
                .get_mut(from)
                .ok_or(DagError::EdgeOutOfRange { from, to })?;
            edges.push(to);
        }

        let to_move = definition
            .turns
            .get(definition.start)
            .copied()
            .unwrap_or(PlayerId::new(0));
        let terminals: FxHashSet<usize> = definition.payoffs.keys().copied().collect();

        GameDag::from_children(
            children,
            DagState::new(definition.start, to_move),
            terminals,
            definition
                .payoffs
                .iter()
                .map(|(node, payoff)| (*node, payoff.clone()))
                .collect(),
            definition.turns.clone(),
        )
    }

    /// Describe this DAG as plain data.
    #[must_use]
    pub fn to_definition(&self) -> DagDefinition {
        let edges = (0..self.node_count())
            .flat_map(|from| self.children(from).iter().map(move |&to| (from, to)))
            .collect();
        let payoffs = self
            .terminals()
            .iter()
            .filter_map(|&node| self.payoff(node).map(|payoff| (node, payoff.clone())))
            .collect();

        DagDefinition {
            node_count: self.node_count(),
            edges,
            start: self.start().node,
            turns: self.turns().to_vec(),
            payoffs,
        }
    }
}
