//! Explicit game DAG implementation.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Payoff, PlayerId};
use crate::game::GameModel;

use super::error::DagError;

/// Outgoing edges of one node, in action enumeration order.
pub(crate) type Children = SmallVec<[usize; 4]>;

/// A position in a `GameDag`: the current node and who moves there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DagState {
    /// Node index.
    pub node: usize,
    /// Player to move at this node.
    pub to_move: PlayerId,
}

impl DagState {
    /// Create a new state.
    #[must_use]
    pub const fn new(node: usize, to_move: PlayerId) -> Self {
        Self { node, to_move }
    }
}

/// A game given as an explicit directed acyclic graph.
///
/// Nodes are states, edges are moves, and an action is the index of the
/// node it leads to. Terminal nodes carry payoff vectors; every other node
/// belongs to one player via the turn table.
#[derive(Clone, Debug)]
pub struct GameDag {
    children: Vec<Children>,
    terminals: FxHashSet<usize>,
    payoffs: FxHashMap<usize, Payoff>,
    turns: Vec<PlayerId>,
    start: DagState,
    player_count: usize,
}

impl GameDag {
    /// Build a DAG from a boolean adjacency matrix.
    ///
    /// `matrix[i][j]` is true when moving from node `i` to node `j` is legal.
    /// Actions from a node are enumerated in ascending `j`.
    pub fn from_matrix<T, P>(
        matrix: &[Vec<bool>],
        start: DagState,
        terminals: T,
        payoffs: P,
        turns: &[PlayerId],
    ) -> Result<Self, DagError>
    where
        T: IntoIterator<Item = usize>,
        P: IntoIterator<Item = (usize, Payoff)>,
    {
        let expected = matrix.len();
        let mut children = Vec::with_capacity(expected);

        for (row, edges) in matrix.iter().enumerate() {
            if edges.len() != expected {
                return Err(DagError::NotSquare {
                    row,
                    len: edges.len(),
                    expected,
                });
            }
            children.push(
                edges
                    .iter()
                    .enumerate()
                    .filter(|(_, legal)| **legal)
                    .map(|(to, _)| to)
                    .collect(),
            );
        }

        Self::from_children(
            children,
            start,
            terminals.into_iter().collect(),
            payoffs.into_iter().collect(),
            turns.to_vec(),
        )
    }

    /// Build a DAG from adjacency lists, validating every structural rule.
    pub(crate) fn from_children(
        children: Vec<Children>,
        start: DagState,
        terminals: FxHashSet<usize>,
        payoffs: FxHashMap<usize, Payoff>,
        turns: Vec<PlayerId>,
    ) -> Result<Self, DagError> {
        let node_count = children.len();
        if node_count == 0 {
            return Err(DagError::Empty);
        }
        if turns.len() != node_count {
            return Err(DagError::TurnTableLength {
                expected: node_count,
                found: turns.len(),
            });
        }

        for (from, edges) in children.iter().enumerate() {
            for (i, &to) in edges.iter().enumerate() {
                if to >= node_count {
                    return Err(DagError::EdgeOutOfRange { from, to });
                }
                if edges[..i].contains(&to) {
                    return Err(DagError::DuplicateEdge { from, to });
                }
            }
        }

        if start.node >= node_count {
            return Err(DagError::StartOutOfRange { node: start.node });
        }
        if start.to_move != turns[start.node] {
            return Err(DagError::StartTurnMismatch {
                node: start.node,
                state: start.to_move,
                table: turns[start.node],
            });
        }

        let mut sorted_terminals: Vec<usize> = terminals.iter().copied().collect();
        sorted_terminals.sort_unstable();

        let mut player_count = 0;
        for &node in &sorted_terminals {
            if node >= node_count {
                return Err(DagError::TerminalOutOfRange { node });
            }
            if !children[node].is_empty() {
                return Err(DagError::TerminalHasEdges { node });
            }
            let payoff = payoffs.get(&node).ok_or(DagError::MissingPayoff { node })?;
            if player_count == 0 {
                player_count = payoff.player_count();
            } else if payoff.player_count() != player_count {
                return Err(DagError::PayoffLength {
                    node,
                    expected: player_count,
                    found: payoff.player_count(),
                });
            }
        }

        for (node, edges) in children.iter().enumerate() {
            if terminals.contains(&node) {
                continue;
            }
            if edges.is_empty() {
                return Err(DagError::DeadEnd { node });
            }
            if turns[node].index() >= player_count {
                return Err(DagError::TurnOutOfRange {
                    node,
                    player: turns[node],
                    player_count,
                });
            }
        }

        if let Some(node) = find_cycle(&children) {
            return Err(DagError::Cycle { node });
        }

        Ok(Self {
            children,
            terminals,
            payoffs,
            turns,
            start,
            player_count,
        })
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.children.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.children.iter().map(|c| c.len()).sum()
    }

    /// Number of terminal nodes.
    #[must_use]
    pub fn terminal_count(&self) -> usize {
        self.terminals.len()
    }

    /// Successors of `node` in enumeration order.
    #[must_use]
    pub fn children(&self, node: usize) -> &[usize] {
        &self.children[node]
    }

    /// Player assigned to `node` by the turn table.
    #[must_use]
    pub fn turn(&self, node: usize) -> PlayerId {
        self.turns[node]
    }

    /// Payoff of a terminal node.
    #[must_use]
    pub fn payoff(&self, node: usize) -> Option<&Payoff> {
        self.payoffs.get(&node)
    }

    /// Length of the longest path from the start state to a terminal.
    #[must_use]
    pub fn depth(&self) -> u32 {
        let mut memo = vec![None; self.node_count()];
        self.height(self.start.node, &mut memo)
    }

    fn height(&self, node: usize, memo: &mut Vec<Option<u32>>) -> u32 {
        if let Some(height) = memo[node] {
            return height;
        }
        let height = self.children[node]
            .iter()
            .map(|&child| self.height(child, memo) + 1)
            .max()
            .unwrap_or(0);
        memo[node] = Some(height);
        height
    }

    /// Check the two-player constant-sum invariant over all terminals.
    #[must_use]
    pub fn is_constant_sum(&self) -> bool {
        if self.player_count != 2 {
            return false;
        }
        let mut sums = self.terminals.iter().map(|node| self.payoffs[node].sum());
        match sums.next() {
            Some(first) => sums.all(|sum| (sum - first).abs() <= 1e-9),
            None => true,
        }
    }

    pub(crate) fn start(&self) -> DagState {
        self.start
    }

    pub(crate) fn terminals(&self) -> &FxHashSet<usize> {
        &self.terminals
    }

    pub(crate) fn turns(&self) -> &[PlayerId] {
        &self.turns
    }
}

/// Some node on a cycle, or `None` if the graph is acyclic.
fn find_cycle(children: &[Children]) -> Option<usize> {
    let mut indegree = vec![0usize; children.len()];
    for edges in children {
        for &to in edges {
            indegree[to] += 1;
        }
    }

    let mut ready: Vec<usize> = (0..children.len()).filter(|&n| indegree[n] == 0).collect();
    let mut removed = 0;

    while let Some(node) = ready.pop() {
        removed += 1;
        for &to in &children[node] {
            indegree[to] -= 1;
            if indegree[to] == 0 {
                ready.push(to);
            }
        }
    }

    if removed == children.len() {
        None
    } else {
        (0..children.len()).find(|&n| indegree[n] > 0)
    }
}

impl GameModel for GameDag {
    type State = DagState;
    type Action = usize;

    fn start_state(&self) -> DagState {
        self.start
    }

    fn available_actions(&self, state: &DagState) -> Vec<usize> {
        assert!(
            !self.is_terminal(state),
            "available_actions called on terminal node {}",
            state.node
        );
        self.children[state.node].to_vec()
    }

    fn transition(&self, state: &DagState, action: &usize) -> DagState {
        assert!(
            self.children[state.node].contains(action),
            "illegal action {} from node {}",
            action,
            state.node
        );
        DagState::new(*action, self.turns[*action])
    }

    fn is_terminal(&self, state: &DagState) -> bool {
        self.terminals.contains(&state.node)
    }

    fn evaluate(&self, state: &DagState) -> Payoff {
        assert!(
            self.is_terminal(state),
            "evaluate called on non-terminal node {}",
            state.node
        );
        self.payoffs[&state.node].clone()
    }

    fn player_to_move(&self, state: &DagState) -> PlayerId {
        state.to_move
    }

    fn player_count(&self) -> usize {
        self.player_count
    }
}
