//! Errors for malformed game DAGs.

use thiserror::Error;

use crate::core::PlayerId;

/// Reasons a DAG cannot be turned into a `GameDag`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DagError {
    #[error("game graph has no nodes")]
    Empty,

    #[error("adjacency row {row} has {len} entries, expected {expected}")]
    NotSquare { row: usize, len: usize, expected: usize },

    #[error("edge {from} -> {to} points outside the graph")]
    EdgeOutOfRange { from: usize, to: usize },

    #[error("edge {from} -> {to} is listed twice")]
    DuplicateEdge { from: usize, to: usize },

    #[error("turn table has {found} entries for {expected} nodes")]
    TurnTableLength { expected: usize, found: usize },

    #[error("start node {node} is not in the graph")]
    StartOutOfRange { node: usize },

    #[error("start state says {state} moves but node {node} belongs to {table}")]
    StartTurnMismatch {
        node: usize,
        state: PlayerId,
        table: PlayerId,
    },

    #[error("terminal node {node} is not in the graph")]
    TerminalOutOfRange { node: usize },

    #[error("terminal node {node} has outgoing edges")]
    TerminalHasEdges { node: usize },

    #[error("non-terminal node {node} has no outgoing edges")]
    DeadEnd { node: usize },

    #[error("terminal node {node} has no payoff")]
    MissingPayoff { node: usize },

    #[error("terminal node {node} has {found} payoff entries, expected {expected}")]
    PayoffLength {
        node: usize,
        expected: usize,
        found: usize,
    },

    #[error("node {node} is assigned to {player} but the game has {player_count} players")]
    TurnOutOfRange {
        node: usize,
        player: PlayerId,
        player_count: usize,
    },

    #[error("graph contains a cycle through node {node}")]
    Cycle { node: usize },
}
