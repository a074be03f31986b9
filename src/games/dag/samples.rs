//! Small hand-built DAGs with known optimal play.

use crate::core::{Payoff, PlayerId};

use super::game::{DagState, GameDag};

/// Adjacency matrix with `edges` set and everything else false.
fn matrix(node_count: usize, edges: &[(usize, usize)]) -> Vec<Vec<bool>> {
    let mut matrix = vec![vec![false; node_count]; node_count];
    for &(from, to) in edges {
        matrix[from][to] = true;
    }
    matrix
}

fn turns(table: &[u8]) -> Vec<PlayerId> {
    table.iter().copied().map(PlayerId::new).collect()
}

/// Seven nodes: player 0 picks node 1 or 2, player 1 then picks a leaf.
///
/// Leaves 3..=6 pay `[-1, 1]`, `[-2, 2]`, `[-3, 3]`, `[-4, 4]`. Optimal play
/// is node 1, worth -2 to player 0.
pub fn small_dag() -> GameDag {
    let edges = [(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (2, 6)];
    let payoffs = [
        (3, Payoff::pair(-1.0, 1.0)),
        (4, Payoff::pair(-2.0, 2.0)),
        (5, Payoff::pair(-3.0, 3.0)),
        (6, Payoff::pair(-4.0, 4.0)),
    ];

    match GameDag::from_matrix(
        &matrix(7, &edges),
        DagState::new(0, PlayerId::new(0)),
        3..=6,
        payoffs,
        &turns(&[0, 1, 1, 0, 0, 0, 0]),
    ) {
        Ok(dag) => dag,
        Err(err) => unreachable!("sample DAG is well-formed: {}", err),
    }
}

fn three_branch_dag(payoffs: [(usize, Payoff); 9]) -> GameDag {
    let edges = [
        (0, 1),
        (0, 2),
        (0, 3),
        (1, 4),
        (1, 5),
        (1, 6),
        (2, 7),
        (2, 8),
        (2, 9),
        (3, 10),
        (3, 11),
        (3, 12),
    ];

    match GameDag::from_matrix(
        &matrix(13, &edges),
        DagState::new(0, PlayerId::new(0)),
        4..=12,
        payoffs,
        &turns(&[0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    ) {
        Ok(dag) => dag,
        Err(err) => unreachable!("sample DAG is well-formed: {}", err),
    }
}

/// Thirteen nodes, three moves per decision, zero-sum payoffs.
///
/// The only optimal first move for player 0 is node 2, worth 2.
pub fn constant_sum_dag() -> GameDag {
    three_branch_dag([
        (4, Payoff::pair(-1.0, 1.0)),
        (5, Payoff::pair(-4.0, 4.0)),
        (6, Payoff::pair(-5.0, 5.0)),
        (7, Payoff::pair(2.0, -2.0)),
        (8, Payoff::pair(3.0, -3.0)),
        (9, Payoff::pair(8.0, -8.0)),
        (10, Payoff::pair(-16.0, 16.0)),
        (11, Payoff::pair(-3.0, 3.0)),
        (12, Payoff::pair(-16.0, 16.0)),
    ])
}

/// Same shape as `constant_sum_dag` with general-sum payoffs.
///
/// Under self-interested play player 0 moves to node 3 and the game ends
/// at node 10 paying `[20, 16]`.
pub fn general_sum_dag() -> GameDag {
    three_branch_dag([
        (4, Payoff::pair(-1.0, 1.0)),
        (5, Payoff::pair(-3.0, 3.0)),
        (6, Payoff::pair(-5.0, 5.0)),
        (7, Payoff::pair(12.0, -12.0)),
        (8, Payoff::pair(11.0, -13.0)),
        (9, Payoff::pair(3.0, -18.0)),
        (10, Payoff::pair(20.0, 16.0)),
        (11, Payoff::pair(-3.0, 3.0)),
        (12, Payoff::pair(-16.0, 16.0)),
    ])
}

/// Three players moving in turn over a depth-3 binary tree.
///
/// Every player maximizes their own entry, so player 0 moves to node 1 and
/// play ends at node 9 paying `[9, 2, 1]`. Treating players 1 and 2 as
/// opponents of player 0 would instead pick node 2.
pub fn three_player_dag() -> GameDag {
    // 0 -> {1, 2}; 1 -> {3, 4}; 2 -> {5, 6}; 3..=6 -> two leaves each.
    let edges = [
        (0, 1),
        (0, 2),
        (1, 3),
        (1, 4),
        (2, 5),
        (2, 6),
        (3, 7),
        (3, 8),
        (4, 9),
        (4, 10),
        (5, 11),
        (5, 12),
        (6, 13),
        (6, 14),
    ];
    let payoffs = [
        (7, Payoff::from_slice(&[5.0, 1.0, 0.0])),
        (8, Payoff::from_slice(&[0.0, 0.0, 3.0])),
        (9, Payoff::from_slice(&[9.0, 2.0, 1.0])),
        (10, Payoff::from_slice(&[1.0, 1.0, 1.0])),
        (11, Payoff::from_slice(&[4.0, 3.0, 2.0])),
        (12, Payoff::from_slice(&[6.0, 0.0, 1.0])),
        (13, Payoff::from_slice(&[7.0, 5.0, 0.0])),
        (14, Payoff::from_slice(&[2.0, 4.0, 4.0])),
    ];

    match GameDag::from_matrix(
        &matrix(15, &edges),
        DagState::new(0, PlayerId::new(0)),
        7..=14,
        payoffs,
        &turns(&[0, 1, 1, 2, 2, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0]),
    ) {
        Ok(dag) => dag,
        Err(err) => unreachable!("sample DAG is well-formed: {}", err),
    }
}
