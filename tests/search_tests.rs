//! End-to-end engine behaviour on the sample DAGs.
//!
//! Every engine is driven through its public entry points (free function,
//! engine struct and `Strategy`) and checked against hand-computed optimal
//! play.

use adversarial_search::games::dag::samples;
use adversarial_search::{
    alpha_beta, alpha_beta_cutoff, general_minimax, minimax, Algorithm, AlphaBeta, CutoffAlphaBeta,
    GameDag, GameModel, GeneralMinimax, Minimax, Payoff, SearchConfig, SearchEngine, Strategy,
    ZeroEvaluator,
};

/// Every engine over a given game, boxed behind `Strategy`.
fn all_strategies() -> Vec<Box<dyn Strategy<GameDag>>> {
    vec![
        Box::new(Minimax::default()),
        Box::new(AlphaBeta::default()),
        Box::new(CutoffAlphaBeta::new(1, ZeroEvaluator, SearchConfig::default()).unwrap()),
        Box::new(CutoffAlphaBeta::new(5, ZeroEvaluator, SearchConfig::default()).unwrap()),
        Box::new(GeneralMinimax::default()),
    ]
}

/// Test that the constant-sum DAG is solved identically by all engines.
#[test]
fn test_constant_sum_dag_all_engines() {
    let dag = samples::constant_sum_dag();

    assert_eq!(minimax(&dag).unwrap(), Some(2));
    assert_eq!(alpha_beta(&dag).unwrap(), Some(2));
    assert_eq!(alpha_beta_cutoff(&dag, 2, ZeroEvaluator).unwrap(), Some(2));
    assert_eq!(general_minimax(&dag).unwrap(), Some(2));

    let full = Minimax::default().search(&dag).unwrap();
    let pruned = AlphaBeta::default().search(&dag).unwrap();
    assert_eq!(full.value, 2.0);
    assert_eq!(pruned.value, 2.0);

    let general = GeneralMinimax::default().search(&dag).unwrap();
    assert_eq!(general.value, Payoff::pair(2.0, -2.0));
}

/// Test pruning on the constant-sum DAG.
///
/// After node 1 backs up -5, node 2 backs up 2, and the first child of
/// node 3 (-16) is already at or below alpha, so nodes 11 and 12 are skipped.
#[test]
fn test_constant_sum_dag_pruning() {
    let dag = samples::constant_sum_dag();

    let mut full = Minimax::default();
    full.search(&dag).unwrap();
    assert_eq!(full.stats().nodes_visited, 13);
    assert_eq!(full.stats().leaves_evaluated, 9);
    assert_eq!(full.stats().cutoffs, 0);

    let mut pruned = AlphaBeta::default();
    pruned.search(&dag).unwrap();
    assert_eq!(pruned.stats().nodes_visited, 11);
    assert_eq!(pruned.stats().leaves_evaluated, 7);
    assert_eq!(pruned.stats().cutoffs, 1);
    assert!(pruned.stats().prune_ratio_against(full.stats()) > 0.0);
}

/// Test the small DAG: player 0 should prefer node 1 (-2) over node 2 (-4).
#[test]
fn test_small_dag() {
    let dag = samples::small_dag();

    let result = Minimax::default().search(&dag).unwrap();
    assert_eq!(result.action, Some(1));
    assert_eq!(result.value, -2.0);
    assert_eq!(result.stats.max_depth, 2);

    let result = AlphaBeta::default().search(&dag).unwrap();
    assert_eq!(result.action, Some(1));
    assert_eq!(result.value, -2.0);
    assert_eq!(result.stats.leaves_evaluated, 3);
    assert_eq!(result.stats.cutoffs, 1);

    assert_eq!(general_minimax(&dag).unwrap(), Some(1));
}

/// Test that general minimax follows self-interest on general-sum payoffs.
#[test]
fn test_general_sum_dag() {
    let dag = samples::general_sum_dag();
    assert!(!dag.is_constant_sum());

    let result = GeneralMinimax::default().search(&dag).unwrap();
    assert_eq!(result.action, Some(3));
    assert_eq!(result.value, Payoff::pair(20.0, 16.0));

    // The two-player engines still run, under their constant-sum reading.
    let legal = dag.available_actions(&dag.start_state());
    assert!(legal.contains(&minimax(&dag).unwrap().unwrap()));
    assert!(legal.contains(&alpha_beta(&dag).unwrap().unwrap()));
}

/// Test that every engine returns a legal root action on every sample.
#[test]
fn test_every_engine_returns_legal_action() {
    let dags = [
        samples::small_dag(),
        samples::constant_sum_dag(),
        samples::general_sum_dag(),
        samples::three_player_dag(),
    ];

    for dag in &dags {
        let start = dag.start_state();
        for mut strategy in all_strategies() {
            let action = strategy.choose_action(dag).unwrap();
            let action = action.unwrap_or_else(|| panic!("{} returned no action", strategy.name()));
            assert!(
                dag.is_legal(&start, &action),
                "{} chose illegal action {}",
                strategy.name(),
                action
            );
            assert!(strategy.stats().nodes_visited > 0);
        }
    }
}

/// Test that a terminal start state yields no action and its payoff.
#[test]
fn test_terminal_start_state() {
    let dag = GameDag::from_matrix(
        &[vec![false]],
        adversarial_search::DagState::new(0, adversarial_search::PlayerId::new(0)),
        [0],
        [(0, Payoff::pair(7.0, -7.0))],
        &[adversarial_search::PlayerId::new(0)],
    )
    .unwrap();

    let result = Minimax::default().search(&dag).unwrap();
    assert_eq!(result.action, None);
    assert_eq!(result.value, 7.0);
    assert_eq!(result.stats.leaves_evaluated, 1);

    assert_eq!(AlphaBeta::default().search(&dag).unwrap().action, None);
    assert_eq!(alpha_beta_cutoff(&dag, 1, ZeroEvaluator).unwrap(), None);

    let general = GeneralMinimax::default().search(&dag).unwrap();
    assert_eq!(general.action, None);
    assert_eq!(general.value, Payoff::pair(7.0, -7.0));
}

/// Test the cutoff engine's horizon on the small DAG.
#[test]
fn test_cutoff_horizon() {
    let dag = samples::small_dag();

    // One ply: both children are scored 0 and the first wins the tie.
    let mut shallow = CutoffAlphaBeta::new(1, ZeroEvaluator, SearchConfig::default()).unwrap();
    let result = shallow.search(&dag).unwrap();
    assert_eq!(result.action, Some(1));
    assert_eq!(result.value, 0.0);
    assert_eq!(result.stats.heuristic_evaluations, 2);
    assert_eq!(result.stats.leaves_evaluated, 0);

    // A heuristic that prefers higher node indices changes the choice.
    let node_index = |state: &adversarial_search::DagState| state.node as f64;
    assert_eq!(alpha_beta_cutoff(&dag, 1, node_index).unwrap(), Some(2));

    // Past the tree depth the heuristic is never consulted.
    let mut deep = CutoffAlphaBeta::new(10, node_index, SearchConfig::default()).unwrap();
    let result = deep.search(&dag).unwrap();
    assert_eq!(result.action, Some(1));
    assert_eq!(result.value, -2.0);
    assert_eq!(result.stats.heuristic_evaluations, 0);
}

/// Test building engines from algorithm names.
#[test]
fn test_search_engine_from_names() {
    let dag = samples::constant_sum_dag();

    for name in ["minimax", "alphabeta", "alpha-beta", "cutoff:2", "general"] {
        let algorithm = name.parse::<Algorithm>().unwrap();
        let mut engine = SearchEngine::<GameDag>::new(algorithm, SearchConfig::default()).unwrap();
        assert_eq!(engine.choose_action(&dag).unwrap(), Some(2), "{}", name);
        assert_eq!(engine.algorithm(), algorithm);
    }

    assert!("cutoff:0".parse::<Algorithm>().is_ok());
    assert!(SearchEngine::<GameDag>::new(Algorithm::Cutoff { ply: 0 }, SearchConfig::default()).is_err());
    assert!("expectimax".parse::<Algorithm>().is_err());
}

/// Test that statistics are reset between searches.
#[test]
fn test_stats_reset_between_searches() {
    let dag = samples::constant_sum_dag();
    let mut engine = AlphaBeta::default();

    engine.search(&dag).unwrap();
    let first = engine.stats().clone();
    engine.search(&dag).unwrap();

    assert_eq!(engine.stats(), &first);
}

/// Test serializing a search result.
#[test]
fn test_search_result_json() {
    let dag = samples::small_dag();
    let result = AlphaBeta::default().search(&dag).unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["action"], 1);
    assert_eq!(json["value"], -2.0);
    assert_eq!(json["stats"]["cutoffs"], 1);
}
