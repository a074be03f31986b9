//! Failure modes of the engines on malformed game models.
//!
//! The DAG validator rejects these shapes up front, so they are built here
//! as small hand-written `GameModel`s.

use adversarial_search::{
    alpha_beta_cutoff, Algorithm, AlphaBeta, CutoffAlphaBeta, GameModel, GeneralMinimax, Minimax,
    Payoff, PlayerId, SearchConfig, SearchEngine, SearchError, ZeroEvaluator,
};

/// A game that never ends: every state has one move to the next counter.
struct Endless;

impl GameModel for Endless {
    type State = u32;
    type Action = u32;

    fn start_state(&self) -> u32 {
        0
    }

    fn available_actions(&self, state: &u32) -> Vec<u32> {
        vec![state + 1]
    }

    fn transition(&self, _state: &u32, action: &u32) -> u32 {
        *action
    }

    fn is_terminal(&self, _state: &u32) -> bool {
        false
    }

    fn evaluate(&self, _state: &u32) -> Payoff {
        unreachable!("Endless has no terminal states")
    }

    fn player_to_move(&self, state: &u32) -> PlayerId {
        PlayerId::new((state % 2) as u8)
    }
}

/// A game whose state 1 is neither terminal nor has any moves.
struct Stuck;

impl GameModel for Stuck {
    type State = u8;
    type Action = u8;

    fn start_state(&self) -> u8 {
        0
    }

    fn available_actions(&self, state: &u8) -> Vec<u8> {
        match state {
            0 => vec![1, 2],
            _ => Vec::new(),
        }
    }

    fn transition(&self, _state: &u8, action: &u8) -> u8 {
        *action
    }

    fn is_terminal(&self, state: &u8) -> bool {
        *state == 2
    }

    fn evaluate(&self, _state: &u8) -> Payoff {
        Payoff::zero_sum(1.0)
    }

    fn player_to_move(&self, _state: &u8) -> PlayerId {
        PlayerId::new(0)
    }
}

/// Player 1 moves first, but the only terminal pays a single entry.
struct ShortPayoff;

impl GameModel for ShortPayoff {
    type State = bool;
    type Action = ();

    fn start_state(&self) -> bool {
        false
    }

    fn available_actions(&self, _state: &bool) -> Vec<()> {
        vec![()]
    }

    fn transition(&self, _state: &bool, _action: &()) -> bool {
        true
    }

    fn is_terminal(&self, state: &bool) -> bool {
        *state
    }

    fn evaluate(&self, _state: &bool) -> Payoff {
        Payoff::from_slice(&[3.0])
    }

    fn player_to_move(&self, _state: &bool) -> PlayerId {
        PlayerId::new(1)
    }
}

#[test]
fn test_depth_guard_stops_endless_game() {
    let config = SearchConfig::default().with_max_depth(16);
    let expected = SearchError::DepthLimitExceeded { limit: 16 };

    assert_eq!(Minimax::new(config.clone()).search(&Endless).unwrap_err(), expected);
    assert_eq!(AlphaBeta::new(config.clone()).search(&Endless).unwrap_err(), expected);
    assert_eq!(GeneralMinimax::new(config.clone()).search(&Endless).unwrap_err(), expected);
    assert_eq!(
        CutoffAlphaBeta::new(100, ZeroEvaluator, config).unwrap().search(&Endless).unwrap_err(),
        expected
    );
}

#[test]
fn test_default_depth_guard() {
    let err = Minimax::default().search(&Endless).unwrap_err();
    assert_eq!(err, SearchError::DepthLimitExceeded { limit: 512 });
}

#[test]
fn test_cutoff_horizon_handles_endless_game() {
    let config = SearchConfig::default().with_max_depth(16);
    let mut engine = CutoffAlphaBeta::new(3, ZeroEvaluator, config).unwrap();

    let result = engine.search(&Endless).unwrap();
    assert_eq!(result.action, Some(1));
    assert_eq!(result.value, 0.0);
    assert_eq!(result.stats.heuristic_evaluations, 1);
    assert_eq!(result.stats.max_depth, 3);
}

#[test]
fn test_dead_end_is_reported() {
    assert_eq!(Minimax::default().search(&Stuck).unwrap_err(), SearchError::DeadEnd { depth: 1 });
    assert_eq!(AlphaBeta::default().search(&Stuck).unwrap_err(), SearchError::DeadEnd { depth: 1 });
    assert_eq!(
        GeneralMinimax::default().search(&Stuck).unwrap_err(),
        SearchError::DeadEnd { depth: 1 }
    );
    assert_eq!(
        alpha_beta_cutoff(&Stuck, 4, ZeroEvaluator).unwrap_err(),
        SearchError::DeadEnd { depth: 1 }
    );
}

#[test]
fn test_missing_payoff_entry() {
    let expected = SearchError::MissingPayoff {
        player: PlayerId::new(1),
        len: 1,
    };

    assert_eq!(Minimax::default().search(&ShortPayoff).unwrap_err(), expected);
    assert_eq!(AlphaBeta::default().search(&ShortPayoff).unwrap_err(), expected);
    assert_eq!(GeneralMinimax::default().search(&ShortPayoff).unwrap_err(), expected);
}

#[test]
fn test_invalid_cutoff_ply() {
    assert_eq!(
        alpha_beta_cutoff(&Stuck, 0, ZeroEvaluator).unwrap_err(),
        SearchError::InvalidCutoff { ply: 0 }
    );
    assert!(matches!(
        SearchEngine::<Stuck>::new(Algorithm::Cutoff { ply: 0 }, SearchConfig::default()),
        Err(SearchError::InvalidCutoff { ply: 0 })
    ));
}

#[test]
fn test_unknown_algorithm_message() {
    let err = "negamax".parse::<Algorithm>().unwrap_err();
    assert_eq!(err, SearchError::UnknownAlgorithm("negamax".to_string()));
    assert!(err.to_string().contains("negamax"));
}
