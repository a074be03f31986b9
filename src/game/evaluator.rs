//! Static evaluators for depth-limited search.
//!
//! An evaluator estimates how good a non-terminal state is for the player
//! running the search. It is only consulted at the cutoff horizon; terminal
//! states always use the model's own payoff.

use super::model::GameModel;

/// Heuristic state evaluator.
///
/// Higher values are better for the searching player. Any closure of type
/// `Fn(&G::State) -> f64` is an evaluator.
pub trait Evaluator<G: GameModel> {
    /// Estimate the value of a non-terminal state.
    fn evaluate(&self, state: &G::State) -> f64;
}

impl<G, F> Evaluator<G> for F
where
    G: GameModel,
    F: Fn(&G::State) -> f64,
{
    fn evaluate(&self, state: &G::State) -> f64 {
        self(state)
    }
}

/// Evaluator that scores every horizon state as 0.0.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroEvaluator;

impl<G: GameModel> Evaluator<G> for ZeroEvaluator {
    fn evaluate(&self, _state: &G::State) -> f64 {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::dag::{DagState, GameDag};
    use crate::core::PlayerId;

    fn score<E: Evaluator<GameDag>>(evaluator: &E, state: &DagState) -> f64 {
        evaluator.evaluate(state)
    }

    #[test]
    fn test_closure_evaluator() {
        let state = DagState::new(3, PlayerId::new(1));
        let by_node = |s: &DagState| s.node as f64 * 2.0;
        assert_eq!(score(&by_node, &state), 6.0);
    }

    #[test]
    fn test_zero_evaluator() {
        let state = DagState::new(5, PlayerId::new(0));
        assert_eq!(score(&ZeroEvaluator, &state), 0.0);
    }
}
