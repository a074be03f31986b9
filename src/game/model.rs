//! Game model trait consumed by every search engine.
//!
//! A game model describes a finite, fully-observable, deterministic game
//! tree:
//! - Where the game starts
//! - What actions are legal in a state
//! - How actions produce successor states
//! - When the game ends and what each player receives

use std::fmt::Debug;

use crate::core::{Payoff, PlayerId};

/// Game model trait.
///
/// Engines are generic over this trait and never mutate states: every
/// transition produces a new state value.
///
/// ## Implementation Notes
///
/// - `available_actions`: only called on non-terminal states; enumeration
///   order is the engines' tie-break order
/// - `transition`: must be deterministic; may panic on an illegal action
/// - `evaluate`: only called on terminal states
/// - Every path from the start state must reach a terminal state in a
///   finite number of steps
pub trait GameModel {
    /// One position in the game.
    type State: Clone + Debug;

    /// A legal move from some state.
    type Action: Clone + PartialEq + Debug;

    /// The fixed initial position.
    fn start_state(&self) -> Self::State;

    /// Legal moves from a non-terminal state.
    fn available_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Deterministic successor of `state` under `action`.
    fn transition(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Check if the game is over in `state`.
    fn is_terminal(&self, state: &Self::State) -> bool;

    /// Payoff vector of a terminal state.
    fn evaluate(&self, state: &Self::State) -> Payoff;

    /// Whose turn it is in `state`.
    fn player_to_move(&self, state: &Self::State) -> PlayerId;

    /// Number of participants.
    fn player_count(&self) -> usize {
        2
    }

    // === Convenience Methods ===

    /// Check whether `action` is legal in `state`.
    fn is_legal(&self, state: &Self::State, action: &Self::Action) -> bool {
        !self.is_terminal(state) && self.available_actions(state).contains(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Count down from `n`; each move subtracts 1 or 2, the player who
    /// reaches zero wins.
    struct Countdown(u32);

    #[derive(Clone, Debug)]
    struct CountdownState {
        remaining: u32,
        to_move: PlayerId,
    }

    impl GameModel for Countdown {
        type State = CountdownState;
        type Action = u32;

        fn start_state(&self) -> CountdownState {
            CountdownState {
                remaining: self.0,
                to_move: PlayerId::new(0),
            }
        }

        fn available_actions(&self, state: &CountdownState) -> Vec<u32> {
            (1..=2).filter(|take| *take <= state.remaining).collect()
        }

        fn transition(&self, state: &CountdownState, action: &u32) -> CountdownState {
            CountdownState {
                remaining: state.remaining - action,
                to_move: state.to_move.next(2),
            }
        }

        fn is_terminal(&self, state: &CountdownState) -> bool {
            state.remaining == 0
        }

        fn evaluate(&self, state: &CountdownState) -> Payoff {
            // The player to move did not take the last counter.
            if state.to_move == PlayerId::new(0) {
                Payoff::zero_sum(-1.0)
            } else {
                Payoff::zero_sum(1.0)
            }
        }

        fn player_to_move(&self, state: &CountdownState) -> PlayerId {
            state.to_move
        }
    }

    #[test]
    fn test_default_player_count() {
        assert_eq!(Countdown(3).player_count(), 2);
    }

    #[test]
    fn test_is_legal() {
        let game = Countdown(1);
        let start = game.start_state();

        assert!(game.is_legal(&start, &1));
        assert!(!game.is_legal(&start, &2));

        let end = game.transition(&start, &1);
        assert!(game.is_terminal(&end));
        assert!(!game.is_legal(&end, &1));
        assert_eq!(game.evaluate(&end), Payoff::zero_sum(1.0));
    }
}
