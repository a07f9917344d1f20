//! Heuristic evaluation of non-terminal states.
//!
//! ## Contract
//!
//! `evaluate(state, player)` returns:
//! - `+inf` if `player` has already won in `state`
//! - `-inf` if `player` has already lost
//! - otherwise a finite score that grows with `player`'s advantage
//!
//! Evaluators are pure and cheap: the searchers call them at every
//! horizon leaf. Any `Fn(&S, PlayerId) -> Score` closure is an evaluator.
//!
//! ```
//! use isolation_search::core::{PlayerId, Score};
//! use isolation_search::eval::Evaluator;
//! use isolation_search::games::isolation::Board;
//! use isolation_search::rules::GameState;
//!
//! let mobility = |board: &Board, player: PlayerId| board.legal_moves(player).len() as Score;
//! assert_eq!(mobility.evaluate(&Board::default(), PlayerId::ONE), 49.0);
//! ```

pub mod heuristics;

pub use heuristics::{
    AggressiveScore, CenterScore, ImprovedScore, LookaheadScore, NullScore, OpenMoveScore,
    WeightedCenterScore,
};

use crate::core::{PlayerId, Score};

/// Desirability of a state for one player.
pub trait Evaluator<S> {
    /// Score `state` from `player`'s point of view.
    fn evaluate(&self, state: &S, player: PlayerId) -> Score;
}

impl<S, F> Evaluator<S> for F
where
    F: Fn(&S, PlayerId) -> Score,
{
    fn evaluate(&self, state: &S, player: PlayerId) -> Score {
        self(state, player)
    }
}
