//! Adversarial search.
//!
//! ## Overview
//!
//! Two searchers share one evaluation contract and one deadline model:
//!
//! - **`MinimaxSearcher`**: fixed-depth minimax. On a timeout it still
//!   picks the best root move scored so far.
//! - **`AlphaBetaSearcher`**: iterative deepening over depth-limited
//!   alpha-beta. On a timeout it returns the move of the last depth that
//!   finished.
//!
//! Scores are always from the root player's point of view; layers
//! alternate between max and min instead of negating.
//!
//! ## Usage
//!
//! ```rust
//! use isolation_search::core::SearchConfig;
//! use isolation_search::eval::ImprovedScore;
//! use isolation_search::games::isolation::Board;
//! use isolation_search::search::{AlphaBetaSearcher, Deadline, Searcher};
//!
//! let board = Board::default();
//! let mut searcher = AlphaBetaSearcher::new(ImprovedScore, SearchConfig::default()).unwrap();
//!
//! let mv = searcher.get_move(&board, &Deadline::from_millis(150));
//! assert!(mv.is_some());
//! println!("depth reached: {}", searcher.stats().completed_depth);
//! ```
//!
//! Baseline agents (`RandomPlayer`, `GreedyPlayer`) implement the same
//! `Searcher` trait.

pub mod alphabeta;
pub mod baseline;
mod context;
pub mod governor;
pub mod minimax;
pub mod stats;

pub use alphabeta::AlphaBetaSearcher;
pub use baseline::{GreedyPlayer, RandomPlayer};
pub use governor::{Deadline, NoDeadline, TimeLeft, Timeout};
pub use minimax::MinimaxSearcher;
pub use stats::SearchStats;

use crate::core::Score;
use crate::rules::GameState;

/// Anything that picks a move for the player on move.
pub trait Searcher<S: GameState> {
    /// Choose a move for `state.active_player()` before time runs out.
    ///
    /// Returns `None` only when that player has no legal move.
    fn get_move(&mut self, state: &S, time_left: &dyn TimeLeft) -> Option<S::Move>;
}

/// Outcome of one decision.
#[derive(Clone, Debug, PartialEq)]
pub struct Decision<M> {
    /// Chosen move; `None` when the root has no legal moves.
    pub best_move: Option<M>,

    /// Root-player score of `best_move` at `depth`.
    pub score: Score,

    /// Depth the answer comes from.
    pub depth: u32,

    /// False if the deadline cut the search short.
    pub complete: bool,
}

impl<M> Decision<M> {
    /// Decision for a root where the player on move is stuck.
    pub(crate) fn no_move(score: Score) -> Self {
        Self {
            best_move: None,
            score,
            depth: 0,
            complete: true,
        }
    }

    /// Placeholder before any move has been scored: the first legal move.
    pub(crate) fn fallback(first: M) -> Self {
        Self {
            best_move: Some(first),
            score: Score::NEG_INFINITY,
            depth: 0,
            complete: false,
        }
    }
}
