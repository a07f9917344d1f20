//! # isolation-search
//!
//! Game-tree search for two-player, perfect-information, zero-sum games,
//! built around knight-move Isolation.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic Search**: The searchers only talk to the `GameState`
//!    trait. Isolation is one implementation; `SyntheticTree` is another
//!    used to check search correctness against known values.
//!
//! 2. **Root-Relative Scores**: Every score is from the root player's point
//!    of view. `+inf` is a proven win, `-inf` a proven loss.
//!
//! 3. **Deadline First**: Every search frame polls the clock. Running out of
//!    time is a normal outcome, never an error; a legal move is always
//!    returned when one exists.
//!
//! ## Architecture
//!
//! - **Persistent Boards**: O(1) cloning via `im-rs`, so `forecast` never
//!   mutates the board it was called on.
//!
//! - **Explicit Abort**: A timeout is `Err(Timeout)` that unwinds with `?`.
//!
//! ## Modules
//!
//! - `core`: Players, cells, scores, RNG, configuration
//! - `rules`: `GameState` trait for game implementations
//! - `games`: Isolation board and the synthetic test tree
//! - `eval`: `Evaluator` trait and Isolation heuristics
//! - `search`: Minimax, iterative-deepening alpha-beta, baselines, deadlines
//! - `error`: Error types

pub mod core;
pub mod error;
pub mod eval;
pub mod games;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{Cell, GameRng, PlayerId, PlayerMap, Score, SearchConfig};

pub use crate::error::{ConfigError, RulesError};

pub use crate::rules::{BoardGeometry, GameState, MoveList};

pub use crate::games::isolation::{Board, BoardBuilder};

pub use crate::eval::{
    AggressiveScore, CenterScore, Evaluator, ImprovedScore, LookaheadScore, NullScore,
    OpenMoveScore, WeightedCenterScore,
};

pub use crate::search::{
    AlphaBetaSearcher, Deadline, Decision, GreedyPlayer, MinimaxSearcher, NoDeadline,
    RandomPlayer, SearchStats, Searcher, TimeLeft, Timeout,
};
