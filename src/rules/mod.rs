//! Game state abstraction consumed by the search engine.
//!
//! Games implement `GameState` to define:
//! - Whose turn it is
//! - Legal moves for each player
//! - How a move produces the successor state
//! - Win/loss detection through `utility`
//!
//! The searchers call into `GameState` but never interpret
//! game-specific concepts directly.

pub mod state;

pub use state::{BoardGeometry, GameState, MoveList};
