//! Core types shared by the rules, evaluators and searchers:
//! players, board coordinates, scores, RNG and searcher configuration.

pub mod cell;
pub mod config;
pub mod player;
pub mod rng;

pub use cell::Cell;
pub use config::SearchConfig;
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;

/// Desirability of a state from one fixed player's point of view.
///
/// Finite while the game is undecided; `f64::INFINITY` once that player
/// has won and `f64::NEG_INFINITY` once they have lost.
pub type Score = f64;
