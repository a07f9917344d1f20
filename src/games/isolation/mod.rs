//! Isolation.
//!
//! - Two players on a rectangular grid (7x7 by default)
//! - Each player's first move places them on any blank cell
//! - After that, players jump like chess knights onto blank cells
//! - Every cell a player lands on is removed from play
//! - A player with no legal move on their turn loses

mod board;

pub use board::{Board, BoardBuilder, DEFAULT_SIZE};
