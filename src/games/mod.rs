//! Concrete game states.
//!
//! - `isolation`: the Isolation board the engine is built to play
//! - `tree`: a synthetic uniform game tree with known values, for
//!   checking searchers against each other and counting pruned work

pub mod isolation;
pub mod tree;
