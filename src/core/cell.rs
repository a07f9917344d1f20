//! Board coordinates.
//!
//! A `Cell` is both a square on the board and an Isolation move (the
//! square a player jumps to). Rows grow downwards, columns to the right.

use serde::{Deserialize, Serialize};

/// A (row, column) coordinate.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    /// The coordinate-pair encoding of "no move".
    pub const NONE: Cell = Cell { row: -1, col: -1 };

    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The cell displaced by `(dr, dc)`.
    #[must_use]
    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Self::new(self.row + dr, self.col + dc)
    }

    /// Flatten a searcher decision into the coordinate-pair protocol,
    /// where `(-1, -1)` means the player had no legal move.
    #[must_use]
    pub fn from_decision(decision: Option<Cell>) -> Self {
        decision.unwrap_or(Self::NONE)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cell({}, {})", self.row, self.col)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
