//! Error types.
//!
//! Deadline aborts are not here: they are routine and live next to the
//! governor as `search::Timeout`.

use thiserror::Error;

use crate::core::{Cell, PlayerId};

/// Violations of the game rules reported by a state implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RulesError {
    #[error("illegal move {mv} for {player}")]
    IllegalMove { mv: String, player: PlayerId },

    #[error("cell {cell} is outside a {width}x{height} board")]
    OutOfBounds { cell: Cell, width: usize, height: usize },

    #[error("cell {cell} is already blocked")]
    CellBlocked { cell: Cell },

    #[error("invalid board dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("{player} is placed more than once")]
    DuplicatePlacement { player: PlayerId },
}

impl RulesError {
    /// Build an `IllegalMove` from any debuggable move type.
    pub fn illegal_move(mv: impl std::fmt::Debug, player: PlayerId) -> Self {
        Self::IllegalMove {
            mv: format!("{mv:?}"),
            player,
        }
    }
}

/// Invalid searcher configuration.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("search depth must be at least 1")]
    ZeroSearchDepth,

    #[error("timeout threshold must be positive and finite, got {0}")]
    InvalidThreshold(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RulesError::illegal_move(Cell::new(1, 2), PlayerId::TWO);
        assert_eq!(err.to_string(), "illegal move Cell(1, 2) for Player 2");

        let err = RulesError::OutOfBounds {
            cell: Cell::new(7, 0),
            width: 7,
            height: 7,
        };
        assert_eq!(err.to_string(), "cell (7, 0) is outside a 7x7 board");

        let err = RulesError::DuplicatePlacement { player: PlayerId::ONE };
        assert_eq!(err.to_string(), "Player 1 is placed more than once");

        assert_eq!(
            ConfigError::InvalidThreshold(-1.0).to_string(),
            "timeout threshold must be positive and finite, got -1"
        );
    }
}
