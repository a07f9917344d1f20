//! State trait for two-player, zero-sum, perfect-information games.
//!
//! ## Implementation Notes
//!
//! - States are values: `forecast` returns a new state and never mutates
//!   `self`, so a searcher can expand many siblings from one parent.
//! - `legal_moves`: return an empty list if the player can't move. The
//!   order is significant; searchers break ties by it.
//! - `forecast`: must reject moves that are not currently legal.
//! - `utility`: 0 while undecided, ±infinity once decided.

use smallvec::SmallVec;

use crate::core::{Cell, PlayerId, Score};
use crate::error::RulesError;

/// Move list. Eight inline slots cover every knight move on the board.
pub type MoveList<M> = SmallVec<[M; 8]>;

/// Game state trait.
pub trait GameState: Clone {
    /// A legal transition, compared by value.
    type Move: Copy + Eq + std::fmt::Debug;

    /// The player whose turn it is.
    fn active_player(&self) -> PlayerId;

    /// Legal moves for `player`, in a deterministic order.
    fn legal_moves(&self, player: PlayerId) -> MoveList<Self::Move>;

    /// Successor state after the active player plays `mv`.
    ///
    /// Fails with `RulesError::IllegalMove` if `mv` is not in
    /// `legal_moves(active_player())`.
    fn forecast(&self, mv: Self::Move) -> Result<Self, RulesError>;

    /// Outcome for `player`: 0 while undecided, +inf if `player` has won,
    /// -inf if `player` has lost.
    fn utility(&self, player: PlayerId) -> Score;

    // === Convenience Methods ===

    /// The other player.
    fn opponent(&self, player: PlayerId) -> PlayerId {
        player.other()
    }

    /// The player who is not on move.
    fn inactive_player(&self) -> PlayerId {
        self.opponent(self.active_player())
    }

    /// Has `player` already won?
    fn is_winner(&self, player: PlayerId) -> bool {
        self.utility(player) == Score::INFINITY
    }

    /// Has `player` already lost?
    fn is_loser(&self, player: PlayerId) -> bool {
        self.utility(player) == Score::NEG_INFINITY
    }
}

/// Spatial queries used only by evaluator plug-ins.
///
/// The searchers never call these.
pub trait BoardGeometry {
    /// Number of columns.
    fn width(&self) -> usize;

    /// Number of rows.
    fn height(&self) -> usize;

    /// Where `player` stands, or `None` before their first move.
    fn player_location(&self, player: PlayerId) -> Option<Cell>;

    /// Open cells a piece standing on `from` could move to, regardless
    /// of whose turn it is.
    fn moves_from(&self, from: Cell) -> MoveList<Cell>;
}
