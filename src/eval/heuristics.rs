//! Isolation heuristics.
//!
//! All of these work on any state that exposes board geometry and uses
//! cells as moves. Each returns the decided utility when the game is over.

use crate::core::{Cell, PlayerId, Score};
use crate::rules::{BoardGeometry, GameState};

use super::Evaluator;

/// Utility of a decided state, `None` while the game is still open.
fn decided<S: GameState>(state: &S, player: PlayerId) -> Option<Score> {
    let utility = state.utility(player);
    (utility != 0.0).then_some(utility)
}

fn mobility<S: GameState>(state: &S, player: PlayerId) -> Score {
    state.legal_moves(player).len() as Score
}

/// Only distinguishes won and lost states.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullScore;

impl<S: GameState> Evaluator<S> for NullScore {
    fn evaluate(&self, state: &S, player: PlayerId) -> Score {
        decided(state, player).unwrap_or(0.0)
    }
}

/// Number of moves available to the player.
#[derive(Clone, Copy, Debug, Default)]
pub struct OpenMoveScore;

impl<S: GameState> Evaluator<S> for OpenMoveScore {
    fn evaluate(&self, state: &S, player: PlayerId) -> Score {
        decided(state, player).unwrap_or_else(|| mobility(state, player))
    }
}

/// Own moves minus opponent moves.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImprovedScore;

impl<S: GameState> Evaluator<S> for ImprovedScore {
    fn evaluate(&self, state: &S, player: PlayerId) -> Score {
        decided(state, player).unwrap_or_else(|| {
            mobility(state, player) - mobility(state, state.opponent(player))
        })
    }
}

/// Squared distance between the player and the centre of the board.
///
/// Zero before the player has been placed.
#[derive(Clone, Copy, Debug, Default)]
pub struct CenterScore;

impl<S: GameState + BoardGeometry> Evaluator<S> for CenterScore {
    fn evaluate(&self, state: &S, player: PlayerId) -> Score {
        if let Some(utility) = decided(state, player) {
            return utility;
        }
        let Some(cell) = state.player_location(player) else {
            return 0.0;
        };
        let half_width = state.width() as Score / 2.0;
        let half_height = state.height() as Score / 2.0;
        (half_height - cell.row as Score).powi(2) + (half_width - cell.col as Score).powi(2)
    }
}

/// Mobility weighted 1.5 to 1 in favour of the player.
#[derive(Clone, Copy, Debug, Default)]
pub struct AggressiveScore;

impl<S: GameState> Evaluator<S> for AggressiveScore {
    fn evaluate(&self, state: &S, player: PlayerId) -> Score {
        decided(state, player).unwrap_or_else(|| {
            1.5 * mobility(state, player) - mobility(state, state.opponent(player))
        })
    }
}

/// Own mobility scaled by board position, minus 1.4 x opponent mobility.
///
/// Position weight: 2 inside the central zone, 1.5 on the cells one
/// knight jump from a corner, 1 elsewhere.
///
/// The classic version of this score meant to single out the near-corner
/// cells but its test was always true, so it weighted every cell outside
/// the zone 1.5. Here the near-corner weight applies to those eight cells
/// only.
#[derive(Clone, Copy, Debug, Default)]
pub struct WeightedCenterScore;

impl WeightedCenterScore {
    fn position_weight(cell: Cell, width: usize, height: usize) -> Score {
        let row = cell.row as Score;
        let col = cell.col as Score;
        let center_row = height as Score / 2.0;
        let center_col = width as Score / 2.0;

        // Lower bound is a half cell wider to keep odd boards symmetric.
        let in_zone = (center_row - 1.5..=center_row + 1.0).contains(&row)
            && (center_col - 1.5..=center_col + 1.0).contains(&col);
        if in_zone {
            return 2.0;
        }

        let edge_row = cell.row.min(height as i32 - 1 - cell.row);
        let edge_col = cell.col.min(width as i32 - 1 - cell.col);
        if matches!((edge_row, edge_col), (1, 2) | (2, 1)) {
            1.5
        } else {
            1.0
        }
    }
}

impl<S: GameState + BoardGeometry> Evaluator<S> for WeightedCenterScore {
    fn evaluate(&self, state: &S, player: PlayerId) -> Score {
        if let Some(utility) = decided(state, player) {
            return utility;
        }
        let weight = state
            .player_location(player)
            .map_or(1.0, |cell| Self::position_weight(cell, state.width(), state.height()));
        mobility(state, player) * weight - 1.4 * mobility(state, state.opponent(player))
    }
}

/// Two-ply mobility: moves plus the cells reachable from each of them,
/// with the opponent's reach weighted 1.5.
///
/// This redefines the classic "future plus defensive" score, which added
/// the opponent's replies after each of the player's moves. Those replies
/// come from forecasting, which is only legal for the player on move;
/// second-ply reach through `moves_from` scores either player the same way.
#[derive(Clone, Copy, Debug, Default)]
pub struct LookaheadScore;

impl LookaheadScore {
    fn reach<S: GameState<Move = Cell> + BoardGeometry>(state: &S, player: PlayerId) -> Score {
        let moves = state.legal_moves(player);
        let second: usize = moves.iter().map(|&cell| state.moves_from(cell).len()).sum();
        (moves.len() + second) as Score
    }
}

impl<S: GameState<Move = Cell> + BoardGeometry> Evaluator<S> for LookaheadScore {
    fn evaluate(&self, state: &S, player: PlayerId) -> Score {
        decided(state, player).unwrap_or_else(|| {
            Self::reach(state, player) - 1.5 * Self::reach(state, state.opponent(player))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::isolation::Board;

    fn midgame() -> Board {
        // Player one in the middle, player two on an edge.
        Board::builder()
            .place(PlayerId::ONE, (3, 3))
            .place(PlayerId::TWO, (0, 3))
            .build()
            .unwrap()
    }

    fn lost_for_one() -> Board {
        Board::builder()
            .width(3)
            .height(3)
            .block((1, 2))
            .block((2, 1))
            .place(PlayerId::ONE, (0, 0))
            .place(PlayerId::TWO, (1, 1))
            .build()
            .unwrap()
    }

    fn assert_decided(name: &str, eval: impl Evaluator<Board>) {
        let board = lost_for_one();
        assert_eq!(eval.evaluate(&board, PlayerId::ONE), Score::NEG_INFINITY, "{name}");
        assert_eq!(eval.evaluate(&board, PlayerId::TWO), Score::INFINITY, "{name}");
    }

    #[test]
    fn test_every_heuristic_reports_decided_states() {
        assert_decided("null", NullScore);
        assert_decided("open", OpenMoveScore);
        assert_decided("improved", ImprovedScore);
        assert_decided("center", CenterScore);
        assert_decided("aggressive", AggressiveScore);
        assert_decided("weighted", WeightedCenterScore);
        assert_decided("lookahead", LookaheadScore);
    }

    #[test]
    fn test_mobility_scores() {
        let board = midgame();
        // Centre: 8 jumps. Top edge at (0, 3): 4 jumps.
        assert_eq!(NullScore.evaluate(&board, PlayerId::ONE), 0.0);
        assert_eq!(OpenMoveScore.evaluate(&board, PlayerId::ONE), 8.0);
        assert_eq!(OpenMoveScore.evaluate(&board, PlayerId::TWO), 4.0);
        assert_eq!(ImprovedScore.evaluate(&board, PlayerId::ONE), 4.0);
        assert_eq!(ImprovedScore.evaluate(&board, PlayerId::TWO), -4.0);
        assert_eq!(AggressiveScore.evaluate(&board, PlayerId::ONE), 8.0);
    }

    #[test]
    fn test_center_score() {
        let board = midgame();
        // Centre of a 7x7 board is (3.5, 3.5).
        assert_eq!(CenterScore.evaluate(&board, PlayerId::ONE), 0.5);
        assert_eq!(CenterScore.evaluate(&board, PlayerId::TWO), 12.5);
        assert_eq!(CenterScore.evaluate(&Board::default(), PlayerId::ONE), 0.0);
    }

    #[test]
    fn test_weighted_center_weights() {
        assert_eq!(WeightedCenterScore::position_weight(Cell::new(3, 3), 7, 7), 2.0);
        assert_eq!(WeightedCenterScore::position_weight(Cell::new(2, 4), 7, 7), 2.0);
        assert_eq!(WeightedCenterScore::position_weight(Cell::new(1, 2), 7, 7), 1.5);
        assert_eq!(WeightedCenterScore::position_weight(Cell::new(5, 4), 7, 7), 1.5);
        assert_eq!(WeightedCenterScore::position_weight(Cell::new(0, 0), 7, 7), 1.0);
        assert_eq!(WeightedCenterScore::position_weight(Cell::new(0, 3), 7, 7), 1.0);

        let board = midgame();
        // 8 * 2.0 - 1.4 * 4
        let score = WeightedCenterScore.evaluate(&board, PlayerId::ONE);
        assert!((score - 10.4).abs() < 1e-9);
    }

    #[test]
    fn test_lookahead_counts_second_ply() {
        let board = Board::builder()
            .width(3)
            .height(3)
            .place(PlayerId::ONE, (0, 0))
            .place(PlayerId::TWO, (1, 1))
            .build()
            .unwrap();

        // One: (1, 2) and (2, 1), each with one onward jump ((2, 0) and (0, 2)).
        // Two sits in the centre of a 3x3 board and can't jump anywhere.
        assert_eq!(LookaheadScore::reach(&board, PlayerId::ONE), 4.0);
        assert_eq!(LookaheadScore::reach(&board, PlayerId::TWO), 0.0);
        assert_eq!(LookaheadScore.evaluate(&board, PlayerId::ONE), 4.0);
    }
}
