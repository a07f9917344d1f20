//! Baseline agents for tournaments and sanity checks.

use tracing::trace;

use crate::core::{GameRng, Score};
use crate::eval::Evaluator;
use crate::rules::GameState;

use super::governor::TimeLeft;
use super::Searcher;

/// Picks a uniformly random legal move.
#[derive(Clone, Debug)]
pub struct RandomPlayer {
    rng: GameRng,
}

impl RandomPlayer {
    /// Create a player with a deterministic seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl<S: GameState> Searcher<S> for RandomPlayer {
    fn get_move(&mut self, state: &S, _time_left: &dyn TimeLeft) -> Option<S::Move> {
        let moves = state.legal_moves(state.active_player());
        self.rng.choose(&moves).copied()
    }
}

/// Picks the move whose successor scores best one ply ahead.
///
/// Ties keep the earlier move.
#[derive(Clone, Debug, Default)]
pub struct GreedyPlayer<E> {
    evaluator: E,
}

impl<E> GreedyPlayer<E> {
    pub fn new(evaluator: E) -> Self {
        Self { evaluator }
    }
}

impl<S, E> Searcher<S> for GreedyPlayer<E>
where
    S: GameState,
    E: Evaluator<S>,
{
    fn get_move(&mut self, state: &S, _time_left: &dyn TimeLeft) -> Option<S::Move> {
        let player = state.active_player();
        let mut best: Option<(S::Move, Score)> = None;
        for mv in state.legal_moves(player) {
            let Ok(next) = state.forecast(mv) else {
                continue;
            };
            let score = self.evaluator.evaluate(&next, player);
            if best.map_or(true, |(_, incumbent)| score > incumbent) {
                best = Some((mv, score));
            }
        }
        trace!(?best, "greedy choice");
        best.map(|(mv, _)| mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cell, PlayerId};
    use crate::eval::OpenMoveScore;
    use crate::games::isolation::Board;
    use crate::search::NoDeadline;

    fn corner_board() -> Board {
        Board::builder()
            .width(3)
            .height(3)
            .block((2, 2))
            .place(PlayerId::ONE, (0, 0))
            .place(PlayerId::TWO, (2, 0))
            .build()
            .unwrap()
    }

    #[test]
    fn test_random_player_picks_legal_move() {
        let board = Board::default();
        let mut player = RandomPlayer::new(42);
        for _ in 0..20 {
            let mv = player.get_move(&board, &NoDeadline).unwrap();
            assert!(board.is_legal(mv));
        }
    }

    #[test]
    fn test_random_player_is_deterministic() {
        let board = Board::default();
        let mut a = RandomPlayer::new(7);
        let mut b = RandomPlayer::new(7);
        for _ in 0..10 {
            assert_eq!(a.get_move(&board, &NoDeadline), b.get_move(&board, &NoDeadline));
        }
    }

    #[test]
    fn test_greedy_avoids_self_trap() {
        // (1, 2) leaves player one with no way out; (2, 1) keeps (0, 2) open.
        let board = corner_board();
        let mut player = GreedyPlayer::new(OpenMoveScore);
        assert_eq!(player.get_move(&board, &NoDeadline), Some(Cell::new(2, 1)));
    }

    #[test]
    fn test_stuck_player_gets_none() {
        let board = Board::builder()
            .width(3)
            .height(3)
            .block((1, 2))
            .block((2, 1))
            .place(PlayerId::ONE, (0, 0))
            .place(PlayerId::TWO, (1, 1))
            .build()
            .unwrap();

        assert_eq!(RandomPlayer::new(1).get_move(&board, &NoDeadline), None);
        assert_eq!(GreedyPlayer::new(OpenMoveScore).get_move(&board, &NoDeadline), None);
    }
}
