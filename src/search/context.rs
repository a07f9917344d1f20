//! Per-decision state threaded through the recursive helpers.

use tracing::error;

use crate::core::{PlayerId, Score};
use crate::eval::Evaluator;
use crate::rules::GameState;

use super::governor::{Governor, TimeLeft, Timeout};
use super::stats::SearchStats;

/// Everything a max/min frame needs, passed down explicitly.
pub(crate) struct SearchContext<'a, E> {
    evaluator: &'a E,
    governor: Governor<'a>,
    /// Scores are always from this player's point of view.
    pub(crate) root: PlayerId,
    pub(crate) stats: &'a mut SearchStats,
    /// Set when a non-terminal leaf was cut off by the depth limit.
    pub(crate) horizon_reached: bool,
}

impl<'a, E> SearchContext<'a, E> {
    pub(crate) fn new(
        evaluator: &'a E,
        clock: &'a dyn TimeLeft,
        threshold: f64,
        root: PlayerId,
        stats: &'a mut SearchStats,
    ) -> Self {
        Self {
            evaluator,
            governor: Governor::new(clock, threshold),
            root,
            stats,
            horizon_reached: false,
        }
    }

    /// Deadline check without counting a node.
    pub(crate) fn check(&self) -> Result<(), Timeout> {
        self.governor.check()
    }

    /// Deadline check at the top of every frame.
    pub(crate) fn enter(&mut self) -> Result<(), Timeout> {
        self.governor.check()?;
        self.stats.nodes += 1;
        Ok(())
    }

    /// Root-player utility if the player on move has already won or lost.
    pub(crate) fn terminal<S: GameState>(&self, state: &S) -> Option<Score> {
        (state.utility(state.active_player()) != 0.0).then(|| state.utility(self.root))
    }

    /// Evaluate a horizon leaf for the root player.
    pub(crate) fn evaluate<S>(&mut self, state: &S) -> Score
    where
        E: Evaluator<S>,
    {
        self.stats.leaves += 1;
        self.horizon_reached = true;
        self.evaluator.evaluate(state, self.root)
    }

    /// Forecast a move taken from the state's own legal move list.
    ///
    /// A rejection means the state disagrees with itself about legality.
    /// That is a bug: fatal in debug builds, skipped in release.
    pub(crate) fn forecast<S: GameState>(&mut self, state: &S, mv: S::Move) -> Option<S> {
        self.stats.forecasts += 1;
        match state.forecast(mv) {
            Ok(next) => Some(next),
            Err(err) => {
                if cfg!(debug_assertions) {
                    panic!("search forecast an illegal move: {err}");
                }
                error!(%err, ?mv, "skipping move rejected by forecast");
                None
            }
        }
    }
}
