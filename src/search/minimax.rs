//! Fixed-depth minimax.
//!
//! `max_value` and `min_value` alternate down to the configured depth and
//! fall back to the evaluator at the horizon. A timed-out frame stops
//! expanding but still reports the best value it had settled, so the root
//! can pick the best move scored before the cutoff.

use std::time::Instant;

use tracing::{debug, debug_span};

use crate::core::{SearchConfig, Score};
use crate::error::ConfigError;
use crate::eval::Evaluator;
use crate::rules::GameState;

use super::context::SearchContext;
use super::governor::{TimeLeft, Timeout};
use super::stats::SearchStats;
use super::{Decision, Searcher};

/// Depth-limited minimax searcher.
pub struct MinimaxSearcher<E> {
    evaluator: E,
    config: SearchConfig,
    stats: SearchStats,
}

impl<E> MinimaxSearcher<E> {
    /// Create a searcher. Fails if the configuration is invalid.
    pub fn new(evaluator: E, config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            evaluator,
            config,
            stats: SearchStats::default(),
        })
    }

    /// Best move at `depth` plies, or `None` if the player on move is stuck.
    pub fn decide<S>(&mut self, state: &S, depth: u32, time_left: &dyn TimeLeft) -> Option<S::Move>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.search(state, depth, time_left).best_move
    }

    /// Run minimax to `depth` plies and report move, score and completion.
    ///
    /// Ties keep the earlier move in `legal_moves` order. A decided win
    /// (`+inf`) ends the root loop early. If nothing was scored before the
    /// deadline the first legal move is returned.
    pub fn search<S>(&mut self, state: &S, depth: u32, time_left: &dyn TimeLeft) -> Decision<S::Move>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        let _span = debug_span!("minimax", depth).entered();
        let start = Instant::now();
        self.stats.reset();

        let root = state.active_player();
        let moves = state.legal_moves(root);
        let Some(&first) = moves.first() else {
            debug!(%root, "no legal moves");
            return Decision::no_move(state.utility(root));
        };

        let mut decision = Decision::fallback(first);
        let mut ctx = SearchContext::new(
            &self.evaluator,
            time_left,
            self.config.timeout_threshold,
            root,
            &mut self.stats,
        );

        match root_search(&mut ctx, state, &moves, depth, &mut decision) {
            Ok(()) => {
                decision.depth = depth;
                decision.complete = true;
                ctx.stats.completed_depth = depth;
            }
            Err(_) => {
                ctx.stats.timed_out = true;
                debug!(depth, "minimax timed out");
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            best = ?decision.best_move,
            score = decision.score,
            nodes = self.stats.nodes,
            "minimax decided"
        );
        decision
    }

    /// Statistics from the last decision.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Get the evaluator.
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }
}

impl<S, E> Searcher<S> for MinimaxSearcher<E>
where
    S: GameState,
    E: Evaluator<S>,
{
    fn get_move(&mut self, state: &S, time_left: &dyn TimeLeft) -> Option<S::Move> {
        let depth = self.config.search_depth;
        self.decide(state, depth, time_left)
    }
}

/// Score every root move, keeping the first strictly better one.
fn root_search<S, E>(
    ctx: &mut SearchContext<'_, E>,
    state: &S,
    moves: &[S::Move],
    depth: u32,
    decision: &mut Decision<S::Move>,
) -> Result<(), Timeout>
where
    S: GameState,
    E: Evaluator<S>,
{
    ctx.enter()?;
    if depth == 0 {
        return Ok(());
    }

    for &mv in moves {
        let Some(child) = ctx.forecast(state, mv) else {
            continue;
        };
        let (score, cut) = match min_value(ctx, &child, depth - 1) {
            Ok(score) => (Some(score), None),
            Err(cut) => (cut.partial(), Some(cut)),
        };
        if let Some(score) = score.filter(|&score| score > decision.score) {
            decision.best_move = Some(mv);
            decision.score = score;
        }
        if let Some(cut) = cut {
            return Err(cut);
        }
        if decision.score == Score::INFINITY {
            break;
        }
    }
    Ok(())
}

fn max_value<S, E>(ctx: &mut SearchContext<'_, E>, state: &S, depth: u32) -> Result<Score, Timeout>
where
    S: GameState,
    E: Evaluator<S>,
{
    ctx.enter()?;
    if let Some(utility) = ctx.terminal(state) {
        return Ok(utility);
    }
    let moves = state.legal_moves(state.active_player());
    if moves.is_empty() || depth == 0 {
        return Ok(ctx.evaluate(state));
    }

    let mut best: Option<Score> = None;
    for mv in moves {
        let Some(child) = ctx.forecast(state, mv) else {
            continue;
        };
        match min_value(ctx, &child, depth - 1) {
            Ok(score) => best = Some(best.map_or(score, |b| b.max(score))),
            Err(cut) => return Err(cut.fold(best, Score::max)),
        }
    }
    Ok(best.unwrap_or(Score::NEG_INFINITY))
}

fn min_value<S, E>(ctx: &mut SearchContext<'_, E>, state: &S, depth: u32) -> Result<Score, Timeout>
where
    S: GameState,
    E: Evaluator<S>,
{
    ctx.enter()?;
    if let Some(utility) = ctx.terminal(state) {
        return Ok(utility);
    }
    let moves = state.legal_moves(state.active_player());
    if moves.is_empty() || depth == 0 {
        return Ok(ctx.evaluate(state));
    }

    let mut best: Option<Score> = None;
    for mv in moves {
        let Some(child) = ctx.forecast(state, mv) else {
            continue;
        };
        match max_value(ctx, &child, depth - 1) {
            Ok(score) => best = Some(best.map_or(score, |b| b.min(score))),
            Err(cut) => return Err(cut.fold(best, Score::min)),
        }
    }
    Ok(best.unwrap_or(Score::INFINITY))
}
