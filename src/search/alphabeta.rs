//! Iterative-deepening alpha-beta.
//!
//! Runs a full alpha-beta search at depth 1, 2, 3, ... until the deadline
//! trips, keeping the move from the last depth that finished. A timed-out
//! iteration is thrown away whole: frames unwind with `?` and nothing they
//! computed reaches the answer.
//!
//! Deepening also stops when an iteration never reached the horizon (every
//! line ended in a decided game, so a deeper pass would repeat the same
//! search) or at the configured `max_depth`.

use std::time::Instant;

use tracing::{debug, debug_span, trace};

use crate::core::{SearchConfig, Score};
use crate::error::ConfigError;
use crate::eval::Evaluator;
use crate::rules::GameState;

use super::context::SearchContext;
use super::governor::{TimeLeft, Timeout};
use super::stats::SearchStats;
use super::{Decision, Searcher};

/// Iterative-deepening alpha-beta searcher.
pub struct AlphaBetaSearcher<E> {
    evaluator: E,
    config: SearchConfig,
    stats: SearchStats,
}

impl<E> AlphaBetaSearcher<E> {
    /// Create a searcher. Fails if the configuration is invalid.
    pub fn new(evaluator: E, config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            evaluator,
            config,
            stats: SearchStats::default(),
        })
    }

    /// Best move found before the deadline, or `None` if the player on move
    /// is stuck.
    pub fn decide<S>(&mut self, state: &S, time_left: &dyn TimeLeft) -> Option<S::Move>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.search(state, time_left).best_move
    }

    /// Deepen until the deadline and report the last completed iteration.
    ///
    /// If not even depth 1 finishes, the first legal move is returned.
    pub fn search<S>(&mut self, state: &S, time_left: &dyn TimeLeft) -> Decision<S::Move>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        let _span = debug_span!("alphabeta").entered();
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

        decision.complete = true;
        for depth in 1..=self.config.depth_cap() {
            ctx.horizon_reached = false;
            let result = ctx.check().and_then(|()| root_search(&mut ctx, state, &moves, depth));
            match result {
                Ok(Some((mv, score))) => {
                    decision.best_move = Some(mv);
                    decision.score = score;
                    decision.depth = depth;
                    ctx.stats.completed_depth = depth;
                    debug!(depth, best = ?mv, score, nodes = ctx.stats.nodes, "iteration complete");
                }
                Ok(None) => break,
                Err(_) => {
                    trace!(depth, "iteration abandoned at deadline");
                    ctx.stats.timed_out = true;
                    decision.complete = false;
                    break;
                }
            }
            if !ctx.horizon_reached {
                debug!(depth, "search tree exhausted");
                break;
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            best = ?decision.best_move,
            score = decision.score,
            depth = decision.depth,
            "alphabeta decided"
        );
        decision
    }

    /// A single alpha-beta pass at a fixed depth (no deepening).
    ///
    /// Returns the same move and score as minimax at that depth, or
    /// `Err(Timeout)` if the deadline trips first.
    pub fn alphabeta<S>(
        &mut self,
        state: &S,
        depth: u32,
        time_left: &dyn TimeLeft,
    ) -> Result<Decision<S::Move>, Timeout>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        let start = Instant::now();
        self.stats.reset();

        let root = state.active_player();
        let moves = state.legal_moves(root);
        let Some(&first) = moves.first() else {
            return Ok(Decision::no_move(state.utility(root)));
        };

        let mut ctx = SearchContext::new(
            &self.evaluator,
            time_left,
            self.config.timeout_threshold,
            root,
            &mut self.stats,
        );
        let result = if depth == 0 {
            ctx.enter().map(|()| None)
        } else {
            root_search(&mut ctx, state, &moves, depth)
        };
        ctx.stats.timed_out = result.is_err();
        self.stats.time_us = start.elapsed().as_micros() as u64;

        let mut decision = Decision::fallback(first);
        if let Some((mv, score)) = result? {
            decision.best_move = Some(mv);
            decision.score = score;
        }
        decision.depth = depth;
        decision.complete = true;
        self.stats.completed_depth = depth;
        Ok(decision)
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

impl<S, E> Searcher<S> for AlphaBetaSearcher<E>
where
    S: GameState,
    E: Evaluator<S>,
{
    fn get_move(&mut self, state: &S, time_left: &dyn TimeLeft) -> Option<S::Move> {
        self.decide(state, time_left)
    }
}

/// Root of one depth-limited pass. `depth` must be at least 1.
///
/// Alpha rises after each root move so later siblings search a narrower
/// window. A later move must score strictly higher to replace the
/// incumbent: a child that failed low may report a bound equal to alpha,
/// which is not its exact value.
fn root_search<S, E>(
    ctx: &mut SearchContext<'_, E>,
    state: &S,
    moves: &[S::Move],
    depth: u32,
) -> Result<Option<(S::Move, Score)>, Timeout>
where
    S: GameState,
    E: Evaluator<S>,
{
    ctx.enter()?;

    let mut alpha = Score::NEG_INFINITY;
    let mut best: Option<(S::Move, Score)> = None;
    for &mv in moves {
        let Some(child) = ctx.forecast(state, mv) else {
            continue;
        };
        let score = min_value(ctx, &child, depth - 1, alpha, Score::INFINITY)?;
        if best.map_or(true, |(_, incumbent)| score > incumbent) {
            best = Some((mv, score));
        }
        alpha = alpha.max(score);
    }
    Ok(best)
}

fn max_value<S, E>(
    ctx: &mut SearchContext<'_, E>,
    state: &S,
    depth: u32,
    mut alpha: Score,
    beta: Score,
) -> Result<Score, Timeout>
where
    S: GameState,
    E: Evaluator<S>,
{
    ctx.enter()?;
    if let Some(utility) = ctx.terminal(state) {
        return Ok(utility);
    }
    let moves = state.legal_moves(state.active_player());
    if moves.is_empty() {
        return Ok(state.utility(ctx.root));
    }
    if depth == 0 {
        return Ok(ctx.evaluate(state));
    }

    let mut score = Score::NEG_INFINITY;
    for mv in moves {
        let Some(child) = ctx.forecast(state, mv) else {
            continue;
        };
        score = score.max(min_value(ctx, &child, depth - 1, alpha, beta)?);
        if score >= beta {
            ctx.stats.cutoffs += 1;
            return Ok(score);
        }
        alpha = alpha.max(score);
    }
    Ok(score)
}

fn min_value<S, E>(
    ctx: &mut SearchContext<'_, E>,
    state: &S,
    depth: u32,
    alpha: Score,
    mut beta: Score,
) -> Result<Score, Timeout>
where
    S: GameState,
    E: Evaluator<S>,
{
    ctx.enter()?;
    if let Some(utility) = ctx.terminal(state) {
        return Ok(utility);
    }
    let moves = state.legal_moves(state.active_player());
    if moves.is_empty() {
        return Ok(state.utility(ctx.root));
    }
    if depth == 0 {
        return Ok(ctx.evaluate(state));
    }

    let mut score = Score::INFINITY;
    for mv in moves {
        let Some(child) = ctx.forecast(state, mv) else {
            continue;
        };
        score = score.min(max_value(ctx, &child, depth - 1, alpha, beta)?);
        if score <= alpha {
            ctx.stats.cutoffs += 1;
            return Ok(score);
        }
        beta = beta.min(score);
    }
    Ok(score)
}
