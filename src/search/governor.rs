//! Deadline checks for in-flight searches.
//!
//! The caller hands a searcher a `TimeLeft` query. Every recursive entry
//! point asks the `Governor` before doing any work; once the remaining
//! time is at or below the configured threshold the governor returns
//! `Err(Timeout)` and every enclosing frame unwinds with `?` up to the
//! public `decide` call, which turns it into the best answer known so far.

use std::time::{Duration, Instant};

use thiserror::Error;

use crate::core::Score;

/// Remaining decision time, in the same unit as the timeout threshold.
pub trait TimeLeft {
    fn time_left(&self) -> f64;
}

impl<F> TimeLeft for F
where
    F: Fn() -> f64,
{
    fn time_left(&self) -> f64 {
        self()
    }
}

/// Wall-clock deadline reporting milliseconds left.
#[derive(Clone, Copy, Debug)]
pub struct Deadline {
    start: Instant,
    budget: Duration,
}

impl Deadline {
    /// A deadline `budget` from now.
    #[must_use]
    pub fn after(budget: Duration) -> Self {
        Self {
            start: Instant::now(),
            budget,
        }
    }

    /// A deadline `millis` milliseconds from now.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self::after(Duration::from_millis(millis))
    }
}

impl TimeLeft for Deadline {
    fn time_left(&self) -> f64 {
        (self.budget.as_secs_f64() - self.start.elapsed().as_secs_f64()) * 1000.0
    }
}

/// A clock that never runs out. Searches bounded only by depth.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDeadline;

impl TimeLeft for NoDeadline {
    fn time_left(&self) -> f64 {
        f64::INFINITY
    }
}

/// The search ran out of time.
///
/// Minimax frames attach the best value they had settled before the
/// abort; alpha-beta frames never do.
#[derive(Error, Debug, Clone, Copy, PartialEq, Default)]
#[error("search deadline reached")]
pub struct Timeout {
    partial: Option<Score>,
}

impl Timeout {
    /// Best value the aborted frame had settled, if any.
    #[must_use]
    pub fn partial(&self) -> Option<Score> {
        self.partial
    }

    /// Merge this frame's settled value into the signal on its way up.
    pub(crate) fn fold(self, settled: Option<Score>, pick: fn(Score, Score) -> Score) -> Self {
        let partial = match (settled, self.partial) {
            (Some(a), Some(b)) => Some(pick(a, b)),
            (a, b) => a.or(b),
        };
        Self { partial }
    }
}

/// Compares the time left against the threshold.
pub(crate) struct Governor<'a> {
    clock: &'a dyn TimeLeft,
    threshold: f64,
}

impl<'a> Governor<'a> {
    pub(crate) fn new(clock: &'a dyn TimeLeft, threshold: f64) -> Self {
        Self { clock, threshold }
    }

    pub(crate) fn check(&self) -> Result<(), Timeout> {
        if self.clock.time_left() <= self.threshold {
            Err(Timeout::default())
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_governor_trips_at_threshold() {
        let plenty = || 50.0;
        let exact = || 10.0;
        let below = || 3.0;

        assert!(Governor::new(&plenty, 10.0).check().is_ok());
        assert_eq!(Governor::new(&exact, 10.0).check(), Err(Timeout::default()));
        assert!(Governor::new(&below, 10.0).check().is_err());
        assert!(Governor::new(&NoDeadline, 10.0).check().is_ok());
    }

    #[test]
    fn test_deadline_counts_down() {
        let deadline = Deadline::from_millis(60_000);
        let left = deadline.time_left();
        assert!(left <= 60_000.0 && left > 59_000.0);

        let expired = Deadline::after(Duration::ZERO);
        assert!(expired.time_left() <= 0.0);
    }

    #[test]
    fn test_timeout_fold() {
        let empty = Timeout::default();
        assert_eq!(empty.fold(None, Score::max).partial(), None);
        assert_eq!(empty.fold(Some(2.0), Score::max).partial(), Some(2.0));

        let child = Timeout::default().fold(Some(5.0), Score::min);
        assert_eq!(child.fold(None, Score::max).partial(), Some(5.0));
        assert_eq!(child.fold(Some(7.0), Score::max).partial(), Some(7.0));
        assert_eq!(child.fold(Some(7.0), Score::min).partial(), Some(5.0));
    }

    #[test]
    fn test_timeout_message() {
        assert_eq!(Timeout::default().to_string(), "search deadline reached");
    }
}
