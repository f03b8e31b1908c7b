//! Per-move time budget.
//!
//! Timing is cooperative: nothing interrupts a strategy that overruns its
//! budget. The match loop samples the clock once the strategy has returned
//! and adjudicates a timeout if the remaining time went negative. Strategies
//! are expected to poll [`MoveTimer::remaining_ms`] and return once it drops
//! under [`TIMER_THRESHOLD_MS`].

use std::time::{Duration, Instant};

/// Safety margin, in milliseconds, a strategy should keep in hand before
/// returning its move.
pub const TIMER_THRESHOLD_MS: i64 = 10;

/// Clock for a single move solicitation.
#[derive(Debug, Clone, Copy)]
pub struct MoveTimer {
    start: Instant,
    limit: Duration,
}

impl MoveTimer {
    /// Start the clock with the given budget.
    pub fn start(limit: Duration) -> Self {
        Self {
            start: Instant::now(),
            limit,
        }
    }

    /// Budget this timer was started with.
    pub fn limit(&self) -> Duration {
        self.limit
    }

    /// Get elapsed time since the solicitation started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Milliseconds left in the budget; negative once the budget is blown.
    pub fn remaining_ms(&self) -> i64 {
        let limit = i64::try_from(self.limit.as_millis()).unwrap_or(i64::MAX);
        let elapsed = i64::try_from(self.elapsed().as_millis()).unwrap_or(i64::MAX);
        limit.saturating_sub(elapsed)
    }

    /// True once the remaining time falls under [`TIMER_THRESHOLD_MS`].
    #[inline]
    pub fn should_stop(&self) -> bool {
        self.remaining_ms() < TIMER_THRESHOLD_MS
    }

    /// True once the budget is exhausted.
    pub fn is_expired(&self) -> bool {
        self.remaining_ms() < 0
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
