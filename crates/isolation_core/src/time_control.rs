//! Per-turn time budget shared by agents and the match runner.
//!
//! Engines never own a clock. They receive something implementing
//! [`TimeLeft`] at the start of a turn and query it as often as they like;
//! the reading only ever decreases.

use std::time::{Duration, Instant};

/// Source of "milliseconds left in this turn".
pub trait TimeLeft {
    /// Remaining time in milliseconds. May go negative once the turn is over.
    fn remaining_ms(&self) -> f64;
}

impl<F> TimeLeft for F
where
    F: Fn() -> f64,
{
    fn remaining_ms(&self) -> f64 {
        self()
    }
}

/// Wall-clock turn timer started when it is created.
///
/// The match runner builds a fresh one for every move, so the budget never
/// leaks from one turn into the next.
#[derive(Debug, Clone, Copy)]
pub struct TurnTimer {
    start: Instant,
    limit: Duration,
}

impl TurnTimer {
    /// Start a timer with the given budget.
    pub fn start(limit: Duration) -> Self {
        Self {
            start: Instant::now(),
            limit,
        }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::start(Duration::from_millis(ms))
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }

    /// Get elapsed time since the turn started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// True once the full budget has been used.
    pub fn expired(&self) -> bool {
        self.elapsed() >= self.limit
    }
}

impl TimeLeft for TurnTimer {
    fn remaining_ms(&self) -> f64 {
        self.limit.as_secs_f64() * 1000.0 - self.elapsed().as_secs_f64() * 1000.0
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
