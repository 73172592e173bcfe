//! Non-decreasing timestamp source for record creation.
//!
//! The wall clock can step backwards (NTP adjustments, VM migration). The
//! [`MonotonicClock`] clamps each reading to the last one it handed out so
//! that timestamps assigned within one process never go back in time.
//! Readings are truncated to microseconds, the finest resolution the
//! Postgres store keeps, so a returned record equals its stored copy.

use std::sync::Mutex;

use chrono::{DateTime, SubsecRound, Utc};

/// Hands out UTC instants that never decrease across calls.
#[derive(Debug, Default)]
pub struct MonotonicClock {
    last: Mutex<Option<DateTime<Utc>>>,
}

impl MonotonicClock {
    /// Creates a clock with no prior reading.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current instant, or the previous one if the wall clock
    /// moved backwards.
    pub fn now(&self) -> DateTime<Utc> {
        self.observe(Utc::now().trunc_subsecs(6))
    }

    /// Clamps `candidate` against the last reading and records the result.
    fn observe(&self, candidate: DateTime<Utc>) -> DateTime<Utc> {
        // A poisoned lock only means another thread panicked mid-compare;
        // the stored instant is still valid.
        let mut last = self
            .last
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let next = match *last {
            Some(prev) if prev > candidate => prev,
            _ => candidate,
        };
        *last = Some(next);
        next
    }
}
