//! Wall-clock access.
//!
//! Projections and countdowns read the time through `Clock` so tests can
//! drive them with tokio's paused time instead of the real clock.

use chrono::{Local, NaiveDateTime};

/// Source of the current local wall-clock time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// The system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock that starts at a fixed time and advances with tokio's clock.
///
/// Under `#[tokio::test(start_paused = true)]` it moves exactly as far as
/// the runtime's auto-advance does.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub(crate) struct TokioClock {
    base: NaiveDateTime,
    origin: tokio::time::Instant,
}

#[cfg(test)]
impl TokioClock {
    pub(crate) fn starting_at(base: NaiveDateTime) -> Self {
        Self {
            base,
            origin: tokio::time::Instant::now(),
        }
    }

    /// Convenience constructor: a fixed test date at the given time of day.
    pub(crate) fn at(hour: u32, minute: u32, second: u32) -> Self {
        let base = chrono::NaiveDate::from_ymd_opt(2024, 3, 15)
            .and_then(|d| d.and_hms_opt(hour, minute, second))
            .expect("valid test time");
        Self::starting_at(base)
    }
}

#[cfg(test)]
impl Clock for TokioClock {
    fn now(&self) -> NaiveDateTime {
        let elapsed = chrono::Duration::from_std(self.origin.elapsed())
            .unwrap_or(chrono::Duration::zero());
        self.base + elapsed
    }
}
