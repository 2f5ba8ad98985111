//! Wall-clock sources for the gate.

use chrono::{Local, NaiveDateTime};

/// Source of the current local wall-clock time.
pub trait Clock: Send + Sync {
    /// Current local date and time.
    fn now(&self) -> NaiveDateTime;
}

/// Reads the host clock.
///
/// Uses the process's local time zone (`TZ` or the system setting), so the
/// same instant can be admitted in one region and rejected in another.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
