//! The admission window rule.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

/// Days and hours during which requests are admitted.
///
/// The hour range is closed-open: `open_hour` is admitted, `close_hour` is not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessWindow {
    days: Vec<Weekday>,
    open_hour: u32,
    close_hour: u32,
}

impl AccessWindow {
    pub fn new(days: Vec<Weekday>, open_hour: u32, close_hour: u32) -> Self {
        Self {
            days,
            open_hour,
            close_hour,
        }
    }

    /// Monday to Friday, 09:00 until 17:00.
    pub fn working_hours() -> Self {
        Self::new(
            vec![
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
            ],
            9,
            17,
        )
    }

    /// Whether a request arriving at `at` may pass.
    pub fn admits(&self, at: NaiveDateTime) -> bool {
        let hour = at.hour();
        self.days.contains(&at.weekday()) && hour >= self.open_hour && hour < self.close_hour
    }

    pub fn days(&self) -> &[Weekday] {
        &self.days
    }

    pub fn open_hour(&self) -> u32 {
        self.open_hour
    }

    pub fn close_hour(&self) -> u32 {
        self.close_hour
    }
}

impl Default for AccessWindow {
    fn default() -> Self {
        Self::working_hours()
    }
}
