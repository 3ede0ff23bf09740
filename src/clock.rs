//! Source of "today" for birthday calculations.

use chrono::{Local, NaiveDate};

/// Provides the current calendar date.
///
/// Birthday distances are measured in whole calendar days, so only the date
/// matters, never the time of day.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// The local date of the machine running the assistant.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock stuck on one date, for tests and reproducible runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
