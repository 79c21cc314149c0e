//! Evaluation time
//!
//! A sign rule is checked against a weekday plus a decimal hour-of-day.
//! Callers pass the moment explicitly so the interpreter stays pure and
//! tests can pin arbitrary times.

use chrono::{DateTime, Datelike, TimeZone, Timelike, Weekday};

/// Upper-case English weekday names, Sunday first, as they appear on signs
pub const DAY_NAMES: [&str; 7] = [
    "SUNDAY",
    "MONDAY",
    "TUESDAY",
    "WEDNESDAY",
    "THURSDAY",
    "FRIDAY",
    "SATURDAY",
];

/// The moment a rule is evaluated against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationTime {
    pub day: Weekday,
    /// Decimal hour-of-day in [0, 24), e.g. 14.5 for 2:30 PM
    pub hour: f64,
}

impl EvaluationTime {
    pub fn new(day: Weekday, hour: f64) -> Self {
        Self { day, hour }
    }

    /// Derive the weekday and fractional hour from a datetime
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        Self {
            day: dt.weekday(),
            hour: dt.hour() as f64 + dt.minute() as f64 / 60.0,
        }
    }

    /// The sign-text spelling of this weekday ("SUNDAY".."SATURDAY")
    pub fn day_name(&self) -> &'static str {
        DAY_NAMES[self.day.num_days_from_sunday() as usize]
    }
}
