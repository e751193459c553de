//! Elapsed-time rendering
//!
//! Renders the gap between two instants as the single largest non-zero
//! calendar unit, using 365-day years and 30-day months. Approximate and
//! lossy; not a duration round-trip.

use chrono::{DateTime, Duration, Utc};
use std::fmt;

/// A time gap decomposed into calendar units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elapsed {
    years: i64,
    months: i64,
    days: i64,
    hours: i64,
    minutes: i64,
    seconds: i64,
}

impl Elapsed {
    /// Decompose the gap between `then` and `now`
    ///
    /// Negative gaps (a `then` in the future) collapse to zero.
    pub fn between(then: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let delta = (now - then).max(Duration::zero());

        // whole days first, then the seconds left over inside the last day
        let days = delta.num_days();
        let seconds = delta.num_seconds() - days * 86_400;

        let years = days / 365;
        let days = days % 365;
        let months = days / 30;
        let days = days % 30;

        let hours = seconds / 3600;
        let seconds = seconds % 3600;
        let minutes = seconds / 60;
        let seconds = seconds % 60;

        Self {
            years,
            months,
            days,
            hours,
            minutes,
            seconds,
        }
    }

    /// Render the largest non-zero unit, `"0 seconds"` when the gap is empty
    pub fn humanize(&self) -> String {
        let ladder = [
            (self.years, "year"),
            (self.months, "month"),
            (self.days, "day"),
            (self.hours, "hour"),
            (self.minutes, "minute"),
            (self.seconds, "second"),
        ];

        ladder
            .into_iter()
            .find(|&(magnitude, _)| magnitude > 0)
            .map_or_else(|| "0 seconds".to_string(), |(magnitude, unit)| pluralize(magnitude, unit))
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.humanize())
    }
}

/// Correct singular/plural form of a unit count
pub fn pluralize(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}
