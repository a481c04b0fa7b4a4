//! Elapsed-time breakdown
//!
//! Splits a signed span of seconds into calendar-flavored magnitudes using
//! fixed approximations (365-day years, 30-day months) and floor division,
//! so negative spans borrow downward instead of truncating toward zero.

use std::fmt;

use crate::constants::{APPROX_DAYS_PER_MONTH, APPROX_DAYS_PER_YEAR};

const SECS_PER_DAY: f64 = 3600.0 * 24.0;

/// A span of seconds decomposed into display magnitudes.
///
/// The `years`/`months`/`days`/`hours`/`minutes`/`seconds` fields are the
/// mixed-radix decomposition used by the composite line; the `total_*`
/// fields each express the whole span in a single unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakdown {
    pub years: f64,
    pub months: f64,
    pub days: f64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub total_months: f64,
    pub total_days: f64,
    pub total_hours: f64,
    pub total_minutes: f64,
    pub total_seconds: f64,
    pub total_microseconds: f64,
}

impl Breakdown {
    /// Decompose a signed span of seconds.
    pub fn from_seconds(secs: f64) -> Self {
        let year_secs = SECS_PER_DAY * APPROX_DAYS_PER_YEAR;
        let month_secs = SECS_PER_DAY * APPROX_DAYS_PER_MONTH;

        let years = secs.div_euclid(year_secs);
        let after_years = secs - years * year_secs;
        let months = after_years.div_euclid(month_secs);
        let days = (after_years - months * month_secs) / SECS_PER_DAY;

        Breakdown {
            years,
            months,
            days,
            hours: secs.div_euclid(3600.0).rem_euclid(24.0) as i64,
            minutes: secs.div_euclid(60.0).rem_euclid(60.0) as i64,
            seconds: secs.rem_euclid(60.0) as i64,
            total_months: years * 12.0 + months,
            total_days: secs / 3600.0 / 24.0,
            total_hours: secs / 3600.0,
            total_minutes: secs / 60.0,
            total_seconds: secs,
            total_microseconds: secs * 1_000_000.0,
        }
    }

    /// One-line summary mixing all magnitudes
    pub fn composite(&self) -> String {
        format!(
            "{:.0} years {:.0} months {:.2} days {} hours {} minutes {} seconds (months counted as 30 days)",
            self.years, self.months, self.days, self.hours, self.minutes, self.seconds
        )
    }
}

impl fmt::Display for Breakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "years: {:.0}", self.years)?;
        writeln!(f, "months: {:.0}", self.total_months)?;
        writeln!(f, "days: {:.2}", self.total_days)?;
        writeln!(f, "hours: {:.2}", self.total_hours)?;
        writeln!(f, "minutes: {:.2}", self.total_minutes)?;
        writeln!(f, "seconds: {:.6}", self.total_seconds)?;
        writeln!(f, "microseconds: {:.0}", self.total_microseconds)?;
        write!(f, "elapsed: {}", self.composite())
    }
}
