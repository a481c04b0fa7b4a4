//! Constants used throughout the application
//!
//! This module centralizes the default display format, the epoch conversion
//! constants, and the approximate calendar model used for difference
//! breakdowns.

// Display Formats
/// Default display format for date-time strings (microsecond precision)
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

// Epoch Conversion
/// Windows FILETIME epoch: January 1, 1601 (UTC).
/// Difference from Unix epoch (January 1, 1970) in 100-nanosecond intervals.
pub const FILETIME_UNIX_DIFF: i64 = 116444736000000000;
/// Number of 100-nanosecond intervals per second
pub const INTERVALS_PER_SECOND: i64 = 10_000_000;
/// Number of 100-nanosecond intervals per microsecond
pub const INTERVALS_PER_MICRO: i64 = INTERVALS_PER_SECOND / 1_000_000;

// Approximate Calendar Model
/// Days per year assumed by difference breakdowns
pub const APPROX_DAYS_PER_YEAR: f64 = 365.0;
/// Days per month assumed by difference breakdowns
pub const APPROX_DAYS_PER_MONTH: f64 = 30.0;

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
