//! Epoch timestamp conversions
//!
//! Converts between numeric timestamps and formatted date-time strings in
//! both directions, with optional timezone localization. Two epoch systems
//! are supported:
//!
//! * **Unix** - seconds since 1970-01-01T00:00:00Z, fractional
//! * **Windows FILETIME** - 100-nanosecond intervals ("ticks") since
//!   1601-01-01T00:00:00Z, integral
//!
//! Tick arithmetic stays in integers end to end: current FILETIME values
//! exceed the 2^53 range where f64 is exact, so a float intermediate would
//! corrupt the low ticks. Microsecond-representable ticks survive a string
//! round-trip unchanged.

use std::fmt;
use std::str::FromStr;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

use crate::constants::{FILETIME_UNIX_DIFF, INTERVALS_PER_MICRO};
use crate::error::ConvertError;
use crate::parser::{ParsedValue, TimestampParser};
use crate::timezone;

/// Which numeric timestamp representation is in play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpochSystem {
    /// Seconds since 1970-01-01T00:00:00Z
    Unix,
    /// 100-nanosecond intervals since 1601-01-01T00:00:00Z
    Windows,
}

impl FromStr for EpochSystem {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("unix") {
            Ok(EpochSystem::Unix)
        } else if s.eq_ignore_ascii_case("windows") {
            Ok(EpochSystem::Windows)
        } else {
            Err(ConvertError::UnknownEpochSystem(s.to_string()))
        }
    }
}

impl fmt::Display for EpochSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EpochSystem::Unix => write!(f, "Unix"),
            EpochSystem::Windows => write!(f, "Windows"),
        }
    }
}

/// A numeric timestamp tagged with its epoch system
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericTimestamp {
    /// Unix seconds, fractional
    Unix(f64),
    /// FILETIME ticks
    Windows(i64),
}

impl NumericTimestamp {
    /// Parse user-entered numeric text for the given system.
    ///
    /// Windows values are read as integers when possible so large tick
    /// counts keep full precision; decimal or scientific notation falls
    /// back through f64 and rounds to the nearest tick.
    pub fn parse(text: &str, system: EpochSystem) -> Result<Self, ConvertError> {
        let trimmed = text.trim();
        match system {
            EpochSystem::Unix => {
                let secs: f64 = trimmed
                    .parse()
                    .map_err(|_| ConvertError::NonNumericInput(text.to_string()))?;
                Ok(NumericTimestamp::Unix(secs))
            }
            EpochSystem::Windows => {
                if let Ok(ticks) = trimmed.parse::<i64>() {
                    return Ok(NumericTimestamp::Windows(ticks));
                }
                let value: f64 = trimmed
                    .parse()
                    .map_err(|_| ConvertError::NonNumericInput(text.to_string()))?;
                if !value.is_finite() || value < i64::MIN as f64 || value > i64::MAX as f64 {
                    return Err(ConvertError::OutOfRange(format!("{} ticks", text)));
                }
                Ok(NumericTimestamp::Windows(value.round() as i64))
            }
        }
    }

    /// Render for display: six decimal places for Unix, none for Windows
    pub fn display_string(&self) -> String {
        match self {
            NumericTimestamp::Unix(secs) => format!("{:.6}", secs),
            NumericTimestamp::Windows(ticks) => ticks.to_string(),
        }
    }
}

/// Format a Unix timestamp as a date-time string.
///
/// # Arguments
/// * `secs` - Seconds since the Unix epoch; the fractional part is kept to
///   microsecond precision
/// * `fmt` - strftime-style display format
/// * `tz` - Optional IANA timezone name; `None` formats in the system
///   local zone
pub fn unix_to_string(secs: f64, fmt: &str, tz: Option<&str>) -> Result<String, ConvertError> {
    if !secs.is_finite() {
        return Err(ConvertError::OutOfRange(format!("{} seconds", secs)));
    }
    let micros = (secs * 1_000_000.0).round();
    if micros < i64::MIN as f64 || micros > i64::MAX as f64 {
        return Err(ConvertError::OutOfRange(format!("{} seconds", secs)));
    }
    micros_to_string(micros as i64, fmt, tz)
}

/// Format a Windows FILETIME tick count as a date-time string.
///
/// Ticks convert to Unix microseconds first (rounding sub-microsecond
/// ticks to the nearest whole microsecond), then follow the same
/// localization and formatting path as Unix values.
pub fn windows_to_string(ticks: i64, fmt: &str, tz: Option<&str>) -> Result<String, ConvertError> {
    micros_to_string(filetime_to_unix_micros(ticks), fmt, tz)
}

/// Convert a date-time string to a Unix timestamp in seconds.
///
/// When a timezone is given, the parsed wall-clock fields are reinterpreted
/// as already being in that zone; nothing is converted. Duration-kind
/// parses (bare seconds) have no calendar position and are rejected.
pub fn string_to_unix(parser: &mut TimestampParser, text: &str, tz: Option<&str>) -> Result<f64, ConvertError> {
    let micros = string_to_micros(parser, text, tz)?;
    Ok(micros as f64 / 1_000_000.0)
}

/// Convert a date-time string to a Windows FILETIME tick count.
pub fn string_to_windows(parser: &mut TimestampParser, text: &str, tz: Option<&str>) -> Result<i64, ConvertError> {
    let micros = string_to_micros(parser, text, tz)?;
    unix_micros_to_filetime(micros)
}

/// Numeric text in the given system, rendered as a date-time string.
pub fn convert_to_string(text: &str, system: EpochSystem, fmt: &str, tz: Option<&str>) -> Result<String, ConvertError> {
    match NumericTimestamp::parse(text, system)? {
        NumericTimestamp::Unix(secs) => unix_to_string(secs, fmt, tz),
        NumericTimestamp::Windows(ticks) => windows_to_string(ticks, fmt, tz),
    }
}

/// Date-time string, converted to a numeric timestamp in the given system.
pub fn convert_from_string(
    parser: &mut TimestampParser,
    text: &str,
    system: EpochSystem,
    tz: Option<&str>,
) -> Result<NumericTimestamp, ConvertError> {
    match system {
        EpochSystem::Unix => string_to_unix(parser, text, tz).map(NumericTimestamp::Unix),
        EpochSystem::Windows => string_to_windows(parser, text, tz).map(NumericTimestamp::Windows),
    }
}

/// Echo a user-entered numeric value in display form: six decimal places
/// for Unix, none for Windows. Non-numeric text is an error, not a crash.
pub fn format_numeric(text: &str, system: EpochSystem) -> Result<String, ConvertError> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| ConvertError::NonNumericInput(text.to_string()))?;
    Ok(match system {
        EpochSystem::Unix => format!("{:.6}", value),
        EpochSystem::Windows => format!("{:.0}", value),
    })
}

/// Current moment as a date-time string on the system local clock.
pub fn now_string(fmt: &str) -> Result<String, ConvertError> {
    let items = parse_format(fmt)?;
    Ok(Local::now().format_with_items(items.iter()).to_string())
}

/// Current moment as a numeric timestamp.
///
/// With a timezone, the local wall-clock fields are reinterpreted in that
/// zone, mirroring the string-to-numeric path.
pub fn now_numeric(system: EpochSystem, tz: Option<&str>) -> Result<NumericTimestamp, ConvertError> {
    let micros = localize_to_micros(Local::now().naive_local(), tz)?;
    match system {
        EpochSystem::Unix => Ok(NumericTimestamp::Unix(micros as f64 / 1_000_000.0)),
        EpochSystem::Windows => unix_micros_to_filetime(micros).map(NumericTimestamp::Windows),
    }
}

/// Check that a display format contains only known directives.
pub fn validate_format(fmt: &str) -> Result<(), ConvertError> {
    parse_format(fmt).map(|_| ())
}

/// Parse a strftime display format up front; chrono's deferred formatter
/// surfaces unknown directives as a panic at render time.
fn parse_format(fmt: &str) -> Result<Vec<Item<'_>>, ConvertError> {
    let items: Vec<Item> = StrftimeItems::new(fmt).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(ConvertError::InvalidFormat(fmt.to_string()));
    }
    Ok(items)
}

/// Render Unix microseconds in the requested zone (or the system zone).
fn micros_to_string(micros: i64, fmt: &str, tz: Option<&str>) -> Result<String, ConvertError> {
    let zone = timezone::resolve(tz)?;
    let items = parse_format(fmt)?;
    let utc = DateTime::from_timestamp_micros(micros)
        .ok_or_else(|| ConvertError::OutOfRange(format!("{} microseconds", micros)))?;

    Ok(match zone {
        Some(tz) => utc.with_timezone(&tz).format_with_items(items.iter()).to_string(),
        None => utc.with_timezone(&Local).format_with_items(items.iter()).to_string(),
    })
}

/// Interpret a naive date-time in the target zone (or the system zone) and
/// return Unix microseconds.
///
/// Ambiguous local times (DST fold) resolve to the earlier instant;
/// nonexistent ones (DST gap) are an error.
fn localize_to_micros(naive: NaiveDateTime, tz: Option<&str>) -> Result<i64, ConvertError> {
    match timezone::resolve(tz)? {
        Some(zone) => zone
            .from_local_datetime(&naive)
            .earliest()
            .map(|dt| dt.timestamp_micros())
            .ok_or_else(|| ConvertError::NonexistentLocalTime(naive.to_string(), zone.name().to_string())),
        None => Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|dt| dt.timestamp_micros())
            .ok_or_else(|| {
                ConvertError::NonexistentLocalTime(naive.to_string(), "the local timezone".to_string())
            }),
    }
}

fn string_to_micros(parser: &mut TimestampParser, text: &str, tz: Option<&str>) -> Result<i64, ConvertError> {
    match parser.parse(text)? {
        ParsedValue::Instant(naive) => localize_to_micros(naive, tz),
        ParsedValue::Duration(_) => Err(ConvertError::DurationNotConvertible),
    }
}

/// FILETIME ticks to Unix microseconds, half-ticks rounding up.
fn filetime_to_unix_micros(ticks: i64) -> i64 {
    let relative = i128::from(ticks) - i128::from(FILETIME_UNIX_DIFF);
    let mut micros = relative.div_euclid(i128::from(INTERVALS_PER_MICRO));
    if relative.rem_euclid(i128::from(INTERVALS_PER_MICRO)) >= 5 {
        micros += 1;
    }
    micros as i64
}

/// Unix microseconds to FILETIME ticks; errors when the tick count leaves
/// the i64 range.
fn unix_micros_to_filetime(micros: i64) -> Result<i64, ConvertError> {
    let ticks = i128::from(micros) * i128::from(INTERVALS_PER_MICRO) + i128::from(FILETIME_UNIX_DIFF);
    i64::try_from(ticks).map_err(|_| ConvertError::OutOfRange(format!("{} ticks", ticks)))
}
