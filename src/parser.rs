//! Best-effort timestamp parsing
//!
//! Input strings arrive from heterogeneous sources (log excerpts, pasted
//! tool output, hand-typed values) and vary in separator and fraction
//! conventions. This module tries a fixed, ordered list of candidate
//! formats against the input and returns the first match, remembering the
//! winning format so that a homogeneous stream of inputs parses in O(1)
//! instead of rescanning the whole list every time.
//!
//! A successful parse is either an [`Instant`](ParsedValue::Instant) (a
//! calendar date-time) or a [`Duration`](ParsedValue::Duration) (a bare
//! count of seconds); differencing is only defined between values of the
//! same kind.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::ConvertError;

/// How a candidate rule interprets the input string.
#[derive(Debug, Clone, Copy)]
enum Rule {
    /// Full calendar date plus time of day
    DateTime {
        fmt: &'static str,
        fraction: Option<char>,
    },
    /// Time of day only; the date defaults to 1900-01-01
    TimeOnly { fraction: Option<char> },
    /// The whole string as a floating-point number of seconds
    Seconds,
}

/// A candidate format: its conventional strftime spelling (kept for log
/// output) and the rule that applies it.
struct Candidate {
    label: &'static str,
    rule: Rule,
}

/// Candidate formats in priority order; the first that consumes the whole
/// input wins.
const CANDIDATES: [Candidate; 10] = [
    Candidate {
        label: "%Y-%m-%d %H:%M:%S.%f",
        rule: Rule::DateTime {
            fmt: "%Y-%m-%d %H:%M:%S",
            fraction: Some('.'),
        },
    },
    Candidate {
        label: "%Y-%m-%d %H:%M:%S,%f",
        rule: Rule::DateTime {
            fmt: "%Y-%m-%d %H:%M:%S",
            fraction: Some(','),
        },
    },
    Candidate {
        label: "%Y-%m-%d %H:%M:%S",
        rule: Rule::DateTime {
            fmt: "%Y-%m-%d %H:%M:%S",
            fraction: None,
        },
    },
    Candidate {
        label: "%Y-%m-%d_%H:%M:%S.%f",
        rule: Rule::DateTime {
            fmt: "%Y-%m-%d_%H:%M:%S",
            fraction: Some('.'),
        },
    },
    Candidate {
        label: "%Y-%m-%d_%H:%M:%S,%f",
        rule: Rule::DateTime {
            fmt: "%Y-%m-%d_%H:%M:%S",
            fraction: Some(','),
        },
    },
    Candidate {
        label: "%Y-%m-%d_%H:%M:%S",
        rule: Rule::DateTime {
            fmt: "%Y-%m-%d_%H:%M:%S",
            fraction: None,
        },
    },
    Candidate {
        label: "%H:%M:%S",
        rule: Rule::TimeOnly { fraction: None },
    },
    Candidate {
        label: "%H:%M:%S,%f",
        rule: Rule::TimeOnly { fraction: Some(',') },
    },
    Candidate {
        label: "%H:%M:%S.%f",
        rule: Rule::TimeOnly { fraction: Some('.') },
    },
    Candidate {
        label: "seconds",
        rule: Rule::Seconds,
    },
];

/// Result of a successful parse
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedValue {
    /// A calendar date-time with microsecond precision, no timezone
    Instant(NaiveDateTime),
    /// A signed elapsed time in seconds
    Duration(f64),
}

/// Multi-format timestamp parser with a last-successful-format cache.
///
/// The cache is an amortization for homogeneous input streams, not a
/// correctness requirement: a cache miss always falls back to the full
/// candidate scan, so the result is the same as if every call scanned the
/// list. One instance per caller; there is no shared state.
#[derive(Debug, Default)]
pub struct TimestampParser {
    /// Index of the last candidate that matched
    last_matched: Option<usize>,
    /// Number of full candidate-list scans performed
    scans: usize,
}

impl TimestampParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a timestamp string against the candidate formats.
    ///
    /// The most recently successful format is tried first; on a miss the
    /// full list is scanned in order and the first match re-arms the cache.
    ///
    /// # Arguments
    /// * `text` - Input string
    ///
    /// # Returns
    /// * `Result<ParsedValue, ConvertError>` - Parsed instant or duration,
    ///   or `ConvertError::Unparseable` when no candidate matches
    pub fn parse(&mut self, text: &str) -> Result<ParsedValue, ConvertError> {
        if let Some(index) = self.last_matched {
            if let Some(value) = apply(&CANDIDATES[index], text) {
                log::debug!("hit the cache for '{}' ({})", text, CANDIDATES[index].label);
                return Ok(value);
            }
        }

        self.scans += 1;
        log::debug!("search format for '{}'", text);
        for (index, candidate) in CANDIDATES.iter().enumerate() {
            if let Some(value) = apply(candidate, text) {
                self.last_matched = Some(index);
                return Ok(value);
            }
        }

        Err(ConvertError::Unparseable(text.to_string()))
    }

    /// Signed difference in seconds between two timestamp strings.
    ///
    /// Both arguments are parsed independently, so the format cache may
    /// shift between the two calls. The result is second minus first,
    /// positive when the second is later (or larger).
    ///
    /// # Returns
    /// * `Result<f64, ConvertError>` - `ConvertError::Unparseable` when
    ///   either side fails to parse, `ConvertError::MixedKindComparison`
    ///   when one side is an instant and the other a duration
    pub fn difference(&mut self, text_a: &str, text_b: &str) -> Result<f64, ConvertError> {
        let a = self.parse(text_a)?;
        let b = self.parse(text_b)?;

        match (a, b) {
            (ParsedValue::Instant(a), ParsedValue::Instant(b)) => {
                let micros = (b - a).num_microseconds().ok_or_else(|| {
                    ConvertError::OutOfRange(format!("span between '{}' and '{}'", text_a, text_b))
                })?;
                Ok(micros as f64 / 1_000_000.0)
            }
            (ParsedValue::Duration(a), ParsedValue::Duration(b)) => Ok(b - a),
            _ => Err(ConvertError::MixedKindComparison),
        }
    }

    /// Strftime spelling of the cached format, if any
    pub fn last_format(&self) -> Option<&'static str> {
        self.last_matched.map(|index| CANDIDATES[index].label)
    }

    /// Number of full candidate scans performed; cache hits don't count
    pub fn scan_count(&self) -> usize {
        self.scans
    }
}

/// Apply one candidate to the input, `None` when it doesn't match.
fn apply(candidate: &Candidate, text: &str) -> Option<ParsedValue> {
    match candidate.rule {
        Rule::DateTime { fmt, fraction } => {
            let (head, micros) = split_fraction(text, fraction)?;
            let dt = NaiveDateTime::parse_from_str(head, fmt).ok()?;
            // chrono encodes a parsed :60 as nanosecond overflow; the rule
            // set has no leap seconds
            if dt.nanosecond() >= 1_000_000_000 {
                return None;
            }
            let dt = dt.checked_add_signed(chrono::Duration::microseconds(micros))?;
            Some(ParsedValue::Instant(dt))
        }
        Rule::TimeOnly { fraction } => {
            let (head, micros) = split_fraction(text, fraction)?;
            let time = NaiveTime::parse_from_str(head, "%H:%M:%S").ok()?;
            if time.nanosecond() >= 1_000_000_000 {
                return None;
            }
            let base = NaiveDate::from_ymd_opt(1900, 1, 1)?.and_time(time);
            let dt = base.checked_add_signed(chrono::Duration::microseconds(micros))?;
            Some(ParsedValue::Instant(dt))
        }
        Rule::Seconds => {
            let seconds: f64 = text.trim().parse().ok()?;
            if !seconds.is_finite() {
                return None;
            }
            // Durations carry microsecond precision, same as instants
            let scaled = seconds * 1_000_000.0;
            if !scaled.is_finite() {
                // Out here f64 spacing dwarfs the grid; rounding is an identity
                return Some(ParsedValue::Duration(seconds));
            }
            Some(ParsedValue::Duration(scaled.round() / 1_000_000.0))
        }
    }
}

/// Split a trailing fraction field off the input.
///
/// With a delimiter, the input must end in the delimiter followed by 1-6
/// digits; the digits are right-padded to a microsecond count (".5" is
/// 500000 µs, not 5 µs). Without one, the input passes through whole.
fn split_fraction(text: &str, delimiter: Option<char>) -> Option<(&str, i64)> {
    let delimiter = match delimiter {
        Some(d) => d,
        None => return Some((text, 0)),
    };

    let (head, digits) = text.rsplit_once(delimiter)?;
    if digits.is_empty() || digits.len() > 6 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let micros: i64 = digits.parse().ok()?;
    Some((head, micros * 10_i64.pow(6 - digits.len() as u32)))
}
