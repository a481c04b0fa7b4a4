//! Error types shared by the parsing and conversion core
//!
//! Every fallible core operation returns a [`ConvertError`]; the binary
//! wraps these in `anyhow` at its boundary. Nothing in the core panics on
//! user input.

/// Errors produced by timestamp parsing and epoch conversion
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Unparseable timestamp: '{0}'")]
    Unparseable(String),

    #[error("Cannot compare an instant with a duration")]
    MixedKindComparison,

    #[error("neither int, float nor str: '{0}'")]
    NonNumericInput(String),

    #[error("Unknown timezone '{0}'")]
    InvalidTimezone(String),

    #[error("Invalid display format '{0}'")]
    InvalidFormat(String),

    #[error("Timestamp out of range: {0}")]
    OutOfRange(String),

    #[error("Local time {0} does not exist in {1}")]
    NonexistentLocalTime(String, String),

    #[error("A duration has no position on the calendar")]
    DurationNotConvertible,

    #[error("Unknown epoch system '{0}' (expected 'unix' or 'windows')")]
    UnknownEpochSystem(String),
}
