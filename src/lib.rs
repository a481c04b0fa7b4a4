//! Timecalc - Timestamp conversion and differencing
//!
//! This library converts timestamps between human-readable date-time
//! strings and numeric epoch values (Unix seconds and Windows FILETIME
//! ticks), computes signed differences between free-form timestamp texts,
//! and breaks elapsed spans down into calendar-flavored magnitudes.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`parser`] - Free-form timestamp parsing with a fixed candidate list
//! * [`epoch`] - Unix and Windows FILETIME epoch conversions
//! * [`breakdown`] - Elapsed-time decomposition for display
//! * [`timezone`] - IANA timezone name resolution
//! * [`config`] - Application configuration management
//! * [`cli`] - Command-line interface

/// Elapsed-time decomposition into display magnitudes
pub mod breakdown;

/// Command-line argument parsing and command dispatch
pub mod cli;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Conversions between numeric timestamps and date-time strings
pub mod epoch;

/// Error types shared across the conversion surface
pub mod error;

/// Logging setup for command-line runs
pub mod logger;

/// Free-form timestamp parsing
pub mod parser;

/// IANA timezone name resolution and catalog
pub mod timezone;

// Re-export the core types for convenient access
pub use breakdown::Breakdown;
pub use epoch::{EpochSystem, NumericTimestamp};
pub use error::ConvertError;
pub use parser::{ParsedValue, TimestampParser};
