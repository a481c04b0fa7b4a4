//! Command-line interface
//!
//! Subcommands cover the conversion surface:
//! - `diff` computes the difference between two timestamps with an
//!   elapsed-time breakdown
//! - `to-date` / `from-date` convert between numeric timestamps and
//!   date-time strings
//! - `now` prints the current moment in both forms
//! - `timezones` lists the accepted timezone names
//! - `init-config` writes a default configuration file

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;

use crate::breakdown::Breakdown;
use crate::config::Config;
use crate::epoch::{self, EpochSystem};
use crate::logger;
use crate::parser::TimestampParser;
use crate::timezone;

#[derive(Parser)]
#[command(name = "timecalc", version, about = "Timestamp conversion and differencing")]
pub struct Cli {
    /// Path to a configuration file (skips the usual discovery order)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log at debug level regardless of configuration
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Difference between two timestamps, second minus first
    Diff {
        /// First timestamp
        first: String,
        /// Second timestamp
        second: String,
    },
    /// Render a numeric timestamp as a date-time string
    ToDate {
        /// Numeric timestamp (Unix seconds or Windows ticks)
        timestamp: String,
        /// Epoch system: unix or windows
        #[arg(short, long)]
        epoch: Option<String>,
        /// IANA timezone to render in (defaults to the system zone)
        #[arg(short, long)]
        timezone: Option<String>,
        /// strftime display format
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Convert a date-time string to a numeric timestamp
    FromDate {
        /// Date-time string
        datetime: String,
        /// Epoch system: unix or windows
        #[arg(short, long)]
        epoch: Option<String>,
        /// IANA timezone the date-time fields are expressed in
        #[arg(short, long)]
        timezone: Option<String>,
    },
    /// Print the current moment in both forms
    Now {
        /// Epoch system: unix or windows
        #[arg(short, long)]
        epoch: Option<String>,
        /// IANA timezone the numeric form is localized to
        #[arg(short, long)]
        timezone: Option<String>,
        /// strftime display format
        #[arg(short, long)]
        format: Option<String>,
    },
    /// List the timezone names accepted by --timezone
    Timezones,
    /// Write a default configuration file
    InitConfig {
        /// Destination path (defaults to the XDG config location)
        path: Option<PathBuf>,
    },
}

/// Dispatch a parsed invocation.
pub fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load()?,
    };

    let level = if cli.verbose {
        LevelFilter::Debug
    } else if config.logging.enabled {
        config.logging.level.parse().unwrap_or(LevelFilter::Info)
    } else {
        LevelFilter::Off
    };
    if level != LevelFilter::Off {
        logger::init(level)?;
    }

    match cli.command {
        Command::Diff { first, second } => diff(&first, &second),
        Command::ToDate {
            timestamp,
            epoch,
            timezone,
            format,
        } => to_date(&config, &timestamp, epoch.as_deref(), timezone.as_deref(), format.as_deref()),
        Command::FromDate {
            datetime,
            epoch,
            timezone,
        } => from_date(&config, &datetime, epoch.as_deref(), timezone.as_deref()),
        Command::Now {
            epoch,
            timezone,
            format,
        } => now(&config, epoch.as_deref(), timezone.as_deref(), format.as_deref()),
        Command::Timezones => {
            for name in timezone::available_timezones() {
                println!("{}", name);
            }
            Ok(())
        }
        Command::InitConfig { path } => init_config(path),
    }
}

fn diff(first: &str, second: &str) -> Result<()> {
    let mut parser = TimestampParser::new();
    let seconds = parser.difference(first, second)?;
    println!("{}", Breakdown::from_seconds(seconds));
    Ok(())
}

fn to_date(
    config: &Config,
    timestamp: &str,
    epoch: Option<&str>,
    tz: Option<&str>,
    format: Option<&str>,
) -> Result<()> {
    let system = resolve_epoch(config, epoch)?;
    let zone = resolve_timezone(config, tz);
    let fmt = resolve_format(config, format);

    let rendered = epoch::convert_to_string(timestamp, system, fmt, zone)?;
    let echoed = epoch::format_numeric(timestamp, system)?;
    println!("timestamp={} => datetime={}", echoed, rendered);
    Ok(())
}

fn from_date(config: &Config, datetime: &str, epoch: Option<&str>, tz: Option<&str>) -> Result<()> {
    let system = resolve_epoch(config, epoch)?;
    let zone = resolve_timezone(config, tz);

    let mut parser = TimestampParser::new();
    let value = epoch::convert_from_string(&mut parser, datetime, system, zone)?;
    println!("timestamp={} <= datetime={}", value.display_string(), datetime);
    Ok(())
}

fn now(config: &Config, epoch: Option<&str>, tz: Option<&str>, format: Option<&str>) -> Result<()> {
    let system = resolve_epoch(config, epoch)?;
    let zone = resolve_timezone(config, tz);
    let fmt = resolve_format(config, format);

    let numeric = epoch::now_numeric(system, zone)?;
    println!("timestamp={}", numeric.display_string());
    println!("datetime={}", epoch::now_string(fmt)?);
    Ok(())
}

fn init_config(path: Option<PathBuf>) -> Result<()> {
    let target = match path {
        Some(path) => path,
        None => Config::get_default_config_path()?,
    };
    Config::generate_default_config(&target)
}

/// Command-line flag wins over configuration, configuration over "unix".
fn resolve_epoch(config: &Config, flag: Option<&str>) -> Result<EpochSystem> {
    match flag {
        Some(name) => Ok(name.parse()?),
        None => config.default_epoch_system(),
    }
}

fn resolve_timezone<'a>(config: &'a Config, flag: Option<&'a str>) -> Option<&'a str> {
    flag.or(config.convert.default_timezone.as_deref())
}

fn resolve_format<'a>(config: &'a Config, flag: Option<&'a str>) -> &'a str {
    flag.unwrap_or(&config.display.timestamp_format)
}
