//! Configuration management for Timecalc
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{CONFIG_GENERATED, DEFAULT_TIMESTAMP_FORMAT};
use crate::epoch::{self, EpochSystem};
use crate::timezone;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub convert: ConvertConfig,
    pub logging: LoggingConfig,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// strftime format used when rendering timestamps as date-time strings
    pub timestamp_format: String,
}

/// Conversion configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Epoch system assumed when none is given on the command line
    /// Options: "unix", "windows"
    pub default_epoch: String,
    /// IANA timezone name for localization (e.g. "Europe/Paris")
    /// Unset means the system local timezone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_timezone: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging
    pub enabled: bool,
    /// Log level: "off", "error", "warn", "info", "debug" or "trace"
    pub level: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            default_epoch: "unix".to_string(),
            default_timezone: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("timecalc.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("timecalc").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate display format
        if let Err(e) = epoch::validate_format(&self.display.timestamp_format) {
            anyhow::bail!("Invalid timestamp_format '{}': {}", self.display.timestamp_format, e);
        }

        // Validate epoch system
        if let Err(e) = self.convert.default_epoch.parse::<EpochSystem>() {
            anyhow::bail!("Invalid default_epoch '{}': {}", self.convert.default_epoch, e);
        }

        // Validate timezone
        if let Some(tz) = &self.convert.default_timezone {
            if let Err(e) = timezone::resolve(Some(tz)) {
                anyhow::bail!("Invalid default_timezone '{}': {}", tz, e);
            }
        }

        // Validate logging level
        if self.logging.level.parse::<log::LevelFilter>().is_err() {
            anyhow::bail!(
                "Invalid logging level '{}': expected off, error, warn, info, debug or trace",
                self.logging.level
            );
        }

        Ok(())
    }

    /// Parsed form of the configured epoch system
    pub fn default_epoch_system(&self) -> Result<EpochSystem> {
        self.convert
            .default_epoch
            .parse()
            .with_context(|| format!("Invalid default_epoch '{}'", self.convert.default_epoch))
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# Timecalc Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("timecalc"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
