//! Configuration management for daterange
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{APP_NAME, CONFIG_FILE_NAME, MAX_MONTH_COUNT};
use crate::picker::PickerMode;
use crate::utils::datetime::{self, DEFAULT_DATE_FORMAT};
use anyhow::{Context, Result};
use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub picker: PickerConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Picker behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// "single" or "range"
    pub mode: PickerMode,
    /// Number of months shown side by side in the popover
    pub month_count: usize,
    /// chrono pattern used for typed text and picked dates
    pub date_format: String,
    /// First column of the month grid, e.g. "sunday" or "monday"
    pub week_start: String,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable mouse support
    pub mouse_enabled: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write a log file under the user cache directory
    pub enabled: bool,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            mode: PickerMode::Range,
            month_count: 2,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            week_start: "sunday".to_string(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { mouse_enabled: true }
    }
}

impl PickerConfig {
    /// Parsed week start, Sunday when the name is not recognized
    pub fn week_start(&self) -> Weekday {
        datetime::parse_weekday(&self.week_start).unwrap_or(Weekday::Sun)
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            log::info!("Loading configuration from {}", path.display());
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
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Ok(xdg_config) = Self::get_default_config_path() {
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.picker.month_count > MAX_MONTH_COUNT {
            anyhow::bail!(
                "month_count must be between 0 and {}, got {}",
                MAX_MONTH_COUNT,
                self.picker.month_count
            );
        }

        if datetime::parse_weekday(&self.picker.week_start).is_none() {
            anyhow::bail!("Invalid week_start '{}'", self.picker.week_start);
        }

        // The pattern must both format and parse back a sample date
        let sample = NaiveDate::from_ymd_opt(2025, 1, 31).context("Invalid sample date")?;
        let mut formatted = String::new();
        if std::fmt::write(&mut formatted, format_args!("{}", sample.format(&self.picker.date_format))).is_err() {
            anyhow::bail!("Invalid date_format '{}'", self.picker.date_format);
        }
        match NaiveDate::parse_from_str(&formatted, &self.picker.date_format) {
            Ok(parsed) if parsed == sample => {}
            Ok(_) => anyhow::bail!(
                "date_format '{}' does not identify a single day",
                self.picker.date_format
            ),
            Err(e) => anyhow::bail!("Invalid date_format '{}': {}", self.picker.date_format, e),
        }

        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
