//! Configuration management for the theme engine.
//!
//! This module handles loading, validating, and saving engine settings
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "CHART_THEMES_CONFIG_DIR";

/// Upper bound for the deferred re-render delay.
pub const MAX_RERENDER_DELAY_MS: u64 = 1000;

/// Log levels accepted by `logging.level`.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Durable presentation state location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// State file path; `<config_dir>/state.toml` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_file: Option<PathBuf>,
}

/// Change broadcast settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BroadcastConfig {
    /// Delay before the deferred re-render request fires, in milliseconds
    #[serde(default = "default_rerender_delay_ms")]
    pub rerender_delay_ms: u64,
}

fn default_rerender_delay_ms() -> u64 {
    50
}

impl Default for BroadcastConfig {
    fn default() -> Self {
        Self {
            rerender_delay_ms: default_rerender_delay_ms(),
        }
    }
}

/// Logging settings for the binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter level when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Engine configuration.
///
/// # File Location
///
/// - `$CHART_THEMES_CONFIG_DIR/config.toml` when the variable is set
/// - Linux: `~/.config/ChartThemes/config.toml`
/// - macOS: `~/Library/Application Support/ChartThemes/config.toml`
/// - Windows: `%APPDATA%\ChartThemes\config.toml`
///
/// # Validation
///
/// - `broadcast.rerender_delay_ms` must not exceed 1000
/// - `logging.level` must be one of trace, debug, info, warn, error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Durable state storage
    #[serde(default)]
    pub storage: StorageConfig,
    /// Change broadcast
    #[serde(default)]
    pub broadcast: BroadcastConfig,
    /// Logging
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the config directory path.
    ///
    /// Honors `CHART_THEMES_CONFIG_DIR`, otherwise the platform config
    /// directory joined with `ChartThemes`.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("ChartThemes");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Gets the path of the durable presentation state file.
    pub fn state_file_path(&self) -> Result<PathBuf> {
        match &self.storage.state_file {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join("state.toml")),
        }
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate().context(format!(
            "Invalid config file: {}",
            config_path.display()
        ))?;

        Ok(config)
    }

    /// Saves configuration to the config file.
    ///
    /// Uses atomic write (temp file + rename) to prevent corruption.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first out-of-range value.
    pub fn validate(&self) -> Result<()> {
        if self.broadcast.rerender_delay_ms > MAX_RERENDER_DELAY_MS {
            anyhow::bail!(
                "Re-render delay {}ms exceeds the maximum of {}ms",
                self.broadcast.rerender_delay_ms,
                MAX_RERENDER_DELAY_MS
            );
        }

        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            anyhow::bail!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            );
        }

        Ok(())
    }

    /// Delay before the deferred re-render request fires.
    #[must_use]
    pub const fn rerender_delay(&self) -> Duration {
        Duration::from_millis(self.broadcast.rerender_delay_ms)
    }
}
