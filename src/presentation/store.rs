//! Durable storage for the active theme and color set.
//!
//! Two entries are kept: the theme tag and the optional color set tag. Values
//! are stored as raw strings and validated by the presentation state on load,
//! so a hand-edited or outdated file never prevents startup.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::models::{ColorSetName, ThemeName};

/// Raw persisted entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredPresentation {
    /// Theme tag, if one was saved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    /// Color set tag, absent when no color set is active
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_set: Option<String>,
}

/// Key-value persistence for presentation state.
pub trait StateStore {
    /// Reads both entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage exists but cannot be read.
    fn load(&self) -> Result<StoredPresentation>;

    /// Persists the theme entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails (storage full, disabled, read-only).
    fn save_theme(&mut self, theme: ThemeName) -> Result<()>;

    /// Persists the color set entry, clearing it for `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn save_color_set(&mut self, color_set: Option<ColorSetName>) -> Result<()>;
}

/// TOML file store.
///
/// # File Location
///
/// Defaults to `state.toml` in the config directory
/// (see [`Config::config_dir`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store backed by the given file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store at the location named by the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform config directory cannot be determined.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.state_file_path()?))
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<StoredPresentation> {
        if !self.path.exists() {
            return Ok(StoredPresentation::default());
        }

        let content = fs::read_to_string(&self.path).context(format!(
            "Failed to read state file: {}",
            self.path.display()
        ))?;

        toml::from_str(&content).context(format!(
            "Failed to parse state file: {}",
            self.path.display()
        ))
    }

    /// Writes via temp file + rename so a crash never leaves a partial file.
    fn write(&self, stored: &StoredPresentation) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).context(format!(
                "Failed to create state directory: {}",
                dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(stored).context("Failed to serialize state")?;
        let temp_path = self.path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp state file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &self.path).context(format!(
            "Failed to rename temp state file to: {}",
            self.path.display()
        ))?;

        Ok(())
    }

    /// Re-reads the file so an entry update never drops the other entry.
    /// An unreadable file is replaced rather than blocking the write.
    fn update(&self, apply: impl FnOnce(&mut StoredPresentation)) -> Result<()> {
        let mut stored = self.read().unwrap_or_default();
        apply(&mut stored);
        self.write(&stored)
    }
}

impl StateStore for FileStore {
    fn load(&self) -> Result<StoredPresentation> {
        self.read()
    }

    fn save_theme(&mut self, theme: ThemeName) -> Result<()> {
        self.update(|stored| stored.theme = Some(theme.as_str().to_string()))
    }

    fn save_color_set(&mut self, color_set: Option<ColorSetName>) -> Result<()> {
        self.update(|stored| stored.color_set = color_set.map(|set| set.as_str().to_string()))
    }
}

/// In-memory store, used by tests and embedders without persistence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: StoredPresentation,
    fail_writes: bool,
    writes: usize,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with raw entries.
    #[must_use]
    pub fn with_entries(theme: Option<&str>, color_set: Option<&str>) -> Self {
        Self {
            entries: StoredPresentation {
                theme: theme.map(str::to_string),
                color_set: color_set.map(str::to_string),
            },
            ..Self::default()
        }
    }

    /// Creates a store whose writes always fail, like a full or disabled
    /// browser storage.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Current raw entries.
    #[must_use]
    pub fn entries(&self) -> &StoredPresentation {
        &self.entries
    }

    /// Number of successful writes.
    #[must_use]
    pub const fn writes(&self) -> usize {
        self.writes
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_writes {
            anyhow::bail!("Storage quota exceeded");
        }
        Ok(())
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Result<StoredPresentation> {
        Ok(self.entries.clone())
    }

    fn save_theme(&mut self, theme: ThemeName) -> Result<()> {
        self.check_writable()?;
        self.entries.theme = Some(theme.as_str().to_string());
        self.writes += 1;
        Ok(())
    }

    fn save_color_set(&mut self, color_set: Option<ColorSetName>) -> Result<()> {
        self.check_writable()?;
        self.entries.color_set = color_set.map(|set| set.as_str().to_string());
        self.writes += 1;
        Ok(())
    }
}
