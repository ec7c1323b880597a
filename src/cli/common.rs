//! Shared CLI plumbing: error type, exit codes and state loading.

use crate::config::Config;
use crate::models::{ColorSetName, ThemeName};
use crate::presentation::{FileStore, PresentationState, RootAttributes};
use serde::Serialize;
use std::fmt;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Invalid input or arguments
    ValidationError = 1,
    /// File system or serialization failure
    IoError = 2,
}

impl ExitCode {
    /// Numeric code passed to the OS.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI command handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code to report
    pub kind: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Invalid user input.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// I/O or serialization failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        self.kind
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI handlers.
pub type CliResult<T> = Result<T, CliError>;

/// State type used by every command: file-backed, mirrored in memory.
pub type CliState = PresentationState<FileStore, RootAttributes>;

/// Loads configuration, failing with a validation error on a bad file.
pub fn load_config() -> CliResult<Config> {
    Config::load().map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
}

/// Loads presentation state from the configured state file.
pub fn load_state() -> CliResult<CliState> {
    let config = load_config()?;
    let store = FileStore::from_config(&config)
        .map_err(|e| CliError::io(format!("Failed to locate state file: {e:#}")))?;
    Ok(PresentationState::load(
        store,
        RootAttributes::new(),
        config.rerender_delay(),
    ))
}

/// Parses a theme argument.
pub fn parse_theme(value: &str) -> CliResult<ThemeName> {
    value
        .parse()
        .map_err(|e: anyhow::Error| CliError::validation(e.to_string()))
}

/// Parses a color set argument.
pub fn parse_color_set(value: &str) -> CliResult<ColorSetName> {
    value
        .parse()
        .map_err(|e: anyhow::Error| CliError::validation(e.to_string()))
}

/// Prints a value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize output to JSON: {e}")))?;
    println!("{json}");
    Ok(())
}
