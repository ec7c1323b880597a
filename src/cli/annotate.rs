//! Chart spec annotation command.

use crate::annotator::{annotate, annotate_with_color_set, force_annotate};
use crate::cli::common::{load_state, parse_color_set, parse_theme, print_json, CliError, CliResult};
use crate::constants::APP_BINARY_NAME;
use crate::resolver::resolve;
use clap::{Args, ValueEnum};
use serde_json::Value;
use std::io::Read;
use std::path::PathBuf;
use tracing::debug;

/// How the theme is applied to the chart spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum AnnotateMode {
    /// Theme sub-records win field by field, caller fields fill the rest
    #[default]
    Merge,
    /// Overwrite the color range and mark color
    Force,
    /// Apply a specific color set's range
    ColorSet,
}

/// Apply the theme to a chart spec and print the result
#[derive(Debug, Clone, Args)]
pub struct AnnotateArgs {
    /// Chart spec file (JSON or JSON5), or "-" for stdin
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Merge mode
    #[arg(long, value_enum, default_value_t = AnnotateMode::Merge)]
    pub mode: AnnotateMode,

    /// Theme (defaults to the active theme)
    #[arg(long, value_name = "THEME")]
    pub theme: Option<String>,

    /// Color set (defaults to the active color set; required for color-set mode
    /// when none is active)
    #[arg(long, value_name = "SET")]
    pub color_set: Option<String>,
}

impl AnnotateArgs {
    /// Execute annotate command
    pub fn execute(&self) -> CliResult<()> {
        let spec = self.read_spec()?;
        let state = load_state()?;

        let theme = match &self.theme {
            Some(theme) => parse_theme(theme)?,
            None => state.active_theme(),
        };
        let color_set = match &self.color_set {
            Some(set) => Some(parse_color_set(set)?),
            None => state.active_color_set(),
        };

        debug!(mode = ?self.mode, theme = %theme, "Annotating chart spec");
        let annotated = match self.mode {
            AnnotateMode::Merge => annotate(&spec, &resolve(theme, color_set)),
            AnnotateMode::Force => force_annotate(&spec, &resolve(theme, color_set)),
            AnnotateMode::ColorSet => {
                let set = color_set.ok_or_else(|| {
                    CliError::validation(format!(
                        "--color-set is required when no color set is active \
                         (or run '{APP_BINARY_NAME} state set-color-set <SET>')"
                    ))
                })?;
                annotate_with_color_set(&spec, theme, set)
            }
        };

        print_json(&annotated)
    }

    fn read_spec(&self) -> CliResult<Value> {
        let content = if self.input.as_os_str() == "-" {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| CliError::io(format!("Failed to read stdin: {e}")))?;
            buffer
        } else {
            std::fs::read_to_string(&self.input).map_err(|e| {
                CliError::io(format!(
                    "Failed to read chart spec {}: {e}",
                    self.input.display()
                ))
            })?
        };

        parse_spec(&content)
    }
}

/// Parses strict JSON, falling back to JSON5 for hand-written specs.
fn parse_spec(content: &str) -> CliResult<Value> {
    serde_json::from_str(content).or_else(|json_err| {
        debug!("Strict JSON parse failed, trying JSON5: {json_err}");
        json5::from_str(content)
            .map_err(|e| CliError::validation(format!("Failed to parse chart spec: {e}")))
    })
}
