//! CLI command handlers for chart-themes.
//!
//! This module provides headless, scriptable access to theme resolution,
//! chart spec annotation and the persisted presentation state.

pub mod annotate;
pub mod color_sets;
pub mod common;
pub mod config;
pub mod resolve;
pub mod state;
pub mod themes;

// Re-export types used by main.rs and tests
pub use annotate::{AnnotateArgs, AnnotateMode};
pub use color_sets::ColorSetsArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use resolve::ResolveArgs;
pub use state::StateArgs;
pub use themes::ThemesArgs;
