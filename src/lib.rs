//! Chart Themes Library
//!
//! This library resolves the active theme and color set into a Vega-Lite
//! configuration, merges that configuration into chart specs, and keeps the
//! process-wide presentation state that chart renderers subscribe to.

// Module declarations
pub mod annotator;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod presentation;
pub mod resolver;

pub use annotator::{annotate, annotate_with_color_set, force_annotate};
pub use catalog::{color_catalog, color_set, theme_config};
pub use models::{ColorSequence, ColorSetName, ThemeConfig, ThemeName};
pub use presentation::{PresentationEvent, PresentationSnapshot, PresentationState};
pub use resolver::resolve;
