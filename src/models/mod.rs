//! Data models for theme names, color sets and resolved configuration.
//!
//! Models are plain data with serde support and no knowledge of storage or
//! presentation state.

pub mod names;
pub mod theme_config;

// Re-export all model types
pub use names::{ColorSetName, ThemeName};
pub use theme_config::{
    sequence, AxisConfig, ColorSequence, FontWeight, LegendConfig, MarkConfig, RangeConfig,
    ThemeConfig, TitleConfig, ViewConfig,
};
