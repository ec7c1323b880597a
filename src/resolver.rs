//! Theme resolution.
//!
//! Composes a theme's native configuration with an optional semantic color
//! set. An active color set always replaces the category and ordinal ranges
//! and the default mark color; axis, legend, title and view styling stay
//! theme-native.

use anyhow::Result;
use tracing::debug;

use crate::catalog::{color_set, theme_config};
use crate::models::{ColorSetName, ThemeConfig, ThemeName};

/// Resolves the configuration for a theme and optional color set.
///
/// Pure: the result depends only on the arguments and is freshly built on
/// every call.
#[must_use]
pub fn resolve(theme: ThemeName, color_set_name: Option<ColorSetName>) -> ThemeConfig {
    let mut config = theme_config(theme);

    let Some(set) = color_set_name else {
        debug!(theme = %theme, "Resolved native theme");
        return config;
    };

    let colors = color_set(theme, set);
    config.mark.color = colors.first().cloned();
    config.range.ordinal = Some(colors.clone());
    config.range.category = colors;

    debug!(theme = %theme, color_set = %set, "Resolved theme with color set override");
    config
}

/// Resolves from string tags, as received from a UI or command line.
///
/// # Errors
///
/// Returns an error if either tag does not name a known theme or color set.
pub fn resolve_named(theme: &str, color_set_name: Option<&str>) -> Result<ThemeConfig> {
    let theme: ThemeName = theme.parse()?;
    let set = color_set_name.map(str::parse::<ColorSetName>).transpose()?;
    Ok(resolve(theme, set))
}
