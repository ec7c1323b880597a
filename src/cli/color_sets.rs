//! Color set catalog command.

use crate::catalog::color_catalog;
use crate::cli::common::{load_state, parse_color_set, parse_theme, print_json, CliResult};
use crate::models::{ColorSequence, ColorSetName, ThemeName};
use clap::Args;
use serde::Serialize;
use tracing::warn;

/// List the color sets of a theme
#[derive(Debug, Clone, Args)]
pub struct ColorSetsArgs {
    /// Theme to list (defaults to the active theme)
    #[arg(long, value_name = "THEME")]
    pub theme: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Copy the colors of this set to the clipboard
    #[arg(long, value_name = "SET")]
    pub copy: Option<String>,
}

#[derive(Serialize, Debug)]
struct CatalogOutput {
    theme: ThemeName,
    #[serde(rename = "activeColorSet")]
    active_color_set: Option<ColorSetName>,
    #[serde(rename = "colorSets")]
    color_sets: Vec<CatalogEntry>,
}

#[derive(Serialize, Debug)]
struct CatalogEntry {
    name: ColorSetName,
    label: &'static str,
    colors: ColorSequence,
}

impl ColorSetsArgs {
    /// Execute color-sets command
    pub fn execute(&self) -> CliResult<()> {
        let copy = self.copy.as_deref().map(parse_color_set).transpose()?;
        let state = load_state()?;

        let theme = match &self.theme {
            Some(theme) => parse_theme(theme)?,
            None => state.active_theme(),
        };
        let catalog = if theme == state.active_theme() {
            state.color_catalog()
        } else {
            color_catalog(theme)
        };

        if let Some(set) = copy {
            if let Some((_, colors)) = catalog.iter().find(|(name, _)| *name == set) {
                copy_to_clipboard(&colors.join(", "));
            }
        }

        let output = CatalogOutput {
            theme,
            active_color_set: state.active_color_set(),
            color_sets: catalog
                .into_iter()
                .map(|(name, colors)| CatalogEntry {
                    name,
                    label: name.label(),
                    colors,
                })
                .collect(),
        };

        if self.json {
            return print_json(&output);
        }

        println!("Color sets for theme '{}'", output.theme);
        println!();
        for entry in &output.color_sets {
            let marker = if output.active_color_set == Some(entry.name) {
                "*"
            } else {
                " "
            };
            println!("{marker} {:<12} {}", entry.name.as_str(), entry.label);
            println!("    {}", entry.colors.join(" "));
        }
        Ok(())
    }
}

/// Clipboard failures are logged and never fail the command.
#[cfg(feature = "clipboard")]
fn copy_to_clipboard(text: &str) {
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
        Ok(()) => tracing::info!("Color set copied to clipboard"),
        Err(e) => warn!("Failed to copy to clipboard: {e}"),
    }
}

#[cfg(not(feature = "clipboard"))]
fn copy_to_clipboard(_text: &str) {
    warn!("Clipboard support is disabled in this build");
}
