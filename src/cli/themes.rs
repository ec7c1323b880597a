//! Theme listing command.

use crate::cli::common::{load_state, print_json, CliResult};
use crate::models::ThemeName;
use clap::Args;
use serde::Serialize;

/// List available themes
#[derive(Debug, Clone, Args)]
pub struct ThemesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
struct ThemeEntry {
    name: ThemeName,
    active: bool,
    dark: bool,
    css_class: String,
}

impl ThemesArgs {
    /// Execute themes command
    pub fn execute(&self) -> CliResult<()> {
        let active = load_state()?.active_theme();

        let entries: Vec<ThemeEntry> = ThemeName::ALL
            .iter()
            .map(|&name| ThemeEntry {
                name,
                active: name == active,
                dark: name.is_dark(),
                css_class: name.css_class(),
            })
            .collect();

        if self.json {
            return print_json(&entries);
        }

        for entry in &entries {
            let marker = if entry.active { "*" } else { " " };
            println!("{marker} {}", entry.name);
        }
        Ok(())
    }
}
