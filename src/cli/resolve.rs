//! Theme configuration resolution command.

use crate::cli::common::{load_state, parse_color_set, parse_theme, print_json, CliResult};
use crate::resolver::resolve;
use clap::Args;

/// Print the resolved chart configuration as JSON
#[derive(Debug, Clone, Args)]
pub struct ResolveArgs {
    /// Theme (defaults to the active theme)
    #[arg(long, value_name = "THEME")]
    pub theme: Option<String>,

    /// Color set override (defaults to the active color set; "none" for no override)
    #[arg(long, value_name = "SET")]
    pub color_set: Option<String>,
}

impl ResolveArgs {
    /// Execute resolve command
    pub fn execute(&self) -> CliResult<()> {
        let state = load_state()?;

        let theme = match &self.theme {
            Some(theme) => parse_theme(theme)?,
            None => state.active_theme(),
        };
        let color_set = match self.color_set.as_deref() {
            Some("none") => None,
            Some(set) => Some(parse_color_set(set)?),
            None => state.active_color_set(),
        };

        print_json(&resolve(theme, color_set))
    }
}
