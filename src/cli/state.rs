//! Presentation state commands.

use crate::cli::common::{load_state, parse_color_set, parse_theme, print_json, CliResult, CliState};
use crate::models::{ColorSetName, ThemeName};
use crate::presentation::{COLOR_SET_ATTRIBUTE, THEME_ATTRIBUTE};
use clap::{Args, Subcommand};
use serde::Serialize;
use std::time::Instant;

/// Inspect or change the active theme and color set
#[derive(Args, Debug)]
pub struct StateArgs {
    #[command(subcommand)]
    command: StateCommand,
}

#[derive(Subcommand, Debug)]
enum StateCommand {
    /// Display the active theme and color set
    Show(StateShowArgs),
    /// Set the active theme
    SetTheme(SetThemeArgs),
    /// Set the active color set ("none" clears it)
    SetColorSet(SetColorSetArgs),
    /// Select a color set, or clear it if it is already active
    ToggleColorSet(ToggleColorSetArgs),
}

/// Display the active theme and color set
#[derive(Args, Debug)]
pub struct StateShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set the active theme
#[derive(Args, Debug)]
pub struct SetThemeArgs {
    /// Theme name
    #[arg(value_name = "THEME")]
    theme: String,
}

/// Set the active color set
#[derive(Args, Debug)]
pub struct SetColorSetArgs {
    /// Color set name, or "none"
    #[arg(value_name = "SET")]
    color_set: String,
}

/// Toggle a color set
#[derive(Args, Debug)]
pub struct ToggleColorSetArgs {
    /// Color set name
    #[arg(value_name = "SET")]
    color_set: String,
}

#[derive(Serialize, Debug)]
struct StateOutput {
    theme: ThemeName,
    #[serde(rename = "colorSet")]
    color_set: Option<ColorSetName>,
    #[serde(rename = "stateFile")]
    state_file: String,
    root: RootOutput,
}

#[derive(Serialize, Debug)]
struct RootOutput {
    attributes: Vec<(String, String)>,
    classes: Vec<String>,
}

impl StateArgs {
    /// Execute state subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            StateCommand::Show(args) => args.execute(),
            StateCommand::SetTheme(args) => args.execute(),
            StateCommand::SetColorSet(args) => args.execute(),
            StateCommand::ToggleColorSet(args) => args.execute(),
        }
    }
}

impl StateShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let state = load_state()?;

        if self.json {
            return print_json(&state_output(&state));
        }

        println!("Theme:     {}", state.active_theme());
        println!(
            "Color set: {}",
            state
                .active_color_set()
                .map_or("(none)", ColorSetName::as_str)
        );
        println!("State file: {}", state.store().path().display());
        Ok(())
    }
}

impl SetThemeArgs {
    /// Execute set-theme command
    pub fn execute(&self) -> CliResult<()> {
        let theme = parse_theme(&self.theme)?;
        let mut state = load_state()?;
        state.set_theme(theme);
        println!("Theme set to '{theme}'.");
        Ok(())
    }
}

impl SetColorSetArgs {
    /// Execute set-color-set command
    pub fn execute(&self) -> CliResult<()> {
        let color_set = match self.color_set.as_str() {
            "none" => None,
            set => Some(parse_color_set(set)?),
        };
        let mut state = load_state()?;
        state.set_color_set(color_set);
        flush_deferred(&mut state);
        print_color_set(color_set);
        Ok(())
    }
}

impl ToggleColorSetArgs {
    /// Execute toggle-color-set command
    pub fn execute(&self) -> CliResult<()> {
        let color_set = parse_color_set(&self.color_set)?;
        let mut state = load_state()?;
        let active = state.toggle_color_set(color_set);
        flush_deferred(&mut state);
        print_color_set(active);
        Ok(())
    }
}

/// A one-shot process has no event loop, so pending re-render requests are
/// fired before exit.
fn flush_deferred(state: &mut CliState) {
    state.run_deferred(Instant::now() + state.rerender_delay());
}

fn print_color_set(color_set: Option<ColorSetName>) {
    match color_set {
        Some(set) => println!("Color set set to '{set}'."),
        None => println!("Color set cleared."),
    }
}

fn state_output(state: &CliState) -> StateOutput {
    let root = state.mirror();
    StateOutput {
        theme: state.active_theme(),
        color_set: state.active_color_set(),
        state_file: state.store().path().to_string_lossy().to_string(),
        root: RootOutput {
            attributes: [THEME_ATTRIBUTE, COLOR_SET_ATTRIBUTE]
                .iter()
                .filter_map(|name| {
                    root.attribute(name)
                        .map(|value| ((*name).to_string(), value.to_string()))
                })
                .collect(),
            classes: root.classes().map(str::to_string).collect(),
        },
    }
}
