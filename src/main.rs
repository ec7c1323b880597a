//! Chart Themes - theme and color set resolution for Vega-Lite charts
//!
//! Command-line front end: lists themes and color sets, resolves chart
//! configuration, annotates chart specs and manages the persisted state.

use chart_themes::cli::{
    AnnotateArgs, CliError, ColorSetsArgs, ConfigArgs, ExitCode, ResolveArgs, StateArgs,
    ThemesArgs,
};
use chart_themes::config::Config;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Chart Themes - theme and color set resolution for Vega-Lite charts
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List available themes
    Themes(ThemesArgs),
    /// List the color sets of a theme
    ColorSets(ColorSetsArgs),
    /// Print the resolved chart configuration
    Resolve(ResolveArgs),
    /// Apply the theme to a chart spec
    Annotate(AnnotateArgs),
    /// Inspect or change the active theme and color set
    State(StateArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG wins over the configured level
    let filter = if cli.verbose {
        "debug".to_string()
    } else {
        Config::load()
            .map(|config| config.logging.level)
            .unwrap_or_else(|_| "info".to_string())
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match &cli.command {
        Command::Themes(args) => args.execute(),
        Command::ColorSets(args) => args.execute(),
        Command::Resolve(args) => args.execute(),
        Command::Annotate(args) => args.execute(),
        Command::State(args) => args.execute(),
        Command::Config(args) => args.execute(),
    };

    let code = match result {
        Ok(()) => ExitCode::Success,
        Err(CliError { kind, message }) => {
            eprintln!("Error: {message}");
            kind
        }
    };
    std::process::exit(code.code());
}
