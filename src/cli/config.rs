//! Configuration management CLI commands.

use crate::cli::common::{load_config, print_json, CliError, CliResult};
use crate::config::{Config, LOG_LEVELS};
use crate::constants::APP_NAME;
use clap::{Args, Subcommand};
use serde::Serialize;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Delay before the deferred re-render request, in milliseconds (0-1000)
    #[arg(long, value_name = "MS")]
    rerender_delay_ms: Option<u64>,

    /// Default log level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    config_file: String,
    state_file: String,
    rerender_delay_ms: u64,
    log_level: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let output = ConfigOutput {
            config_file: Config::config_file_path()
                .map_err(|e| CliError::io(format!("Failed to locate config file: {e}")))?
                .to_string_lossy()
                .to_string(),
            state_file: config
                .state_file_path()
                .map_err(|e| CliError::io(format!("Failed to locate state file: {e}")))?
                .to_string_lossy()
                .to_string(),
            rerender_delay_ms: config.broadcast.rerender_delay_ms,
            log_level: config.logging.level.clone(),
        };

        if self.json {
            return print_json(&output);
        }

        let heading = format!("{APP_NAME} Configuration");
        println!("{heading}");
        println!("{}", "=".repeat(heading.len()));
        println!();
        println!("Files:");
        println!("  Config: {}", output.config_file);
        println!("  State:  {}", output.state_file);
        println!();
        println!("Broadcast:");
        println!("  Re-render Delay: {}ms", output.rerender_delay_ms);
        println!();
        println!("Logging:");
        println!("  Level: {}", output.log_level);
        println!();
        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.rerender_delay_ms.is_none() && self.log_level.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --rerender-delay-ms or --log-level",
            ));
        }

        let mut config = Config::load().unwrap_or_default();

        if let Some(delay) = self.rerender_delay_ms {
            config.broadcast.rerender_delay_ms = delay;
        }

        if let Some(level) = &self.log_level {
            let level = level.to_lowercase();
            if !LOG_LEVELS.contains(&level.as_str()) {
                return Err(CliError::validation(format!(
                    "Invalid log level. Must be one of: {}",
                    LOG_LEVELS.join(", ")
                )));
            }
            config.logging.level = level;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(e.to_string()))?;
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e}")))?;

        println!("Configuration updated successfully.");
        Ok(())
    }
}
