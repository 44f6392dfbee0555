//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::{Config, ThemeMode, TimingConfig};
use crate::constants::APP_NAME;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

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
    /// Theme fallback when no preference is stored (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    theme_mode: Option<String>,

    /// Preference file location
    #[arg(long, value_name = "PATH")]
    preferences: Option<PathBuf>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    config_file: String,
    paths: PathsOutput,
    timing: TimingConfig,
    ui: UiOutput,
}

#[derive(Serialize, Debug)]
struct PathsOutput {
    preferences: String,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme_mode: String,
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
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
        let output = build_output(&config)?;

        if self.json {
            print_json(&output)?;
        } else {
            output_human_readable(&output);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.theme_mode.is_none() && self.preferences.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --theme-mode or --preferences",
            ));
        }

        let mut config = Config::load().unwrap_or_default();

        if let Some(mode) = &self.theme_mode {
            config.ui.theme_mode =
                ThemeMode::parse(mode).map_err(|e| CliError::validation(e.to_string()))?;
        }

        if let Some(path) = &self.preferences {
            if path.as_os_str().is_empty() {
                return Err(CliError::validation("Preference path must not be empty"));
            }
            config.paths.preferences = Some(path.clone());
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

fn build_output(config: &Config) -> CliResult<ConfigOutput> {
    let config_file = Config::config_file_path()
        .map_err(|e| CliError::io(format!("Failed to locate configuration: {e:#}")))?;
    let preferences = config
        .preferences_path()
        .map_err(|e| CliError::io(format!("Failed to locate preferences: {e:#}")))?;

    Ok(ConfigOutput {
        config_file: config_file.to_string_lossy().to_string(),
        paths: PathsOutput {
            preferences: preferences.to_string_lossy().to_string(),
        },
        timing: config.timing.clone(),
        ui: UiOutput {
            theme_mode: config.ui.theme_mode.as_str().to_string(),
        },
    })
}

/// Output configuration in human-readable format
fn output_human_readable(output: &ConfigOutput) {
    println!("{APP_NAME} Configuration");
    println!("====================");
    println!();
    println!("Config File: {}", output.config_file);
    println!();

    println!("Paths:");
    println!("  Preferences: {}", output.paths.preferences);
    println!();

    let timing = &output.timing;
    println!("Timing:");
    println!("  Header Offset: {}px", timing.header_offset);
    println!("  Mobile Breakpoint: {}px", timing.mobile_breakpoint);
    println!("  Submit Delay: {}ms", timing.submit_delay_ms);
    println!("  CV Delay: {}ms", timing.cv_delay_ms);
    println!("  Notification Lifetime: {}ms", timing.notification_auto_hide_ms);
    println!();

    println!("UI:");
    println!("  Theme Mode: {}", output.ui.theme_mode);
    println!();
}
