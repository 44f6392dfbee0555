//! Theme preference CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use crate::constants::THEME_STORAGE_KEY;
use crate::controller::PageController;
use crate::dom::MemoryDocument;
use crate::storage::{FileStore, PreferenceStore};
use crate::theme::{scheme_for_mode, Theme};
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Theme preference commands
#[derive(Args, Debug)]
pub struct ThemeArgs {
    #[command(subcommand)]
    command: ThemeCommand,
}

#[derive(Subcommand, Debug)]
enum ThemeCommand {
    /// Show the stored preference and the theme the page would apply
    Show(ThemeOutputArgs),
    /// Store a theme preference
    Set(ThemeSetArgs),
    /// Flip the applied theme and store the result
    Toggle(ThemeOutputArgs),
    /// Forget the stored preference
    Reset(ThemeOutputArgs),
}

/// Output options shared by the theme commands
#[derive(Args, Debug)]
pub struct ThemeOutputArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Store a theme preference
#[derive(Args, Debug)]
pub struct ThemeSetArgs {
    /// Theme to store (light or dark)
    #[arg(value_name = "THEME")]
    theme: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// JSON-serializable theme status
#[derive(Serialize, Debug)]
struct ThemeOutput {
    /// Theme applied on page load
    theme: Theme,
    /// Raw stored value, if any
    stored: Option<String>,
    preferences: PathBuf,
}

impl ThemeArgs {
    /// Execute theme subcommand
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
        let path = config
            .preferences_path()
            .map_err(|e| CliError::io(format!("Failed to locate preferences: {e:#}")))?;
        let store = FileStore::open(&path)
            .map_err(|e| CliError::io(format!("Failed to open preferences: {e:#}")))?;

        let mut page = reload(store, &config);

        let json = match &self.command {
            ThemeCommand::Show(args) => args.json,
            ThemeCommand::Set(args) => {
                let theme: Theme = args
                    .theme
                    .parse()
                    .map_err(|e| CliError::validation(format!("{e}")))?;
                let (_, mut store) = page.into_parts();
                store
                    .set(THEME_STORAGE_KEY, theme.as_str())
                    .map_err(|e| CliError::io(format!("Failed to store theme: {e:#}")))?;
                page = reload(store, &config);
                args.json
            }
            ThemeCommand::Toggle(args) => {
                page.toggle_theme()
                    .map_err(|e| CliError::io(format!("Failed to store theme: {e:#}")))?;
                args.json
            }
            ThemeCommand::Reset(args) => {
                let (_, mut store) = page.into_parts();
                store
                    .remove(THEME_STORAGE_KEY)
                    .map_err(|e| CliError::io(format!("Failed to reset theme: {e:#}")))?;
                page = reload(store, &config);
                args.json
            }
        };

        let output = ThemeOutput {
            theme: page.state().theme,
            stored: page.store().get(THEME_STORAGE_KEY),
            preferences: page.store().path().to_path_buf(),
        };

        if json {
            print_json(&output)?;
        } else {
            println!("Theme: {}", output.theme);
            match &output.stored {
                Some(value) => println!("Stored preference: {value}"),
                None => println!(
                    "Stored preference: (none, following {})",
                    config.ui.theme_mode.as_str()
                ),
            }
            println!("Preference file: {}", output.preferences.display());
        }

        Ok(())
    }
}

/// Resolves the theme against a blank page, exactly as a page load would.
fn reload(store: FileStore, config: &Config) -> PageController<MemoryDocument, FileStore> {
    let mut page = PageController::new(MemoryDocument::default(), store, config.timing.clone());
    page.initialize_theme(scheme_for_mode(config.ui.theme_mode).as_ref());
    page
}
