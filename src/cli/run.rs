//! `folio run`: replay a scripted session against the in-memory page.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::{Config, TimingConfig};
use crate::dom::PageLayout;
use crate::session::{PageSnapshot, Script, Session};
use crate::storage::{FileStore, MemoryStore, PreferenceStore};
use crate::theme::{scheme_for_mode, ColorSchemeSource, FixedColorScheme};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Replay a scripted session and print the final page state
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Script file (TOML, or JSON with a .json extension)
    #[arg(value_name = "SCRIPT")]
    script: PathBuf,

    /// Page layout file (TOML), overriding the script's layout
    #[arg(long, value_name = "FILE")]
    layout: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Read and write the on-disk theme preference instead of a throwaway one
    #[arg(long)]
    persist: bool,

    /// Behave as if the OS reported a dark color scheme
    #[arg(long)]
    system_dark: bool,
}

impl RunArgs {
    /// Execute run command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
        let script = Script::load(&self.script)
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        let layout = match &self.layout {
            Some(path) => {
                PageLayout::load(path).map_err(|e| CliError::validation(format!("{e:#}")))?
            }
            None => script.layout.clone().unwrap_or_default(),
        };

        let scheme: Box<dyn ColorSchemeSource> = if self.system_dark {
            Box::new(FixedColorScheme(true))
        } else {
            scheme_for_mode(config.ui.theme_mode)
        };

        info!(
            script = %self.script.display(),
            steps = script.steps.len(),
            "Replaying session"
        );

        let snapshot = if self.persist {
            let path = config
                .preferences_path()
                .map_err(|e| CliError::io(format!("Failed to locate preferences: {e:#}")))?;
            let store = FileStore::open(&path)
                .map_err(|e| CliError::io(format!("Failed to open preferences: {e:#}")))?;
            replay(layout, store, config.timing, scheme.as_ref(), &script)
        } else {
            replay(layout, MemoryStore::new(), config.timing, scheme.as_ref(), &script)
        };

        if self.json {
            print_json(&snapshot)?;
        } else {
            output_human_readable(&snapshot);
        }

        Ok(())
    }
}

fn replay<S: PreferenceStore>(
    layout: PageLayout,
    store: S,
    timing: TimingConfig,
    scheme: &dyn ColorSchemeSource,
    script: &Script,
) -> PageSnapshot {
    let mut session = Session::start(layout, store, timing, scheme);
    session.play(&script.steps);
    session.snapshot()
}

/// Output the snapshot in human-readable format
fn output_human_readable(snapshot: &PageSnapshot) {
    println!("Page state at {}ms", snapshot.now_ms);
    println!("==================");
    println!();

    if let Some(err) = &snapshot.init_error {
        println!("Initialization stopped early: {err}");
        println!();
    }

    println!("Theme: {} {}", snapshot.theme, snapshot.theme_icon);
    if let Some(stored) = &snapshot.stored_theme {
        println!("  Stored preference: {stored}");
    }
    println!(
        "Menu: {}",
        if snapshot.menu_open { "open" } else { "closed" }
    );
    println!(
        "Active link: {}",
        snapshot.active_link.as_deref().unwrap_or("(none)")
    );
    println!("Scroll: {} (navbar scrolled: {})", snapshot.scroll_y, snapshot.navbar_scrolled);
    println!(
        "Loading overlay: {}",
        if snapshot.loading_visible { "shown" } else { "hidden" }
    );
    println!(
        "CV button: \"{}\"{}",
        snapshot.cv_label,
        if snapshot.cv_disabled { " (disabled)" } else { "" }
    );
    println!();

    if snapshot.notifications.is_empty() {
        println!("Notifications: none");
    } else {
        println!("Notifications:");
        for notification in &snapshot.notifications {
            println!(
                "  {} [{}]{} {}",
                notification.id,
                notification.severity.as_str(),
                if notification.visible { "" } else { " (hidden)" },
                notification.message
            );
        }
    }
}
