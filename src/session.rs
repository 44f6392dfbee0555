//! Scripted page sessions.
//!
//! A [`Script`] is a list of page events interleaved with waits. A
//! [`Session`] replays it against a [`MemoryDocument`], applying positional
//! payloads to the document before each event reaches the controller, and
//! reports the result as a [`PageSnapshot`].

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::TimingConfig;
use crate::constants::THEME_STORAGE_KEY;
use crate::controller::{PageController, Wiring};
use crate::dom::{ElementId, ElementRegistry, MemoryDocument, NotificationView, PageLayout};
use crate::events::PageEvent;
use crate::storage::PreferenceStore;
use crate::theme::{ColorSchemeSource, Theme};

/// One script step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScriptStep {
    /// Let virtual time pass
    Wait {
        /// Milliseconds to advance
        wait_ms: u64,
    },
    /// Dispatch an event
    Event(PageEvent),
}

/// A recorded session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    /// Page to run against; the stock portfolio page when absent
    #[serde(default)]
    pub layout: Option<PageLayout>,
    /// Steps in order
    #[serde(default)]
    pub steps: Vec<ScriptStep>,
}

impl Script {
    /// Loads a script. `.json` files are read as JSON, anything else as TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read script: {}", path.display()))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            serde_json::from_str(&content)
                .context(format!("Failed to parse script: {}", path.display()))
        } else {
            toml::from_str(&content)
                .context(format!("Failed to parse script: {}", path.display()))
        }
    }
}

/// Observable page state at one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageSnapshot {
    /// Virtual time in milliseconds
    pub now_ms: u64,
    /// Applied theme
    pub theme: Theme,
    /// Stored preference, if any
    pub stored_theme: Option<String>,
    /// Theme toggle glyph
    pub theme_icon: String,
    /// Mobile menu state
    pub menu_open: bool,
    /// `href` of the active nav link
    pub active_link: Option<String>,
    /// Navbar `scrolled` style
    pub navbar_scrolled: bool,
    /// Loading overlay state
    pub loading_visible: bool,
    /// Current scroll offset
    pub scroll_y: f64,
    /// CV button label
    pub cv_label: String,
    /// CV button disabled flag
    pub cv_disabled: bool,
    /// Attached notifications
    pub notifications: Vec<NotificationView>,
    /// Setup failure, if any
    pub init_error: Option<String>,
    /// Handlers attached
    pub wiring: Wiring,
}

/// A page controller over an in-memory document.
#[derive(Debug)]
pub struct Session<S> {
    controller: PageController<MemoryDocument, S>,
}

impl<S: PreferenceStore> Session<S> {
    /// Renders `layout` and initializes the controller on it.
    pub fn start(
        layout: PageLayout,
        store: S,
        timing: TimingConfig,
        scheme: &dyn ColorSchemeSource,
    ) -> Self {
        let mut controller = PageController::new(MemoryDocument::new(layout), store, timing);
        controller.initialize(scheme);
        Self { controller }
    }

    /// The underlying controller.
    pub fn controller(&self) -> &PageController<MemoryDocument, S> {
        &self.controller
    }

    /// The underlying controller, mutably.
    pub fn controller_mut(&mut self) -> &mut PageController<MemoryDocument, S> {
        &mut self.controller
    }

    /// Applies one step.
    pub fn step(&mut self, step: &ScriptStep) {
        match step {
            ScriptStep::Wait { wait_ms } => {
                self.controller.advance(Duration::from_millis(*wait_ms));
            }
            ScriptStep::Event(event) => {
                self.apply_payload(event);
                self.controller.handle_event(event);
            }
        }
    }

    /// Applies every step in order.
    pub fn play(&mut self, steps: &[ScriptStep]) {
        for (index, step) in steps.iter().enumerate() {
            debug!(index, ?step, "Replaying step");
            self.step(step);
        }
        info!(
            steps = steps.len(),
            now_ms = self.now_ms(),
            "Script finished"
        );
    }

    fn apply_payload(&mut self, event: &PageEvent) {
        let doc = self.controller.registry_mut();
        match event {
            PageEvent::Scroll { y } => doc.set_scroll_y(*y),
            PageEvent::Resize { width } => doc.set_viewport_width(*width),
            PageEvent::Input { field, value } => doc.set_field(*field, value),
            _ => {}
        }
    }

    fn now_ms(&self) -> u64 {
        u64::try_from(self.controller.now().as_millis()).unwrap_or(u64::MAX)
    }

    /// Captures the current page state.
    pub fn snapshot(&self) -> PageSnapshot {
        let doc = self.controller.registry();
        let state = self.controller.state();

        PageSnapshot {
            now_ms: self.now_ms(),
            theme: state.theme,
            stored_theme: self.controller.store().get(THEME_STORAGE_KEY),
            theme_icon: doc.text(ElementId::ThemeIcon).to_string(),
            menu_open: state.menu_open,
            active_link: state
                .active_link
                .and_then(|index| doc.nav_link_hrefs().get(index).cloned()),
            navbar_scrolled: state.navbar_scrolled,
            loading_visible: state.loading_visible,
            scroll_y: doc.scroll_y(),
            cv_label: doc.text(ElementId::DownloadCv).to_string(),
            cv_disabled: doc.is_disabled(ElementId::DownloadCv),
            notifications: doc.notifications(),
            init_error: state.init_error.clone(),
            wiring: self.controller.wiring(),
        }
    }

    /// Ends the session, returning the store.
    pub fn into_store(self) -> S {
        self.controller.into_parts().1
    }
}
