//! Theme initialization and toggling.

use anyhow::{Context, Result};
use tracing::{debug, warn};

use super::PageController;
use crate::constants::{THEME_ATTRIBUTE, THEME_STORAGE_KEY};
use crate::dom::{ElementId, ElementRegistry};
use crate::storage::PreferenceStore;
use crate::theme::{ColorSchemeSource, Theme};

impl<R: ElementRegistry, S: PreferenceStore> PageController<R, S> {
    /// Applies the stored theme, or the environment's preference if none is stored.
    pub fn initialize_theme(&mut self, scheme: &dyn ColorSchemeSource) {
        let stored = self
            .store
            .get(THEME_STORAGE_KEY)
            .and_then(|value| match value.parse::<Theme>() {
                Ok(theme) => Some(theme),
                Err(err) => {
                    warn!("Ignoring stored theme preference: {err}");
                    None
                }
            });

        let theme = stored.unwrap_or_else(|| Theme::from_prefers_dark(scheme.prefers_dark()));
        debug!(theme = %theme, from_storage = stored.is_some(), "Initial theme");
        self.apply_theme(theme);
    }

    /// Flips the applied theme and persists it.
    ///
    /// The page is updated before the write, so a failed write leaves the
    /// icon and root attribute consistent with each other.
    pub fn toggle_theme(&mut self) -> Result<Theme> {
        let next = self.applied_theme().toggled();
        self.apply_theme(next);

        self.store
            .set(THEME_STORAGE_KEY, next.as_str())
            .context("Failed to persist theme preference")?;

        Ok(next)
    }

    /// Theme currently on the root element. Anything but `dark` reads as light.
    pub fn applied_theme(&self) -> Theme {
        match self.registry.root_attribute(THEME_ATTRIBUTE).as_deref() {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    fn apply_theme(&mut self, theme: Theme) {
        self.registry
            .set_root_attribute(THEME_ATTRIBUTE, theme.as_str());
        self.registry.set_text(ElementId::ThemeIcon, theme.icon());
        self.state.theme = theme;
    }
}
