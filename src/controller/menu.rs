//! Mobile menu.

use anyhow::Result;
use tracing::debug;

use super::PageController;
use crate::constants::{CLASS_ACTIVE, CLASS_SHOW};
use crate::dom::{ElementId, ElementRegistry};
use crate::storage::PreferenceStore;

/// Bars in the hamburger glyph.
pub const MENU_BAR_COUNT: usize = 3;

/// Bar styles forming an X.
const OPEN_BAR_STYLES: [(&str, &str); MENU_BAR_COUNT] = [
    ("transform", "rotate(45deg) translate(5px, 5px)"),
    ("opacity", "0"),
    ("transform", "rotate(-45deg) translate(7px, -6px)"),
];

/// Bar styles forming the hamburger.
const CLOSED_BAR_STYLES: [(&str, &str); MENU_BAR_COUNT] =
    [("transform", "none"), ("opacity", "1"), ("transform", "none")];

impl<R: ElementRegistry, S: PreferenceStore> PageController<R, S> {
    pub(super) fn setup_mobile_menu(&mut self) -> Result<()> {
        let bars = self.registry.menu_bar_count();
        if bars != MENU_BAR_COUNT {
            anyhow::bail!("Mobile menu toggle has {bars} bars, expected {MENU_BAR_COUNT}");
        }
        self.wiring.mobile_menu = true;
        Ok(())
    }

    /// Opens or closes the mobile menu and animates the hamburger bars.
    ///
    /// The bars are styled inline, so every open-state change must come
    /// through here.
    pub fn toggle_mobile_menu(&mut self) {
        let open = !self.state.menu_open;

        if open {
            self.registry.add_class(ElementId::NavMenu, CLASS_SHOW);
            self.registry
                .add_class(ElementId::MobileMenuToggle, CLASS_ACTIVE);
        } else {
            self.registry.remove_class(ElementId::NavMenu, CLASS_SHOW);
            self.registry
                .remove_class(ElementId::MobileMenuToggle, CLASS_ACTIVE);
        }

        let styles = if open {
            OPEN_BAR_STYLES
        } else {
            CLOSED_BAR_STYLES
        };
        for (bar, (property, value)) in styles.iter().enumerate() {
            self.registry
                .set_style(ElementId::MenuBar(bar), property, value);
        }

        self.state.menu_open = open;
        debug!(open, "Mobile menu toggled");
    }
}
