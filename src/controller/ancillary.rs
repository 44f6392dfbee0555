//! Entrance animations, keyboard shortcuts, skill tag hover, print and resize.

use anyhow::Result;
use tracing::debug;

use super::PageController;
use crate::dom::{ElementId, ElementRegistry};
use crate::storage::PreferenceStore;

const ANIMATION_PLAY_STATE: &str = "animation-play-state";
const SKILL_TAG_HOVER: &str = "translateY(-2px) scale(1.05)";
const SKILL_TAG_REST: &str = "translateY(-2px)";

impl<R: ElementRegistry, S: PreferenceStore> PageController<R, S> {
    pub(super) fn setup_intersection_observer(&mut self) {
        for index in 0..self.registry.animated_count() {
            self.registry
                .set_style(ElementId::Animated(index), ANIMATION_PLAY_STATE, "paused");
            self.observed.insert(index);
        }
        self.wiring.intersection = true;
    }

    /// Starts an entrance animation once enough of the element is visible.
    ///
    /// Each element animates at most once.
    pub fn handle_intersection(&mut self, target: ElementId, ratio: f64) {
        let ElementId::Animated(index) = target else {
            return;
        };
        if ratio < self.timing.intersection_threshold || !self.observed.remove(&index) {
            return;
        }
        self.registry
            .set_style(target, ANIMATION_PLAY_STATE, "running");
    }

    pub(super) fn setup_keyboard_navigation(&mut self) {
        self.wiring.keyboard = true;
    }

    /// Escape closes the open menu; Enter activates a focused button.
    pub fn handle_key_down(&mut self, key: &str, focused: Option<ElementId>) -> Result<()> {
        match key {
            "Escape" if self.state.menu_open => self.toggle_mobile_menu(),
            "Enter" => {
                if let Some(element) = focused.filter(|el| self.registry.is_button(*el)) {
                    debug!(?element, "Activating focused button");
                    self.handle_click(element)?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    pub(super) fn setup_skill_tags(&mut self) {
        self.wiring.skill_tags = true;
    }

    /// Skill tag hover styling.
    pub fn handle_pointer(&mut self, target: ElementId, entered: bool) {
        if !self.wiring.skill_tags {
            return;
        }
        if let ElementId::SkillTag(index) = target {
            if index < self.registry.skill_tag_count() {
                let transform = if entered { SKILL_TAG_HOVER } else { SKILL_TAG_REST };
                self.registry.set_style(target, "transform", transform);
            }
        }
    }

    pub(super) fn setup_print_handling(&mut self) {
        self.wiring.print = true;
    }

    /// Shows hidden elements for printing and hides them again afterwards.
    pub fn handle_print(&mut self, before: bool) {
        if !self.wiring.print {
            return;
        }
        let display = if before { "block" } else { "none" };
        for index in 0..self.registry.hidden_count() {
            self.registry
                .set_style(ElementId::Hidden(index), "display", display);
        }
    }

    pub(super) fn setup_resize_handler(&mut self) {
        self.wiring.resize = true;
    }

    /// Trailing edge of a resize burst.
    pub(super) fn handle_resize_settled(&mut self) {
        if self.registry.viewport_width() > self.timing.mobile_breakpoint && self.state.menu_open
        {
            self.toggle_mobile_menu();
        }
        self.highlight_active_section();
    }
}
