//! Nav link scrolling, section highlighting and the navbar scroll style.

use anyhow::Result;
use tracing::debug;

use super::PageController;
use crate::constants::{CLASS_ACTIVE, CLASS_SCROLLED};
use crate::dom::{ElementId, ElementRegistry, ScrollBehavior};
use crate::storage::PreferenceStore;

/// Section id a `#anchor` href points at.
fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

impl<R: ElementRegistry, S: PreferenceStore> PageController<R, S> {
    pub(super) fn setup_smooth_scrolling(&mut self) -> Result<()> {
        for (index, href) in self.registry.nav_link_hrefs().iter().enumerate() {
            if anchor_target(href).is_none() {
                anyhow::bail!("Navigation link {index} has non-anchor href '{href}'");
            }
        }
        self.wiring.smooth_scrolling = true;
        Ok(())
    }

    /// Scrolls to the section a nav link targets and marks the link active.
    ///
    /// Closes the mobile menu if it is open. Links whose target section
    /// does not exist do nothing.
    pub fn handle_nav_click(&mut self, index: usize) {
        let hrefs = self.registry.nav_link_hrefs();
        let Some(target) = hrefs.get(index).and_then(|href| anchor_target(href)) else {
            debug!(index, "Click on unknown nav link");
            return;
        };

        let Some(section) = self
            .registry
            .sections()
            .into_iter()
            .find(|section| section.id == target)
        else {
            debug!(section = target, "Nav link points at a missing section");
            return;
        };

        let top = section.top - self.timing.header_offset;
        self.registry.scroll_to(top, ScrollBehavior::Smooth);

        if self.state.menu_open {
            self.toggle_mobile_menu();
        }

        self.set_active_link(Some(index));
    }

    /// Marks the link whose section contains `scroll_y + reference offset`.
    ///
    /// When the reference point falls between sections the previous
    /// highlight is kept.
    pub fn highlight_active_section(&mut self) {
        let reference = self.registry.scroll_y() + self.timing.scroll_reference_offset;
        let sections = self.registry.sections();

        // Later sections win if bounds ever overlap
        let Some(section) = sections.iter().rev().find(|s| s.contains(reference)) else {
            return;
        };

        let href = format!("#{}", section.id);
        let link = self
            .registry
            .nav_link_hrefs()
            .iter()
            .position(|candidate| *candidate == href);

        if link != self.state.active_link {
            debug!(section = %section.id, "Active section changed");
        }
        self.set_active_link(link);
    }

    /// Applies the `scrolled` navbar style past the threshold.
    pub fn handle_navbar_scroll(&mut self) {
        let scrolled = self.registry.scroll_y() > self.timing.navbar_scrolled_threshold;
        if scrolled {
            self.registry.add_class(ElementId::Navbar, CLASS_SCROLLED);
        } else {
            self.registry.remove_class(ElementId::Navbar, CLASS_SCROLLED);
        }
        self.state.navbar_scrolled = scrolled;
    }

    fn set_active_link(&mut self, active: Option<usize>) {
        let count = self.registry.nav_link_hrefs().len();
        for index in 0..count {
            self.registry
                .remove_class(ElementId::NavLink(index), CLASS_ACTIVE);
        }
        if let Some(index) = active {
            self.registry.add_class(ElementId::NavLink(index), CLASS_ACTIVE);
        }
        self.state.active_link = active;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TimingConfig;
    use crate::dom::{MemoryDocument, PageLayout, SectionBounds};
    use crate::storage::MemoryStore;
    use crate::theme::FixedColorScheme;

    fn controller(layout: PageLayout) -> PageController<MemoryDocument, MemoryStore> {
        let mut controller = PageController::new(
            MemoryDocument::new(layout),
            MemoryStore::new(),
            TimingConfig::default(),
        );
        controller.initialize(&FixedColorScheme(false));
        controller
    }

    fn active_links(controller: &PageController<MemoryDocument, MemoryStore>) -> Vec<usize> {
        (0..controller.registry().nav_link_hrefs().len())
            .filter(|index| {
                controller
                    .registry()
                    .has_class(ElementId::NavLink(*index), CLASS_ACTIVE)
            })
            .collect()
    }

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#about"), Some("about"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("about"), None);
    }

    #[test]
    fn test_highlight_marks_exactly_one_link() {
        let mut controller = controller(PageLayout::portfolio());
        // projects spans [2800, 3600)
        controller.registry_mut().set_scroll_y(2750.0);
        controller.highlight_active_section();

        assert_eq!(active_links(&controller), vec![4]);
        assert_eq!(controller.registry().nav_link_hrefs()[4], "#projects");
    }

    #[test]
    fn test_highlight_keeps_previous_in_gap() {
        let mut layout = PageLayout::portfolio();
        layout.sections = vec![
            SectionBounds {
                id: "hero".to_string(),
                top: 0.0,
                height: 500.0,
            },
            SectionBounds {
                id: "about".to_string(),
                top: 800.0,
                height: 500.0,
            },
        ];
        layout.nav_links = vec!["#hero".to_string(), "#about".to_string()];
        let mut controller = controller(layout);
        assert_eq!(active_links(&controller), vec![0]);

        // Reference point 650 is in the gap
        controller.registry_mut().set_scroll_y(550.0);
        controller.highlight_active_section();
        assert_eq!(active_links(&controller), vec![0]);

        controller.registry_mut().set_scroll_y(750.0);
        controller.highlight_active_section();
        assert_eq!(active_links(&controller), vec![1]);
    }

    #[test]
    fn test_nav_click_scrolls_with_header_offset() {
        let mut controller = controller(PageLayout::portfolio());
        controller.handle_nav_click(2);

        let requests = controller.registry().scroll_requests();
        assert_eq!(requests.last(), Some(&(1120.0, ScrollBehavior::Smooth)));
        assert_eq!(active_links(&controller), vec![2]);
    }

    #[test]
    fn test_nav_click_closes_open_menu() {
        let mut controller = controller(PageLayout::portfolio());
        controller.toggle_mobile_menu();
        assert!(controller.state().menu_open);

        controller.handle_nav_click(1);
        assert!(!controller.state().menu_open);
        assert_eq!(
            controller.registry().style(ElementId::MenuBar(1), "opacity"),
            Some("1")
        );
    }

    #[test]
    fn test_nav_click_missing_section_does_nothing() {
        let mut layout = PageLayout::portfolio();
        layout.nav_links.push("#blog".to_string());
        let mut controller = controller(layout);
        let before = controller.registry().scroll_requests().len();

        controller.handle_nav_click(7);
        assert_eq!(controller.registry().scroll_requests().len(), before);
        assert_eq!(active_links(&controller), vec![0]);
    }

    #[test]
    fn test_navbar_scrolled_threshold() {
        let mut controller = controller(PageLayout::portfolio());
        controller.registry_mut().set_scroll_y(50.0);
        controller.handle_navbar_scroll();
        assert!(!controller.state().navbar_scrolled);

        controller.registry_mut().set_scroll_y(51.0);
        controller.handle_navbar_scroll();
        assert!(controller.state().navbar_scrolled);
        assert!(controller
            .registry()
            .has_class(ElementId::Navbar, CLASS_SCROLLED));
    }
}
