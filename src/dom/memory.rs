//! In-memory page used by tests and scripted sessions.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use super::{ElementId, ElementRegistry, FormField, ScrollBehavior, SectionBounds};
use crate::constants::{CLASS_SHOW, CV_LABEL_IDLE};
use crate::notify::{NotificationId, Severity};

/// Static structure of the page: what exists and where the sections sit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageLayout {
    /// `href` of each nav link
    pub nav_links: Vec<String>,
    /// Identified sections in document order
    pub sections: Vec<SectionBounds>,
    /// Bars inside the hamburger button
    pub menu_bars: usize,
    /// Skill tags
    pub skill_tags: usize,
    /// Elements with entrance animations
    pub animated: usize,
    /// Elements with the hidden marker
    pub hidden: usize,
    /// Initial viewport width
    pub viewport_width: f64,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::portfolio()
    }
}

impl PageLayout {
    /// The stock portfolio page: seven stacked sections, one link each.
    #[must_use]
    pub fn portfolio() -> Self {
        let sections: Vec<SectionBounds> = [
            ("hero", 0.0, 600.0),
            ("about", 600.0, 600.0),
            ("experience", 1200.0, 900.0),
            ("skills", 2100.0, 700.0),
            ("projects", 2800.0, 800.0),
            ("education", 3600.0, 500.0),
            ("contact", 4100.0, 700.0),
        ]
        .into_iter()
        .map(|(id, top, height)| SectionBounds {
            id: id.to_string(),
            top,
            height,
        })
        .collect();

        Self {
            nav_links: sections.iter().map(|s| format!("#{}", s.id)).collect(),
            sections,
            menu_bars: 3,
            skill_tags: 6,
            animated: 4,
            hidden: 2,
            viewport_width: 1280.0,
        }
    }

    /// Loads a layout from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read page layout: {}", path.display()))?;
        toml::from_str(&content)
            .context(format!("Failed to parse page layout: {}", path.display()))
    }
}

/// Mutable state of one element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementState {
    /// Class list
    pub classes: BTreeSet<String>,
    /// Inline styles
    pub styles: BTreeMap<String, String>,
    /// Text content
    pub text: String,
    /// Disabled flag (controls only)
    pub disabled: bool,
}

impl ElementState {
    fn with_classes(classes: &[&str]) -> Self {
        Self {
            classes: classes.iter().map(ToString::to_string).collect(),
            ..Self::default()
        }
    }
}

/// Read-only view of a notification element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationView {
    /// Identifier
    pub id: NotificationId,
    /// Palette
    pub severity: Severity,
    /// Message text
    pub message: String,
    /// Whether the `show` class is set
    pub visible: bool,
}

/// [`ElementRegistry`] backed by plain maps.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    layout: PageLayout,
    root_attributes: BTreeMap<String, String>,
    elements: BTreeMap<ElementId, ElementState>,
    fields: BTreeMap<FormField, String>,
    stylesheets: BTreeMap<String, String>,
    notifications: BTreeMap<NotificationId, (Severity, String)>,
    removed: Vec<ElementId>,
    scroll_y: f64,
    viewport_width: f64,
    scroll_requests: Vec<(f64, ScrollBehavior)>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new(PageLayout::portfolio())
    }
}

impl MemoryDocument {
    /// Renders `layout` into a fresh document, scrolled to the top.
    ///
    /// The loading overlay starts visible, as served.
    #[must_use]
    pub fn new(layout: PageLayout) -> Self {
        let mut elements = BTreeMap::new();
        elements.insert(ElementId::Navbar, ElementState::with_classes(&["navbar"]));
        elements.insert(ElementId::ThemeToggle, ElementState::with_classes(&["theme-toggle"]));
        elements.insert(ElementId::ThemeIcon, ElementState::with_classes(&["theme-icon"]));
        elements.insert(
            ElementId::MobileMenuToggle,
            ElementState::with_classes(&["mobile-menu-toggle"]),
        );
        for bar in 0..layout.menu_bars {
            elements.insert(ElementId::MenuBar(bar), ElementState::default());
        }
        elements.insert(ElementId::NavMenu, ElementState::with_classes(&["nav-menu"]));
        for link in 0..layout.nav_links.len() {
            elements.insert(ElementId::NavLink(link), ElementState::with_classes(&["nav-link"]));
        }
        elements.insert(ElementId::ContactForm, ElementState::with_classes(&["contact-form"]));
        elements.insert(ElementId::ContactSubmit, ElementState::with_classes(&["btn"]));
        elements.insert(
            ElementId::DownloadCv,
            ElementState {
                text: CV_LABEL_IDLE.to_string(),
                ..ElementState::with_classes(&["btn"])
            },
        );
        elements.insert(
            ElementId::LoadingOverlay,
            ElementState::with_classes(&["loading-overlay", CLASS_SHOW]),
        );
        for tag in 0..layout.skill_tags {
            elements.insert(ElementId::SkillTag(tag), ElementState::with_classes(&["skill-tag"]));
        }
        for item in 0..layout.animated {
            elements.insert(
                ElementId::Animated(item),
                ElementState::with_classes(&["timeline-item"]),
            );
        }
        for item in 0..layout.hidden {
            elements.insert(ElementId::Hidden(item), ElementState::with_classes(&["hidden"]));
        }

        let fields = FormField::ALL
            .iter()
            .map(|field| (*field, String::new()))
            .collect();

        Self {
            viewport_width: layout.viewport_width,
            layout,
            root_attributes: BTreeMap::new(),
            elements,
            fields,
            stylesheets: BTreeMap::new(),
            notifications: BTreeMap::new(),
            removed: Vec::new(),
            scroll_y: 0.0,
            scroll_requests: Vec::new(),
        }
    }

    /// Layout the document was built from.
    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// State of an attached element.
    pub fn element(&self, element: ElementId) -> Option<&ElementState> {
        self.elements.get(&element)
    }

    /// Inline style value of an element.
    pub fn style(&self, element: ElementId, property: &str) -> Option<&str> {
        self.elements
            .get(&element)
            .and_then(|state| state.styles.get(property))
            .map(String::as_str)
    }

    /// Text content of an element (empty if unknown).
    pub fn text(&self, element: ElementId) -> &str {
        self.elements
            .get(&element)
            .map_or("", |state| state.text.as_str())
    }

    /// Simulates the user scrolling.
    pub fn set_scroll_y(&mut self, y: f64) {
        self.scroll_y = y.max(0.0);
    }

    /// Simulates a window resize.
    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport_width = width;
    }

    /// Simulates typing into a contact field.
    pub fn set_field(&mut self, field: FormField, value: &str) {
        self.fields.insert(field, value.to_string());
    }

    /// Number of stylesheets in the head.
    pub fn stylesheet_count(&self) -> usize {
        self.stylesheets.len()
    }

    /// Attached notifications in creation order.
    pub fn notifications(&self) -> Vec<NotificationView> {
        self.notifications
            .iter()
            .map(|(id, (severity, message))| NotificationView {
                id: *id,
                severity: *severity,
                message: message.clone(),
                visible: self.has_class(ElementId::Notification(*id), CLASS_SHOW),
            })
            .collect()
    }

    /// Every element detached so far, in order.
    pub fn removed_elements(&self) -> &[ElementId] {
        &self.removed
    }

    /// Every programmatic scroll requested so far.
    pub fn scroll_requests(&self) -> &[(f64, ScrollBehavior)] {
        &self.scroll_requests
    }
}

impl ElementRegistry for MemoryDocument {
    fn root_attribute(&self, name: &str) -> Option<String> {
        self.root_attributes.get(name).cloned()
    }

    fn set_root_attribute(&mut self, name: &str, value: &str) {
        self.root_attributes
            .insert(name.to_string(), value.to_string());
    }

    fn add_class(&mut self, element: ElementId, class: &str) {
        if let Some(state) = self.elements.get_mut(&element) {
            state.classes.insert(class.to_string());
        }
    }

    fn remove_class(&mut self, element: ElementId, class: &str) {
        if let Some(state) = self.elements.get_mut(&element) {
            state.classes.remove(class);
        }
    }

    fn has_class(&self, element: ElementId, class: &str) -> bool {
        self.elements
            .get(&element)
            .is_some_and(|state| state.classes.contains(class))
    }

    fn set_style(&mut self, element: ElementId, property: &str, value: &str) {
        if let Some(state) = self.elements.get_mut(&element) {
            state
                .styles
                .insert(property.to_string(), value.to_string());
        }
    }

    fn set_text(&mut self, element: ElementId, text: &str) {
        if let Some(state) = self.elements.get_mut(&element) {
            state.text = text.to_string();
        }
    }

    fn set_disabled(&mut self, element: ElementId, disabled: bool) {
        if let Some(state) = self.elements.get_mut(&element) {
            state.disabled = disabled;
        }
    }

    fn is_disabled(&self, element: ElementId) -> bool {
        self.elements
            .get(&element)
            .is_some_and(|state| state.disabled)
    }

    fn is_button(&self, element: ElementId) -> bool {
        matches!(
            element,
            ElementId::ThemeToggle
                | ElementId::MobileMenuToggle
                | ElementId::ContactSubmit
                | ElementId::DownloadCv
                | ElementId::NotificationClose(_)
        ) && self.elements.contains_key(&element)
    }

    fn contains(&self, element: ElementId) -> bool {
        self.elements.contains_key(&element)
    }

    fn menu_bar_count(&self) -> usize {
        self.layout.menu_bars
    }

    fn nav_link_hrefs(&self) -> Vec<String> {
        self.layout.nav_links.clone()
    }

    fn sections(&self) -> Vec<SectionBounds> {
        self.layout.sections.clone()
    }

    fn skill_tag_count(&self) -> usize {
        self.layout.skill_tags
    }

    fn animated_count(&self) -> usize {
        self.layout.animated
    }

    fn hidden_count(&self) -> usize {
        self.layout.hidden
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior) {
        self.scroll_requests.push((top, behavior));
        // Smooth scrolling lands on the same offset; model the end state
        self.scroll_y = top.max(0.0);
    }

    fn field_value(&self, field: FormField) -> String {
        self.fields.get(&field).cloned().unwrap_or_default()
    }

    fn reset_form(&mut self) {
        for value in self.fields.values_mut() {
            value.clear();
        }
    }

    fn has_stylesheet(&self, marker: &str) -> bool {
        self.stylesheets.contains_key(marker)
    }

    fn insert_stylesheet(&mut self, marker: &str, css: &str) {
        self.stylesheets.insert(marker.to_string(), css.to_string());
    }

    fn append_notification(&mut self, id: NotificationId, severity: Severity, message: &str) {
        let class = severity.class_name();
        self.elements.insert(
            ElementId::Notification(id),
            ElementState {
                text: message.to_string(),
                ..ElementState::with_classes(&["notification", class.as_str()])
            },
        );
        self.elements.insert(
            ElementId::NotificationClose(id),
            ElementState {
                text: "×".to_string(),
                ..ElementState::with_classes(&["notification-close"])
            },
        );
        self.notifications
            .insert(id, (severity, message.to_string()));
    }

    fn remove_element(&mut self, element: ElementId) -> bool {
        if self.elements.remove(&element).is_none() {
            return false;
        }
        if let ElementId::Notification(id) = element {
            self.elements.remove(&ElementId::NotificationClose(id));
            self.notifications.remove(&id);
        }
        self.removed.push(element);
        true
    }
}
