//! Document access for the page controller.
//!
//! The controller never touches a rendering environment directly. It goes
//! through [`ElementRegistry`], a small capability interface with named
//! accessors for the fixed set of page elements. A browser host implements
//! it over the real DOM; [`MemoryDocument`] implements it in memory for
//! tests and for scripted sessions.

pub mod memory;

pub use memory::{ElementState, MemoryDocument, NotificationView, PageLayout};

use serde::{Deserialize, Serialize};

use crate::notify::{NotificationId, Severity};

/// Identifies one page element.
///
/// Indexed variants address members of a collection in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementId {
    /// Fixed navigation bar
    Navbar,
    /// Theme toggle button
    ThemeToggle,
    /// Glyph inside the theme toggle
    ThemeIcon,
    /// Hamburger button
    MobileMenuToggle,
    /// One of the three hamburger bars
    MenuBar(usize),
    /// Navigation menu container
    NavMenu,
    /// Navigation link
    NavLink(usize),
    /// Contact form
    ContactForm,
    /// Contact form submit button
    ContactSubmit,
    /// CV download button
    DownloadCv,
    /// Full-page loading overlay
    LoadingOverlay,
    /// Skill tag with a hover effect
    SkillTag(usize),
    /// Element with a scroll-triggered entrance animation
    Animated(usize),
    /// Element carrying the hidden marker
    Hidden(usize),
    /// Notification container
    Notification(NotificationId),
    /// Close button of a notification
    NotificationClose(NotificationId),
}

/// The four named contact form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    /// `name`
    Name,
    /// `email`
    Email,
    /// `subject`
    Subject,
    /// `message`
    Message,
}

impl FormField {
    /// All fields in form order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// Field name attribute.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

/// Vertical extent of an identified section, in document coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionBounds {
    /// Section identifier (the anchor nav links point at)
    pub id: String,
    /// Offset from the top of the document
    pub top: f64,
    /// Rendered height
    pub height: f64,
}

impl SectionBounds {
    /// Returns true when `position` falls in `[top, top + height)`.
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// How a programmatic scroll should move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    /// Animated scroll
    Smooth,
    /// Jump
    Instant,
}

/// Capability interface over the rendered page.
///
/// Mutators are infallible: the controller assumes the fixed elements
/// exist. Operations on an unknown element are ignored by implementations.
pub trait ElementRegistry {
    /// Reads an attribute of the root document element.
    fn root_attribute(&self, name: &str) -> Option<String>;
    /// Sets an attribute on the root document element.
    fn set_root_attribute(&mut self, name: &str, value: &str);

    /// Adds a class to an element.
    fn add_class(&mut self, element: ElementId, class: &str);
    /// Removes a class from an element.
    fn remove_class(&mut self, element: ElementId, class: &str);
    /// Returns true when the element carries the class.
    fn has_class(&self, element: ElementId, class: &str) -> bool;

    /// Sets an inline style property.
    fn set_style(&mut self, element: ElementId, property: &str, value: &str);
    /// Replaces the element's text content.
    fn set_text(&mut self, element: ElementId, text: &str);
    /// Enables or disables a control.
    fn set_disabled(&mut self, element: ElementId, disabled: bool);
    /// Returns true while a control is disabled.
    fn is_disabled(&self, element: ElementId) -> bool;
    /// Returns true for button elements (activated by Enter).
    fn is_button(&self, element: ElementId) -> bool;
    /// Returns true while the element is attached to the document.
    fn contains(&self, element: ElementId) -> bool;

    /// Number of bar children inside the hamburger button.
    fn menu_bar_count(&self) -> usize;
    /// `href` of every nav link, in document order.
    fn nav_link_hrefs(&self) -> Vec<String>;
    /// Every identified section, in document order.
    fn sections(&self) -> Vec<SectionBounds>;
    /// Number of skill tags.
    fn skill_tag_count(&self) -> usize;
    /// Number of elements with an entrance animation.
    fn animated_count(&self) -> usize;
    /// Number of elements carrying the hidden marker.
    fn hidden_count(&self) -> usize;

    /// Current vertical scroll offset.
    fn scroll_y(&self) -> f64;
    /// Current viewport width.
    fn viewport_width(&self) -> f64;
    /// Scrolls the window to `top`.
    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior);

    /// Current value of a contact field.
    fn field_value(&self, field: FormField) -> String;
    /// Resets every contact field to empty.
    fn reset_form(&mut self);

    /// Returns true when a stylesheet with the marker id is present.
    fn has_stylesheet(&self, marker: &str) -> bool;
    /// Appends a stylesheet with the marker id to the document head.
    fn insert_stylesheet(&mut self, marker: &str, css: &str);

    /// Appends a hidden notification (with its close button) to the body.
    fn append_notification(&mut self, id: NotificationId, severity: Severity, message: &str);
    /// Detaches an element. Returns false if it was not attached.
    fn remove_element(&mut self, element: ElementId) -> bool;
}
