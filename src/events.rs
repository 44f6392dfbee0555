//! Events pushed into the controller by the host.
//!
//! Positional payloads (`y`, `width`, field values) describe what the host
//! observed. The controller itself always reads the current values back
//! through the [`ElementRegistry`](crate::dom::ElementRegistry), so a host
//! applies them to its document before dispatching.

use serde::{Deserialize, Serialize};

use crate::dom::{ElementId, FormField};

/// A user or window event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageEvent {
    /// Pointer click (or keyboard activation) on an element
    Click {
        /// Clicked element
        target: ElementId,
    },
    /// Window scrolled to `y`
    Scroll {
        /// New vertical offset
        y: f64,
    },
    /// Window resized to `width`
    Resize {
        /// New viewport width
        width: f64,
    },
    /// User typed into a contact field
    Input {
        /// Edited field
        field: FormField,
        /// New value
        value: String,
    },
    /// Contact form submitted
    Submit,
    /// Key pressed anywhere in the document
    KeyDown {
        /// Key name (`"Escape"`, `"Enter"`, ...)
        key: String,
        /// Focused element at the time of the press
        #[serde(default)]
        focused: Option<ElementId>,
    },
    /// Pointer entered an element
    PointerEnter {
        /// Hovered element
        target: ElementId,
    },
    /// Pointer left an element
    PointerLeave {
        /// Element left
        target: ElementId,
    },
    /// Print dialog about to open
    BeforePrint,
    /// Print dialog closed
    AfterPrint,
    /// Visibility report for an observed element
    Intersection {
        /// Observed element
        target: ElementId,
        /// Visible fraction in `[0, 1]`
        ratio: f64,
    },
    /// Uncaught runtime error somewhere on the page
    Error {
        /// Error description
        message: String,
    },
    /// Unhandled asynchronous rejection
    UnhandledRejection {
        /// Rejection reason
        reason: String,
    },
}

impl PageEvent {
    /// Short event name for logs.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Click { .. } => "click",
            Self::Scroll { .. } => "scroll",
            Self::Resize { .. } => "resize",
            Self::Input { .. } => "input",
            Self::Submit => "submit",
            Self::KeyDown { .. } => "keydown",
            Self::PointerEnter { .. } => "pointerenter",
            Self::PointerLeave { .. } => "pointerleave",
            Self::BeforePrint => "beforeprint",
            Self::AfterPrint => "afterprint",
            Self::Intersection { .. } => "intersection",
            Self::Error { .. } => "error",
            Self::UnhandledRejection { .. } => "unhandledrejection",
        }
    }
}
