//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the fixed page vocabulary
//! (attribute names, class names, user-facing messages).

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Folio";

/// Preference key holding the theme (`"light"` or `"dark"`).
pub const THEME_STORAGE_KEY: &str = "theme";

/// Root document attribute that carries the applied theme.
pub const THEME_ATTRIBUTE: &str = "data-color-scheme";

/// Marker id of the shared notification stylesheet.
pub const NOTIFICATION_STYLES_ID: &str = "notification-styles";

/// Generic "visible" class used by the nav menu, overlay and notifications.
pub const CLASS_SHOW: &str = "show";

/// Class marking the active nav link and the open menu toggle.
pub const CLASS_ACTIVE: &str = "active";

/// Class applied to the navbar once the page is scrolled.
pub const CLASS_SCROLLED: &str = "scrolled";

/// Label of the CV button at rest.
pub const CV_LABEL_IDLE: &str = "Download CV";

/// Label of the CV button while the download is being prepared.
pub const CV_LABEL_PREPARING: &str = "Preparing CV...";

/// Notification shown when a contact field is blank.
pub const MSG_MISSING_FIELDS: &str = "Please fill in all required fields.";

/// Notification shown when the email address is malformed.
pub const MSG_INVALID_EMAIL: &str = "Please enter a valid email address.";

/// Notification shown once the simulated submission completes.
pub const MSG_CONTACT_SENT: &str = "Thank you for your message! I'll get back to you soon.";

/// Notification shown once the simulated CV preparation completes.
pub const MSG_CV_PLACEHOLDER: &str =
    "CV download functionality will be implemented soon. For now, you can print this page or contact me directly!";

/// Notification shown when initialization failed part-way.
pub const MSG_INIT_DEGRADED: &str =
    "Website loaded with some limitations. Please refresh if you experience issues.";
