//! Transient notifications.
//!
//! A notification moves through `Pending` (inserted, hidden) → `Visible` →
//! `Hiding` (exit transition) → removed. Each one owns its auto-dismiss
//! timer; the controller drives the transitions from scheduled tasks.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scheduler::TimerHandle;

/// Stable identifier of a notification within a page session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(pub u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Visual severity. Only selects the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Green palette
    Success,
    /// Red palette
    Error,
    /// Blue palette
    #[default]
    Info,
}

impl Severity {
    /// Lowercase severity name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }

    /// Modifier class selecting the palette, e.g. `notification--error`.
    pub fn class_name(self) -> String {
        format!("notification--{}", self.as_str())
    }
}

/// Lifecycle phase of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Inserted but not yet shown
    Pending,
    /// Shown
    Visible,
    /// Exit transition running, removal scheduled
    Hiding,
}

/// One live notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Identifier
    pub id: NotificationId,
    /// Message text
    pub message: String,
    /// Palette
    pub severity: Severity,
    /// Lifecycle phase
    pub phase: Phase,
    /// Pending auto-dismiss timer
    pub auto_hide: Option<TimerHandle>,
}

/// Bookkeeping for every live notification.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    next_id: u64,
    live: BTreeMap<NotificationId, Notification>,
}

impl NotificationCenter {
    /// Creates an empty center.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new pending notification.
    pub fn create(&mut self, message: &str, severity: Severity) -> NotificationId {
        self.next_id += 1;
        let id = NotificationId(self.next_id);
        self.live.insert(
            id,
            Notification {
                id,
                message: message.to_string(),
                severity,
                phase: Phase::Pending,
                auto_hide: None,
            },
        );
        id
    }

    /// Looks up a live notification.
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.live.get(&id)
    }

    /// Live notifications in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.live.values()
    }

    /// Number of live notifications (any phase).
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Returns true when no notification is live.
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Records the auto-dismiss timer.
    pub fn set_auto_hide(&mut self, id: NotificationId, handle: TimerHandle) {
        if let Some(notification) = self.live.get_mut(&id) {
            notification.auto_hide = Some(handle);
        }
    }

    /// Moves a pending notification to visible.
    ///
    /// Returns false if it is gone or already hiding.
    pub fn reveal(&mut self, id: NotificationId) -> bool {
        match self.live.get_mut(&id) {
            Some(notification) if notification.phase == Phase::Pending => {
                notification.phase = Phase::Visible;
                true
            }
            _ => false,
        }
    }

    /// Starts hiding a notification.
    ///
    /// Returns the auto-dismiss timer to cancel, wrapped in `Some` when the
    /// transition happened. `None` means the notification is unknown or
    /// already hiding, and nothing should be scheduled.
    pub fn begin_hide(&mut self, id: NotificationId) -> Option<Option<TimerHandle>> {
        let notification = self.live.get_mut(&id)?;
        if notification.phase == Phase::Hiding {
            return None;
        }
        notification.phase = Phase::Hiding;
        Some(notification.auto_hide.take())
    }

    /// Forgets a notification once its element is removed.
    pub fn finish(&mut self, id: NotificationId) -> Option<Notification> {
        self.live.remove(&id)
    }
}

/// Stylesheet shared by all notifications, inserted once per page.
pub const NOTIFICATION_STYLES: &str = r"
.notification {
    position: fixed;
    top: 100px;
    right: 20px;
    max-width: 400px;
    padding: var(--space-16);
    border-radius: var(--radius-base);
    box-shadow: var(--shadow-lg);
    z-index: 10000;
    transform: translateX(100%);
    transition: transform var(--duration-normal) var(--ease-standard);
    background: var(--color-surface);
}

.notification.show {
    transform: translateX(0);
}

.notification--success {
    background: rgba(var(--color-success-rgb), 0.15);
    color: var(--color-success);
    border: 1px solid rgba(var(--color-success-rgb), 0.25);
}

.notification--error {
    background: rgba(var(--color-error-rgb), 0.15);
    color: var(--color-error);
    border: 1px solid rgba(var(--color-error-rgb), 0.25);
}

.notification--info {
    background: rgba(var(--color-info-rgb), 0.15);
    color: var(--color-info);
    border: 1px solid rgba(var(--color-info-rgb), 0.25);
}

.notification-content {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: var(--space-12);
}

.notification-message {
    font-weight: var(--font-weight-medium);
    font-size: var(--font-size-sm);
}

.notification-close {
    background: none;
    border: none;
    font-size: var(--font-size-lg);
    cursor: pointer;
    color: inherit;
    opacity: 0.7;
    transition: opacity var(--duration-fast) var(--ease-standard);
}

.notification-close:hover {
    opacity: 1;
}

@media (max-width: 480px) {
    .notification {
        right: 10px;
        left: 10px;
        max-width: none;
    }
}
";
