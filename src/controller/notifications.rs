//! Notification display, reveal, dismissal and removal.

use tracing::debug;

use super::{PageController, Task};
use crate::constants::{CLASS_SHOW, NOTIFICATION_STYLES_ID};
use crate::dom::{ElementId, ElementRegistry};
use crate::notify::{NotificationId, Severity, NOTIFICATION_STYLES};
use crate::storage::PreferenceStore;

impl<R: ElementRegistry, S: PreferenceStore> PageController<R, S> {
    /// Inserts the shared notification stylesheet unless it is already present.
    pub fn add_notification_styles(&mut self) {
        if !self.registry.has_stylesheet(NOTIFICATION_STYLES_ID) {
            self.registry
                .insert_stylesheet(NOTIFICATION_STYLES_ID, NOTIFICATION_STYLES);
        }
    }

    /// Displays a notification.
    ///
    /// It is inserted hidden, shown shortly after, and dismissed on its own
    /// once its lifetime runs out unless closed earlier.
    pub fn show_notification(&mut self, message: &str, severity: Severity) -> NotificationId {
        self.add_notification_styles();

        let id = self.notifications.create(message, severity);
        self.registry.append_notification(id, severity, message);

        self.scheduler
            .schedule(self.timing.notification_show(), Task::RevealNotification(id));
        let auto_hide = self
            .scheduler
            .schedule(self.timing.notification_auto_hide(), Task::AutoHideNotification(id));
        self.notifications.set_auto_hide(id, auto_hide);

        debug!(%id, severity = severity.as_str(), "Notification shown");
        id
    }

    /// Starts hiding a notification and schedules its removal.
    ///
    /// Cancels the pending auto-dismiss. Hiding an already hiding or
    /// removed notification does nothing.
    pub fn hide_notification(&mut self, id: NotificationId) {
        let Some(auto_hide) = self.notifications.begin_hide(id) else {
            return;
        };
        if let Some(timer) = auto_hide {
            self.scheduler.cancel(timer);
        }

        self.registry
            .remove_class(ElementId::Notification(id), CLASS_SHOW);
        self.scheduler
            .schedule(self.timing.notification_remove(), Task::RemoveNotification(id));
    }

    pub(super) fn reveal_notification(&mut self, id: NotificationId) {
        if self.notifications.reveal(id) {
            self.registry
                .add_class(ElementId::Notification(id), CLASS_SHOW);
        }
    }

    pub(super) fn remove_notification(&mut self, id: NotificationId) {
        self.notifications.finish(id);
        let element = ElementId::Notification(id);
        if self.registry.contains(element) {
            self.registry.remove_element(element);
            debug!(%id, "Notification removed");
        }
    }
}
