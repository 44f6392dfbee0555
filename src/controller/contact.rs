//! Contact form submission and the shared loading overlay.

use anyhow::Result;
use tracing::info;

use super::{PageController, Task};
use crate::constants::{CLASS_SHOW, MSG_CONTACT_SENT, MSG_INVALID_EMAIL, MSG_MISSING_FIELDS};
use crate::dom::{ElementId, ElementRegistry, FormField};
use crate::notify::Severity;
use crate::storage::PreferenceStore;
use crate::validation::{ContactFields, ValidationError};

impl<R: ElementRegistry, S: PreferenceStore> PageController<R, S> {
    pub(super) fn setup_contact_form(&mut self) -> Result<()> {
        anyhow::ensure!(
            self.registry.contains(ElementId::ContactForm),
            "Contact form element is missing"
        );
        self.wiring.contact_form = true;
        Ok(())
    }

    /// Validates the contact form and starts the simulated submission.
    ///
    /// A rejected form shows an error notification and schedules nothing.
    pub fn handle_contact_submit(&mut self) -> Result<(), ValidationError> {
        let fields = ContactFields {
            name: self.registry.field_value(FormField::Name),
            email: self.registry.field_value(FormField::Email),
            subject: self.registry.field_value(FormField::Subject),
            message: self.registry.field_value(FormField::Message),
        };

        let submission = match fields.validate() {
            Ok(submission) => submission,
            Err(err) => {
                let message = match err {
                    ValidationError::MissingFields => MSG_MISSING_FIELDS,
                    ValidationError::InvalidEmail => MSG_INVALID_EMAIL,
                };
                self.show_notification(message, Severity::Error);
                return Err(err);
            }
        };

        info!(subject = %submission.subject, "Simulating contact form submission");
        self.show_loading();
        self.scheduler
            .schedule(self.timing.submit_delay(), Task::CompleteContactSubmit);
        Ok(())
    }

    pub(super) fn complete_contact_submit(&mut self) {
        self.hide_loading();
        self.show_notification(MSG_CONTACT_SENT, Severity::Success);
        self.registry.reset_form();
    }

    /// Shows the loading overlay.
    pub fn show_loading(&mut self) {
        self.registry.add_class(ElementId::LoadingOverlay, CLASS_SHOW);
        self.state.loading_visible = true;
    }

    /// Hides the loading overlay.
    pub fn hide_loading(&mut self) {
        self.registry
            .remove_class(ElementId::LoadingOverlay, CLASS_SHOW);
        self.state.loading_visible = false;
    }
}
