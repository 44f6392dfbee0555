//! Simulated CV download.

use anyhow::Result;
use tracing::info;

use super::{PageController, Task};
use crate::constants::{CV_LABEL_IDLE, CV_LABEL_PREPARING, MSG_CV_PLACEHOLDER};
use crate::dom::{ElementId, ElementRegistry};
use crate::notify::Severity;
use crate::storage::PreferenceStore;

impl<R: ElementRegistry, S: PreferenceStore> PageController<R, S> {
    pub(super) fn setup_download_cv(&mut self) -> Result<()> {
        anyhow::ensure!(
            self.registry.contains(ElementId::DownloadCv),
            "CV download button is missing"
        );
        self.wiring.download_cv = true;
        Ok(())
    }

    /// Shows the preparing state, then reports that downloads are not available yet.
    pub fn handle_download_cv(&mut self) {
        info!("Preparing CV download");
        self.show_loading();
        self.registry
            .set_text(ElementId::DownloadCv, CV_LABEL_PREPARING);
        self.registry.set_disabled(ElementId::DownloadCv, true);

        self.scheduler
            .schedule(self.timing.cv_delay(), Task::CompleteCvDownload);
    }

    pub(super) fn complete_cv_download(&mut self) {
        self.hide_loading();
        self.registry.set_text(ElementId::DownloadCv, CV_LABEL_IDLE);
        self.registry.set_disabled(ElementId::DownloadCv, false);
        self.show_notification(MSG_CV_PLACEHOLDER, Severity::Info);
    }
}
