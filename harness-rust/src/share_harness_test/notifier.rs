use std::sync::Mutex;

use crate::{Notifier, OutcomeReport};

/// A notifier for testing that captures reports instead of presenting them.
#[derive(Default)]
pub struct RecordingNotifier {
    reports: Mutex<Vec<OutcomeReport>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieve the reports delivered so far.
    #[must_use]
    pub fn reports(&self) -> Vec<OutcomeReport> {
        let reports = self.reports.lock().expect("notifier state poisoned");
        reports.clone()
    }

    /// Retrieve the most recent report, if any.
    #[must_use]
    pub fn last_report(&self) -> Option<OutcomeReport> {
        let reports = self.reports.lock().expect("notifier state poisoned");
        reports.last().cloned()
    }

    /// Clear the captured reports.
    pub fn reset(&self) {
        let mut reports = self.reports.lock().expect("notifier state poisoned");
        reports.clear();
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, report: &OutcomeReport) {
        self.reports
            .lock()
            .expect("notifier state poisoned")
            .push(report.clone());
    }
}
