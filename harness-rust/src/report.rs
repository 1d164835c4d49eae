use std::fmt;

use serde::Serialize;

/// How one share dispatch turned out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    Success,
    Unsupported,
    Failed,
}

/// The result of one share dispatch (or a failed download), surfaced to the
/// operator through the notifier and never retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutcomeReport {
    pub method: String,
    pub status: OutcomeStatus,
    pub detail: String,
}

impl OutcomeReport {
    pub fn success(method: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            status: OutcomeStatus::Success,
            detail: detail.into(),
        }
    }

    pub fn unsupported(method: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            status: OutcomeStatus::Unsupported,
            detail: detail.into(),
        }
    }

    pub fn failed(method: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            status: OutcomeStatus::Failed,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for OutcomeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match self.status {
            OutcomeStatus::Success => "success",
            OutcomeStatus::Unsupported => "unsupported",
            OutcomeStatus::Failed => "failed",
        };
        write!(f, "[{status}] {}: {}", self.method, self.detail)
    }
}
