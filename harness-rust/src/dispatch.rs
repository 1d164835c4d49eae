use std::sync::Arc;

use share_sdk::{FetchedArtifact, ShareCapability, SharePayload, SharePlatform};

use crate::{notifier::Notifier, OutcomeReport};

/// Builds the payload for a named share method and hands it to the platform,
/// turning every outcome into an [`OutcomeReport`] delivered through the
/// notifier. Never panics and never propagates a platform failure: a share
/// that goes wrong leaves the session fully usable.
pub struct ShareDispatcher {
    platform: Arc<dyn SharePlatform>,
    notifier: Arc<dyn Notifier>,
    image_url: String,
}

impl ShareDispatcher {
    #[must_use]
    pub fn new(
        platform: Arc<dyn SharePlatform>,
        notifier: Arc<dyn Notifier>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            platform,
            notifier,
            image_url: image_url.into(),
        }
    }

    /// Dispatch one share attempt. Preconditions are checked in order and
    /// each short-circuits before any payload is constructed:
    /// probe completed, environment supported, artifact present.
    pub async fn dispatch(
        &self,
        method: &str,
        artifact: Option<&FetchedArtifact>,
        capability: Option<ShareCapability>,
    ) -> OutcomeReport {
        let report = self.run(method, artifact, capability).await;
        tracing::debug!(method, status = ?report.status, "share dispatched");
        self.notifier.notify(&report);
        report
    }

    async fn run(
        &self,
        method: &str,
        artifact: Option<&FetchedArtifact>,
        capability: Option<ShareCapability>,
    ) -> OutcomeReport {
        let Some(capability) = capability else {
            return OutcomeReport::failed(method, "Session not ready yet; probe has not run");
        };
        if !capability.supported {
            return OutcomeReport::unsupported(
                method,
                "Share capability not supported on this device/browser",
            );
        }
        let Some(artifact) = artifact else {
            return OutcomeReport::failed(method, "No artifact; download the image first");
        };

        let payload = SharePayload::for_method(method, &self.image_url, artifact);

        // The predicate presence is re-checked here rather than inferred from
        // the probe, so an injected capability without a predicate still
        // reaches the share entry point.
        if self.platform.has_can_share() && !self.platform.can_share(&payload) {
            let diagnostic = serde_json::to_string_pretty(&payload.to_diagnostic())
                .unwrap_or_default();
            return OutcomeReport::unsupported(
                method,
                format!("Cannot share this data combination ({method}). Data: {diagnostic}"),
            );
        }

        match self.platform.share(payload).await {
            Ok(()) => {
                OutcomeReport::success(method, format!("Successfully shared using method: {method}"))
            }
            Err(err) => OutcomeReport::failed(
                method,
                format!("Error sharing ({method}): {} (name: {})", err.message, err.name),
            ),
        }
    }
}
