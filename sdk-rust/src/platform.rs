use serde::Serialize;

use crate::{ShareError, SharePayload};

/// The environment's share capability surface. Implementations wrap whatever
/// the host platform provides; tests substitute
/// [`crate::share_sdk_test::MockSharePlatform`].
///
/// Both entry points may be absent on a given platform, which is why the
/// trait carries presence checks alongside the operations themselves.
#[async_trait::async_trait]
pub trait SharePlatform: Send + Sync {
    /// Whether the platform exposes a share entry point at all.
    fn has_share(&self) -> bool;
    /// Whether the platform exposes a share-feasibility predicate.
    fn has_can_share(&self) -> bool;
    /// Ask the platform whether the payload is shareable, without sharing.
    /// Only meaningful when [`Self::has_can_share`] is true.
    fn can_share(&self, payload: &SharePayload) -> bool;
    /// Hand the payload to the platform's native share flow and wait for it
    /// to complete or fail. Cancellation by the user is a failure here.
    async fn share(&self, payload: SharePayload) -> Result<(), ShareError>;
}

/// Whether the environment supports sharing, decided once per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShareCapability {
    pub supported: bool,
}

impl ShareCapability {
    /// Inspect the platform for both entry points. Absence of either simply
    /// yields an unsupported capability; probing has no error conditions.
    #[must_use]
    pub fn probe(platform: &dyn SharePlatform) -> Self {
        let supported = platform.has_share() && platform.has_can_share();
        tracing::debug!(
            has_share = platform.has_share(),
            has_can_share = platform.has_can_share(),
            supported,
            "probed share capability"
        );
        Self { supported }
    }
}
