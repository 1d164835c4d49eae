use std::sync::Arc;

use reqwest::Client;

use crate::{
    display::{DisplayRef, DisplayRegistry},
    errors::{FetchError, FetchResult},
};

/// The default image endpoint the harness downloads from.
pub const DEFAULT_IMAGE_URL: &str = "https://picsum.photos/200";

/// A downloaded binary resource: the bytes plus a locally resolvable display
/// handle. Exactly one artifact is current per session; replacing it drops
/// the old [`DisplayRef`], which revokes the superseded handle.
#[derive(Debug)]
pub struct FetchedArtifact {
    pub data: Arc<[u8]>,
    pub display: DisplayRef,
}

/// Downloads binary resources and materializes them as artifacts. Holds a
/// reused HTTP client and the registry display references are allocated from.
pub struct ImageFetcher {
    client: Client,
    registry: DisplayRegistry,
}

impl ImageFetcher {
    #[must_use]
    pub fn new(registry: DisplayRegistry) -> Self {
        Self {
            client: Client::new(),
            registry,
        }
    }

    /// GET the resource and materialize the full body. Any non-2xx status is
    /// a [`FetchError::Status`]; the body is treated as opaque binary.
    pub async fn fetch(&self, url: &str) -> FetchResult<FetchedArtifact> {
        tracing::debug!(url, "fetching image");
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let bytes = response.bytes().await?;
        let data: Arc<[u8]> = Arc::from(bytes.as_ref());
        let display = self.registry.allocate(Arc::clone(&data));
        tracing::debug!(url, bytes = data.len(), "image fetched");

        Ok(FetchedArtifact { data, display })
    }
}
