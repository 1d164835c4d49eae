use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use share_sdk::{
    DisplayRegistry, FetchResult, FetchedArtifact, ImageFetcher, ShareCapability, SharePlatform,
    DEFAULT_IMAGE_URL,
};

use crate::{dispatch::ShareDispatcher, notifier::Notifier, OutcomeReport};

/// Construction parameters for a [`HarnessSession`]. The platform and the
/// notifier are injected so the harness can run against the real environment
/// or a substitutable fake.
pub struct HarnessParams {
    pub platform: Arc<dyn SharePlatform>,
    pub notifier: Arc<dyn Notifier>,
    pub image_url: String,
}

impl HarnessParams {
    pub fn new(platform: Arc<dyn SharePlatform>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            platform,
            notifier,
            image_url: DEFAULT_IMAGE_URL.to_string(),
        }
    }

    /// Override the image endpoint the session downloads from.
    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }
}

#[derive(Default)]
struct SessionState {
    capability: Option<ShareCapability>,
    artifact: Option<Arc<FetchedArtifact>>,
    downloading: bool,
}

/// One operator session: the probed capability, the current artifact, and
/// the download-in-flight flag. Single operator, so a plain mutex guards the
/// state; the lock is never held across an await point.
pub struct HarnessSession {
    platform: Arc<dyn SharePlatform>,
    notifier: Arc<dyn Notifier>,
    dispatcher: ShareDispatcher,
    fetcher: ImageFetcher,
    registry: DisplayRegistry,
    image_url: String,
    state: Mutex<SessionState>,
}

impl HarnessSession {
    #[must_use]
    pub fn new(params: HarnessParams) -> Self {
        let registry = DisplayRegistry::default();
        let dispatcher = ShareDispatcher::new(
            Arc::clone(&params.platform),
            Arc::clone(&params.notifier),
            params.image_url.clone(),
        );
        Self {
            platform: params.platform,
            notifier: params.notifier,
            dispatcher,
            fetcher: ImageFetcher::new(registry.clone()),
            registry,
            image_url: params.image_url,
            state: Mutex::new(SessionState::default()),
        }
    }

    /// Inspect the platform for the share entry points. Runs at most once;
    /// subsequent calls return the capability computed the first time.
    pub fn probe(&self) -> ShareCapability {
        let mut state = self.lock();
        *state
            .capability
            .get_or_insert_with(|| ShareCapability::probe(self.platform.as_ref()))
    }

    /// The probed capability, or `None` before [`Self::probe`] has run.
    #[must_use]
    pub fn capability(&self) -> Option<ShareCapability> {
        self.lock().capability
    }

    /// Download the sample image and make it the current artifact, replacing
    /// (and thereby releasing the display reference of) any previous one.
    ///
    /// A call while another download is in flight is a no-op: overlapping
    /// fetches have no merge semantics, so re-entry is debounced away. On
    /// failure the previous artifact is kept so a failed retry never destroys
    /// working state; the failure is still reported through the notifier.
    pub async fn download(&self) -> FetchResult<()> {
        {
            let mut state = self.lock();
            if state.downloading {
                tracing::debug!("download already in flight, ignoring");
                return Ok(());
            }
            state.downloading = true;
        }

        let result = self.fetcher.fetch(&self.image_url).await;

        let mut state = self.lock();
        state.downloading = false;
        match result {
            Ok(artifact) => {
                state.artifact = Some(Arc::new(artifact));
                Ok(())
            }
            Err(err) => {
                drop(state);
                self.notifier.notify(&OutcomeReport::failed(
                    "download",
                    format!("Error downloading image: {err}"),
                ));
                Err(err)
            }
        }
    }

    /// Dispatch one share attempt for the named method against the artifact
    /// and capability current at this moment.
    pub async fn dispatch(&self, method: &str) -> OutcomeReport {
        let (capability, artifact) = {
            let state = self.lock();
            (state.capability, state.artifact.clone())
        };
        self.dispatcher
            .dispatch(method, artifact.as_deref(), capability)
            .await
    }

    /// The display handle of the current artifact, for rendering it.
    #[must_use]
    pub fn display_url(&self) -> Option<String> {
        self.lock()
            .artifact
            .as_ref()
            .map(|artifact| artifact.display.url().to_string())
    }

    /// The registry the session's display references live in.
    #[must_use]
    pub fn display_registry(&self) -> &DisplayRegistry {
        &self.registry
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
