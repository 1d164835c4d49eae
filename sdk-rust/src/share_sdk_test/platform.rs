use std::{collections::VecDeque, sync::Mutex};

use crate::{
    errors::ShareError,
    payload::SharePayload,
    platform::SharePlatform,
};

/// Result for a mocked `share` call.
/// It can either complete the share flow or fail with a platform error.
pub enum MockShareResult {
    Shared,
    Error(ShareError),
}

impl MockShareResult {
    /// Construct a result that completes successfully.
    #[must_use]
    pub fn shared() -> Self {
        Self::Shared
    }

    /// Construct a result that fails with the provided error.
    #[must_use]
    pub fn error(error: ShareError) -> Self {
        Self::Error(error)
    }
}

impl From<ShareError> for MockShareResult {
    fn from(error: ShareError) -> Self {
        Self::error(error)
    }
}

impl From<Result<(), ShareError>> for MockShareResult {
    fn from(result: Result<(), ShareError>) -> Self {
        match result {
            Ok(()) => Self::Shared,
            Err(error) => Self::Error(error),
        }
    }
}

#[derive(Default)]
struct MockSharePlatformState {
    mocked_share_results: VecDeque<MockShareResult>,
    tracked_share_payloads: Vec<SharePayload>,
    tracked_can_share_payloads: Vec<SharePayload>,
}

impl MockSharePlatformState {
    fn reset(&mut self) {
        self.tracked_share_payloads.clear();
        self.tracked_can_share_payloads.clear();
    }

    fn restore(&mut self) {
        self.mocked_share_results.clear();
        self.reset();
    }
}

/// A mock share platform for testing that tracks the payloads it receives
/// and yields predefined share outcomes. Entry-point presence and the
/// feasibility answer are plain knobs so tests can model any environment.
pub struct MockSharePlatform {
    has_share: bool,
    has_can_share: bool,
    can_share_answer: bool,
    state: Mutex<MockSharePlatformState>,
}

impl Default for MockSharePlatform {
    fn default() -> Self {
        Self {
            has_share: true,
            has_can_share: true,
            can_share_answer: true,
            state: Mutex::new(MockSharePlatformState::default()),
        }
    }
}

impl MockSharePlatform {
    /// Construct a mock with both entry points present and a permissive
    /// feasibility predicate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove or restore the share entry point.
    #[must_use]
    pub fn with_share_entry_point(mut self, present: bool) -> Self {
        self.has_share = present;
        self
    }

    /// Remove or restore the feasibility predicate.
    #[must_use]
    pub fn with_can_share_entry_point(mut self, present: bool) -> Self {
        self.has_can_share = present;
        self
    }

    /// Fix the answer the feasibility predicate gives for every payload.
    #[must_use]
    pub fn with_can_share_answer(mut self, answer: bool) -> Self {
        self.can_share_answer = answer;
        self
    }

    /// Enqueue one or more mocked share results.
    pub fn enqueue_share_results<I>(&self, results: I) -> &Self
    where
        I: IntoIterator<Item = MockShareResult>,
    {
        let mut state = self.state.lock().expect("mock state poisoned");
        for result in results {
            state.mocked_share_results.push_back(result);
        }
        drop(state);
        self
    }

    /// Convenience to enqueue a single mocked share result.
    pub fn enqueue_share<R>(&self, result: R) -> &Self
    where
        R: Into<MockShareResult>,
    {
        self.enqueue_share_results(std::iter::once(result.into()))
    }

    /// Retrieve the payloads handed to `share` so far.
    #[must_use]
    pub fn tracked_share_payloads(&self) -> Vec<SharePayload> {
        let state = self.state.lock().expect("mock state poisoned");
        state.tracked_share_payloads.clone()
    }

    /// Retrieve the payloads handed to `can_share` so far.
    #[must_use]
    pub fn tracked_can_share_payloads(&self) -> Vec<SharePayload> {
        let state = self.state.lock().expect("mock state poisoned");
        state.tracked_can_share_payloads.clone()
    }

    /// Reset tracked payloads without touching enqueued results.
    pub fn reset(&self) {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.reset();
    }

    /// Clear both tracked payloads and enqueued results.
    pub fn restore(&self) {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.restore();
    }
}

#[async_trait::async_trait]
impl SharePlatform for MockSharePlatform {
    fn has_share(&self) -> bool {
        self.has_share
    }

    fn has_can_share(&self) -> bool {
        self.has_can_share
    }

    fn can_share(&self, payload: &SharePayload) -> bool {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.tracked_can_share_payloads.push(payload.clone());
        self.can_share_answer
    }

    async fn share(&self, payload: SharePayload) -> Result<(), ShareError> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.tracked_share_payloads.push(payload);

        // An empty queue means the test did not care about the outcome;
        // default to a completed share flow.
        match state.mocked_share_results.pop_front() {
            None | Some(MockShareResult::Shared) => Ok(()),
            Some(MockShareResult::Error(error)) => Err(error),
        }
    }
}
