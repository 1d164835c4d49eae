use std::{
    collections::HashMap,
    sync::{Arc, Mutex, Weak},
};

type Entries = Mutex<HashMap<String, Arc<[u8]>>>;

/// Allocates locally resolvable handles for fetched binary data, the way a
/// browser hands out object URLs. Handles are a bounded resource: every
/// allocation must eventually be revoked, which [`DisplayRef`] does on drop.
#[derive(Clone, Default)]
pub struct DisplayRegistry {
    entries: Arc<Entries>,
}

impl DisplayRegistry {
    /// Register the bytes under a fresh opaque handle.
    #[must_use]
    pub fn allocate(&self, data: Arc<[u8]>) -> DisplayRef {
        let url = format!("blob:share-harness/{:016x}", rand::random::<u64>());
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .insert(url.clone(), data);
        tracing::debug!(url = %url, "allocated display reference");
        DisplayRef {
            url,
            entries: Arc::downgrade(&self.entries),
        }
    }

    /// Look up the bytes behind a handle, if it is still live.
    #[must_use]
    pub fn resolve(&self, url: &str) -> Option<Arc<[u8]>> {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(url)
            .cloned()
    }

    /// Number of handles currently live.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .len()
    }
}

/// An owned handle to registered display data. Revokes its registry entry
/// when dropped, so a superseded reference can never outlive its artifact.
#[derive(Debug)]
pub struct DisplayRef {
    url: String,
    entries: Weak<Entries>,
}

impl DisplayRef {
    /// The opaque locally resolvable handle for the data.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for DisplayRef {
    fn drop(&mut self) {
        if let Some(entries) = self.entries.upgrade() {
            entries
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner)
                .remove(&self.url);
            tracing::debug!(url = %self.url, "released display reference");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocate_resolve_and_release() {
        let registry = DisplayRegistry::default();
        let data: Arc<[u8]> = Arc::from(&b"bytes"[..]);

        let display = registry.allocate(Arc::clone(&data));
        assert_eq!(registry.live_count(), 1);
        assert_eq!(registry.resolve(display.url()), Some(data));

        let url = display.url().to_string();
        drop(display);
        assert_eq!(registry.live_count(), 0);
        assert_eq!(registry.resolve(&url), None);
    }

    #[test]
    fn handles_are_unique_per_allocation() {
        let registry = DisplayRegistry::default();
        let data: Arc<[u8]> = Arc::from(&b"bytes"[..]);
        let first = registry.allocate(Arc::clone(&data));
        let second = registry.allocate(data);
        assert_ne!(first.url(), second.url());
        assert_eq!(registry.live_count(), 2);
    }
}
