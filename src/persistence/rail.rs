//! Persistence of the navigation rail's expanded flag.

use super::KeyValueStore;
use std::sync::Arc;

/// Loads and saves the "navigation rail expanded" flag.
///
/// Same best-effort contract as the panel store: anything unreadable loads
/// as collapsed (`false`), and failed writes are dropped.
#[derive(Clone)]
pub struct RailPreferenceStore {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl RailPreferenceStore {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn load(&self) -> bool {
        match self.store.get(&self.key) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::debug!(key = %self.key, error = %e, "rail flag malformed, using collapsed");
                false
            }),
            Ok(None) => false,
            Err(e) => {
                tracing::debug!(key = %self.key, error = %e, "rail flag unreadable, using collapsed");
                false
            }
        }
    }

    pub fn save(&self, expanded: bool) {
        let raw = if expanded { "true" } else { "false" };
        if let Err(e) = self.store.set(&self.key, raw) {
            tracing::debug!(key = %self.key, error = %e, "rail flag save failed");
        }
    }
}

impl std::fmt::Debug for RailPreferenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RailPreferenceStore")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}
