//! Per-route "last visited sub-panel" persistence.

use super::KeyValueStore;
use crate::core::RouteId;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Route -> id of the tab last visited on that route.
pub type PersistedPanelMap = BTreeMap<RouteId, String>;

/// Loads and saves the [`PersistedPanelMap`] as a JSON object under a fixed key.
///
/// Both operations are infallible from the caller's point of view: a missing,
/// unreadable or malformed record loads as an empty map, and a failed save is
/// dropped. The only consequence is that a remembered panel is forgotten.
///
/// # Example
///
/// ```rust
/// use navstate::core::RouteId;
/// use navstate::persistence::{MemoryStore, PanelPersistenceStore, PersistedPanelMap};
/// use std::sync::Arc;
///
/// let panels = PanelPersistenceStore::new(Arc::new(MemoryStore::new()), "lastVisitedSubPanels");
/// assert!(panels.load().is_empty());
///
/// let mut map = PersistedPanelMap::new();
/// map.insert(RouteId::new("hiring"), "candidates".to_string());
/// panels.save(&map);
///
/// assert_eq!(panels.load(), map);
/// ```
#[derive(Clone)]
pub struct PanelPersistenceStore {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl PanelPersistenceStore {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the persisted map, or an empty map on any failure.
    pub fn load(&self) -> PersistedPanelMap {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return PersistedPanelMap::new(),
            Err(e) => {
                tracing::debug!(key = %self.key, error = %e, "panel map unreadable, starting fresh");
                return PersistedPanelMap::new();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::debug!(key = %self.key, error = %e, "panel map malformed, starting fresh");
            PersistedPanelMap::new()
        })
    }

    /// Write the whole map back. Failures are logged and dropped.
    pub fn save(&self, panels: &PersistedPanelMap) {
        let json = match serde_json::to_string(panels) {
            Ok(json) => json,
            Err(e) => {
                tracing::debug!(key = %self.key, error = %e, "panel map not serializable, skipping save");
                return;
            }
        };

        if let Err(e) = self.store.set(&self.key, &json) {
            tracing::debug!(key = %self.key, error = %e, "panel map save failed");
        }
    }

    /// Forget every remembered panel.
    pub fn clear(&self) {
        if let Err(e) = self.store.remove(&self.key) {
            tracing::debug!(key = %self.key, error = %e, "panel map clear failed");
        }
    }
}

impl std::fmt::Debug for PanelPersistenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PanelPersistenceStore")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{MemoryStore, StorageError};

    const KEY: &str = "lastVisitedSubPanels";

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("quota exceeded".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("quota exceeded".to_string()))
        }

        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("quota exceeded".to_string()))
        }
    }

    fn map(entries: &[(&str, &str)]) -> PersistedPanelMap {
        entries
            .iter()
            .map(|(route, tab)| (RouteId::new(*route), tab.to_string()))
            .collect()
    }

    #[test]
    fn absent_record_loads_empty() {
        let panels = PanelPersistenceStore::new(Arc::new(MemoryStore::new()), KEY);
        assert!(panels.load().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let panels = PanelPersistenceStore::new(Arc::new(MemoryStore::new()), KEY);
        let expected = map(&[("hiring", "candidates"), ("settings", "benefits")]);

        panels.save(&expected);
        assert_eq!(panels.load(), expected);
    }

    #[test]
    fn record_is_a_plain_json_object() {
        let store = Arc::new(MemoryStore::new());
        let panels = PanelPersistenceStore::new(store.clone(), KEY);
        panels.save(&map(&[("hiring", "candidates")]));

        assert_eq!(
            store.get(KEY).unwrap().as_deref(),
            Some(r#"{"hiring":"candidates"}"#)
        );
    }

    #[test]
    fn corrupted_record_loads_empty() {
        for garbage in ["not json", "[1,2,3]", r#"{"hiring": 5}"#, "null", ""] {
            let store = Arc::new(MemoryStore::with_records([(KEY, garbage)]));
            let panels = PanelPersistenceStore::new(store, KEY);
            assert!(panels.load().is_empty(), "expected empty map for {garbage:?}");
        }
    }

    #[test]
    fn failing_backend_degrades_silently() {
        let panels = PanelPersistenceStore::new(Arc::new(BrokenStore), KEY);

        panels.save(&map(&[("hiring", "candidates")]));
        panels.clear();
        assert!(panels.load().is_empty());
    }

    #[test]
    fn clear_forgets_panels() {
        let panels = PanelPersistenceStore::new(Arc::new(MemoryStore::new()), KEY);
        panels.save(&map(&[("people", "org-chart")]));
        panels.clear();

        assert!(panels.load().is_empty());
    }
}
