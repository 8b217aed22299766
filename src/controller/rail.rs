//! Expanded/collapsed state of the navigation rail.
//!
//! Independent shell fragments observe the rail through [`NavRail::subscribe`]
//! rather than polling storage for the flag.

use crate::controller::events::{EventBus, SubscriptionId};
use crate::persistence::{KeyValueStore, RailPreferenceStore};
use std::sync::Arc;

/// Shared toggle for the navigation rail, optionally persisted.
///
/// # Example
///
/// ```rust
/// use navstate::controller::NavRail;
/// use navstate::persistence::MemoryStore;
/// use std::sync::Arc;
///
/// let store = Arc::new(MemoryStore::new());
///
/// let mut rail = NavRail::with_store(store.clone(), "navRailExpanded");
/// assert!(!rail.is_expanded());
/// rail.toggle();
///
/// let reopened = NavRail::with_store(store, "navRailExpanded");
/// assert!(reopened.is_expanded());
/// ```
#[derive(Debug, Default)]
pub struct NavRail {
    expanded: bool,
    store: Option<RailPreferenceStore>,
    events: EventBus<bool>,
}

impl NavRail {
    /// Collapsed rail that is not persisted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rail restored from, and written through to, `store`.
    pub fn with_store(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let store = RailPreferenceStore::new(store, key);
        Self {
            expanded: store.load(),
            store: Some(store),
            events: EventBus::new(),
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Set the flag; persists and notifies only when it actually changes.
    pub fn set_expanded(&mut self, expanded: bool) {
        if self.expanded == expanded {
            return;
        }

        self.expanded = expanded;
        if let Some(store) = &self.store {
            store.save(expanded);
        }
        tracing::debug!(expanded, "navigation rail toggled");
        self.events.publish(&expanded);
    }

    /// Flip the flag and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.set_expanded(!self.expanded);
        self.expanded
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&bool) + Send + Sync + 'static,
    {
        self.events.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }
}
