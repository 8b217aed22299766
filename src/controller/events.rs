//! State-change notifications.
//!
//! Shells subscribe to the controller instead of polling shared storage for
//! changes. Delivery is synchronous and in registration order, on the thread
//! that performed the navigation.

use crate::core::NavigationState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// What triggered a state change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavigationCause {
    Route,
    Tab,
    SubTab,
    Breadcrumb(usize),
}

/// Record of a single state transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateChange {
    /// The state being transitioned from
    pub from: NavigationState,
    /// The state being transitioned to
    pub to: NavigationState,
    pub cause: NavigationCause,
    /// When the transition occurred
    pub at: DateTime<Utc>,
}

/// Handle returned by [`EventBus::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

type Listener<E> = Box<dyn Fn(&E) + Send + Sync>;

/// Minimal in-process publish/subscribe channel.
///
/// # Example
///
/// ```rust
/// use navstate::controller::EventBus;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let mut bus: EventBus<u32> = EventBus::new();
/// let total = Arc::new(AtomicUsize::new(0));
///
/// let sink = Arc::clone(&total);
/// let id = bus.subscribe(move |n| {
///     sink.fetch_add(*n as usize, Ordering::SeqCst);
/// });
///
/// bus.publish(&3);
/// assert!(bus.unsubscribe(id));
/// bus.publish(&4);
///
/// assert_eq!(total.load(Ordering::SeqCst), 3);
/// ```
pub struct EventBus<E> {
    listeners: Vec<(SubscriptionId, Listener<E>)>,
}

impl<E> EventBus<E> {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        let id = SubscriptionId(Uuid::new_v4());
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn publish(&self, event: &E) {
        tracing::trace!(listeners = self.listeners.len(), "publishing event");
        for (_, listener) in &self.listeners {
            listener(event);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<E> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for EventBus<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
