//! Best-effort durable storage for navigation preferences.
//!
//! The controller never talks to a storage backend directly. It is handed a
//! [`KeyValueStore`] at construction, and the typed stores in this module
//! ([`PanelPersistenceStore`], [`RailPreferenceStore`]) layer serialization
//! and fault tolerance on top of it. Every failure degrades to "start fresh";
//! nothing here surfaces an error to the controller.

mod error;
mod file;
mod memory;
mod panels;
mod rail;

pub use error::StorageError;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use panels::{PanelPersistenceStore, PersistedPanelMap};
pub use rail::RailPreferenceStore;

/// Durable text records addressed by key.
///
/// Implementations take `&self` so one backend can be shared between the
/// controller and other stores behind an `Arc`.
pub trait KeyValueStore: Send + Sync {
    /// Read the record at `key`, `Ok(None)` when absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the record at `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the record at `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
