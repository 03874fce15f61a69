//! The snapshot store abstraction.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StoreError;

/// Keyed storage for engine snapshots.
///
/// Keys are plain names like `"cart"` or `"orders"`; each key holds at most
/// one snapshot, and saving overwrites any previous value.
pub trait SnapshotStore {
    /// Persist `value` under `key`, replacing any existing snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the snapshot cannot be serialized or
    /// written.
    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError>;

    /// Load the snapshot stored under `key`.
    ///
    /// Returns `None` when no snapshot exists or when the stored data cannot
    /// be read or decoded; implementations log a warning in the latter case
    /// so the caller can fall back to a fresh engine.
    fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T>;
}
