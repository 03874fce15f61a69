//! In-memory snapshot storage.

use std::collections::HashMap;
use std::sync::Mutex;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::StoreError;
use crate::store::SnapshotStore;

/// A snapshot store backed by an in-process map.
///
/// Values are kept as serialized JSON so that loads exercise the same decode
/// path as the file-backed store. Intended for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemoryStore {
    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_string(value)?;
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_owned(), json);
        Ok(())
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        let json = entries.get(key)?;
        match serde_json::from_str(json) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(key, %err, "snapshot corrupt, ignoring");
                None
            }
        }
    }
}
