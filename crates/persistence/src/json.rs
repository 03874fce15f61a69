//! File-backed JSON snapshot storage.

use std::fs;
use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::StoreError;
use crate::store::SnapshotStore;

/// A snapshot store that keeps one pretty-printed JSON file per key.
///
/// A key `"cart"` maps to `<base>/cart.json`. The base directory is created
/// on the first save.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    base: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `base`.
    #[must_use]
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base.join(format!("{key}.json"))
    }
}

impl SnapshotStore for JsonFileStore {
    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(value)?;
        fs::create_dir_all(&self.base)?;
        let path = self.path_for(key);
        fs::write(&path, json)?;
        debug!(key, path = %path.display(), "snapshot saved");
        Ok(())
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.path_for(key);
        if !path.exists() {
            return None;
        }
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(key, path = %path.display(), %err, "snapshot unreadable, ignoring");
                return None;
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(key, path = %path.display(), %err, "snapshot corrupt, ignoring");
                None
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());

        let sample = Sample {
            name: "espresso".to_owned(),
            count: 3,
        };
        store.save("cart", &sample).unwrap();

        let loaded: Sample = store.load("cart").unwrap();
        assert_eq!(loaded, sample);
    }

    #[test]
    fn test_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());

        store
            .save(
                "cart",
                &Sample {
                    name: "old".to_owned(),
                    count: 1,
                },
            )
            .unwrap();
        store
            .save(
                "cart",
                &Sample {
                    name: "new".to_owned(),
                    count: 2,
                },
            )
            .unwrap();

        let loaded: Sample = store.load("cart").unwrap();
        assert_eq!(loaded.name, "new");
    }

    #[test]
    fn test_missing_key_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        assert!(store.load::<Sample>("absent").is_none());
    }

    #[test]
    fn test_corrupt_file_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        fs::write(dir.path().join("cart.json"), b"{not json").unwrap();
        assert!(store.load::<Sample>("cart").is_none());
    }

    #[test]
    fn test_keys_are_independent() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());

        store
            .save(
                "a",
                &Sample {
                    name: "a".to_owned(),
                    count: 1,
                },
            )
            .unwrap();
        assert!(store.load::<Sample>("b").is_none());
    }
}
