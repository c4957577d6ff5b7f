use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::kv::{KeyValueStore, StorageError};

/// In-memory KeyValueStore for testing and as a non-persistent fallback.
///
/// Clones share the same underlying map, so a test can keep a handle and
/// inspect what a store wrote.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StorageError> {
        self.entries.lock().map_err(|_| StorageError::Unavailable)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert!(store.get("k").is_none());

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v"));

        store.set("k", "w").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("w"));

        store.remove("k").unwrap();
        assert!(store.get("k").is_none());
    }

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let handle = store.clone();
        store.set("shared", "yes").unwrap();
        assert_eq!(handle.get("shared").as_deref(), Some("yes"));
    }
}
