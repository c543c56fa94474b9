use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use nt_core::{Error, KeyValueStore, Result};

#[derive(Debug, Default)]
struct MemoryState {
    values: HashMap<String, String>,
    read_only: bool,
}

/// Process-local store. Clones share the same underlying map, so a fresh
/// `BookmarkStore` opened on a clone sees everything written so far.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<MemoryState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `set` fail, as a disabled or full device store would.
    pub fn set_read_only(&self, read_only: bool) {
        match self.state.write() {
            Ok(mut state) => state.read_only = read_only,
            Err(poisoned) => poisoned.into_inner().read_only = read_only,
        }
    }

    /// Store a raw value without going through the read-only check.
    pub fn seed(&self, key: &str, value: &str) {
        match self.state.write() {
            Ok(mut state) => {
                state.values.insert(key.to_string(), value.to_string());
            }
            Err(poisoned) => {
                poisoned
                    .into_inner()
                    .values
                    .insert(key.to_string(), value.to_string());
            }
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let state = self
            .state
            .read()
            .map_err(|_| Error::Storage("memory store lock poisoned".to_string()))?;
        Ok(state.values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut state = self
            .state
            .write()
            .map_err(|_| Error::Storage("memory store lock poisoned".to_string()))?;
        if state.read_only {
            return Err(Error::StorageUnavailable(format!(
                "memory store is read-only, cannot write '{}'",
                key
            )));
        }
        state.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert_eq!(store.get("bookmarks").unwrap(), None);

        store.set("bookmarks", "[]").unwrap();
        assert_eq!(store.get("bookmarks").unwrap().as_deref(), Some("[]"));

        let handle = store.clone();
        handle.set("darkMode", "true").unwrap();
        assert_eq!(store.get("darkMode").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_read_only_rejects_writes() {
        let store = MemoryStore::new();
        store.set("darkMode", "false").unwrap();
        store.set_read_only(true);

        let result = store.set("darkMode", "true");
        assert!(matches!(result, Err(Error::StorageUnavailable(_))));
        assert_eq!(store.get("darkMode").unwrap().as_deref(), Some("false"));

        store.set_read_only(false);
        assert!(store.set("darkMode", "true").is_ok());
    }
}
