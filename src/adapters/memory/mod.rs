//! In-memory key-value storage
//!
//! Holds blobs in a map for the lifetime of the value. Nothing touches disk.

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::core::ports::KeyValueStore;

/// Key-value storage held in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with blobs
    #[must_use]
    pub fn with_entries(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            entries: RefCell::new(entries.into_iter().collect()),
        }
    }

    /// Whether no blob is stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Stored keys, sorted
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.entries.borrow().keys().cloned().collect()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn commit(&self, entries: &[(&str, String)]) -> anyhow::Result<()> {
        let mut stored = self.entries.borrow_mut();
        for (key, value) in entries {
            stored.insert((*key).to_string(), value.clone());
        }
        Ok(())
    }

    fn remove(&self, keys: &[&str]) -> anyhow::Result<()> {
        let mut stored = self.entries.borrow_mut();
        for key in keys {
            stored.remove(*key);
        }
        Ok(())
    }
}
