//! Key-value store port
//!
//! The tracker persists three JSON blobs under fixed string keys. Anything
//! that can hold string values under string keys can back it.

/// String-keyed blob storage
pub trait KeyValueStore {
    /// Read the blob stored under `key`, `None` if absent
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;

    /// Write several blobs as one commit
    ///
    /// Implementations must not leave a mix of old and new blobs visible if
    /// the commit fails part-way.
    fn commit(&self, entries: &[(&str, String)]) -> anyhow::Result<()>;

    /// Remove the given keys. Missing keys are not an error.
    fn remove(&self, keys: &[&str]) -> anyhow::Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        (**self).get(key)
    }

    fn commit(&self, entries: &[(&str, String)]) -> anyhow::Result<()> {
        (**self).commit(entries)
    }

    fn remove(&self, keys: &[&str]) -> anyhow::Result<()> {
        (**self).remove(keys)
    }
}
