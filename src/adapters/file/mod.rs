//! File-based key-value storage
//!
//! Implements `KeyValueStore` with one `<key>.json` file per key inside a data
//! directory. A commit writes every blob to a `.tmp` sibling first and only
//! renames them into place once all writes succeeded. The blobs being
//! replaced are moved to `.bak` siblings meanwhile, and moved back if any
//! rename fails.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::core::ports::KeyValueStore;

const BLOB_EXTENSION: &str = "json";
const TEMP_EXTENSION: &str = "json.tmp";
const BACKUP_EXTENSION: &str = "json.bak";

/// Key-value storage backed by JSON files
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Store blobs in `dir` (created on first write)
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The data directory
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.{BLOB_EXTENSION}"))
    }

    fn temp_path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.{TEMP_EXTENSION}"))
    }

    fn backup_path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.{BACKUP_EXTENSION}"))
    }

    fn discard_temp_files(&self, keys: &[&str]) {
        for key in keys {
            let _ = fs::remove_file(self.temp_path_for(key));
        }
    }

    /// Rename every temp file into place, or none of them
    fn swap_in(&self, keys: &[&str]) -> anyhow::Result<()> {
        let mut swapped = Vec::with_capacity(keys.len());
        for key in keys {
            match self.swap_in_one(key) {
                Ok(had_previous) => swapped.push((*key, had_previous)),
                Err(e) => {
                    self.roll_back(&swapped);
                    return Err(e);
                },
            }
        }

        for (key, had_previous) in swapped {
            if had_previous {
                let _ = fs::remove_file(self.backup_path_for(key));
            }
        }
        Ok(())
    }

    /// Returns whether a previous blob was moved to its backup
    fn swap_in_one(&self, key: &str) -> anyhow::Result<bool> {
        let target = self.path_for(key);
        let backup = self.backup_path_for(key);

        let had_previous = target.exists();
        if had_previous {
            fs::rename(&target, &backup)
                .with_context(|| format!("failed to back up {}", target.display()))?;
        }

        if let Err(e) = fs::rename(self.temp_path_for(key), &target) {
            if had_previous {
                let _ = fs::rename(&backup, &target);
            }
            return Err(e).with_context(|| format!("failed to replace {}", target.display()));
        }
        Ok(had_previous)
    }

    fn roll_back(&self, swapped: &[(&str, bool)]) {
        for (key, had_previous) in swapped.iter().rev() {
            let target = self.path_for(key);
            let restored = if *had_previous {
                fs::rename(self.backup_path_for(key), &target)
            } else {
                fs::remove_file(&target)
            };
            if let Err(e) = restored {
                log::warn!("Failed to roll back {}: {e}", target.display());
            }
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("failed to read {}", path.display())),
        }
    }

    fn commit(&self, entries: &[(&str, String)]) -> anyhow::Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create {}", self.dir.display()))?;

        let keys: Vec<&str> = entries.iter().map(|(key, _)| *key).collect();
        for (key, value) in entries {
            let temp = self.temp_path_for(key);
            if let Err(e) = fs::write(&temp, value) {
                self.discard_temp_files(&keys);
                return Err(e).with_context(|| format!("failed to write {}", temp.display()));
            }
        }

        if let Err(e) = self.swap_in(&keys) {
            self.discard_temp_files(&keys);
            return Err(e);
        }

        log::debug!("Committed {} blob(s) to {}", entries.len(), self.dir.display());
        Ok(())
    }

    fn remove(&self, keys: &[&str]) -> anyhow::Result<()> {
        for key in keys {
            let path = self.path_for(key);
            match fs::remove_file(&path) {
                Ok(()) => {},
                Err(e) if e.kind() == ErrorKind::NotFound => {},
                Err(e) => {
                    return Err(e).with_context(|| format!("failed to remove {}", path.display()));
                },
            }
        }
        Ok(())
    }
}
