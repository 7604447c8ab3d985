//! Global configuration management
//!
//! Provides persistent storage for user preferences.
//! Config is stored at `~/.toolish/config.toml` (or under `$TOOLISH_HOME`).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, CatalogError};
use crate::core::services::{DEFAULT_DATE_FORMAT, is_valid_date_format};
use crate::paths;
use crate::store::DEFAULT_RECENT_LIMIT;

/// Global toolish configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Where tracked data lives
    #[serde(default)]
    pub storage: StorageConfig,
    /// How dates are shown
    #[serde(default)]
    pub display: DisplayConfig,
    /// Which program is tracked
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Storage settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Data directory (None = `<base>/data`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

/// Display preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// chrono format string for completion dates
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// Number of completion dates shown per day
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

const fn default_recent_limit() -> usize {
    DEFAULT_RECENT_LIMIT
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            recent_limit: default_recent_limit(),
        }
    }
}

/// Catalog selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Custom catalog file (None = built-in program)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Config {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::config_file()
    }

    /// Load config from disk, or use defaults if it does not exist
    ///
    /// An unreadable or malformed file is reported and ignored.
    #[must_use]
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            return Self::default();
        }
        Self::load_from(&path).unwrap_or_else(|e| {
            log::warn!("Ignoring config {}: {e:#}", path.display());
            Self::default()
        })
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Data directory to use
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.storage.data_dir.clone().unwrap_or_else(paths::default_data_dir)
    }

    /// The configured catalog, or the built-in one
    pub fn catalog(&self) -> Result<Catalog, CatalogError> {
        self.catalog.path.as_deref().map_or_else(Catalog::builtin, Catalog::load)
    }

    /// Date format to display with
    ///
    /// Falls back to the default when the configured one is not a valid
    /// chrono format.
    #[must_use]
    pub fn date_format(&self) -> &str {
        if is_valid_date_format(&self.display.date_format) {
            &self.display.date_format
        } else {
            log::warn!(
                "Invalid date format '{}', using '{DEFAULT_DATE_FORMAT}'",
                self.display.date_format
            );
            DEFAULT_DATE_FORMAT
        }
    }
}
