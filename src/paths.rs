//! Centralized path definitions for toolish
//!
//! This module provides a single source of truth for all filesystem paths
//! used by toolish.
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.toolish/                      # or $TOOLISH_HOME
//! ├── config.toml                  # User configuration
//! └── data/                        # Default data directory
//!     ├── workoutHistory.json
//!     ├── personalRecords.json
//!     └── workoutDates.json
//! ```

use std::env;
use std::path::PathBuf;

use chrono::NaiveDate;

/// Environment variable overriding the base directory
pub const HOME_ENV: &str = "TOOLISH_HOME";

/// Base directory name under the user's home
const BASE_DIR: &str = ".toolish";

/// Configuration filename
const CONFIG_FILE: &str = "config.toml";

/// Data subdirectory
const DATA_DIR: &str = "data";

/// Get the base directory.
///
/// Returns `$TOOLISH_HOME` if set, otherwise `~/.toolish/`.
#[must_use]
pub fn base_dir() -> PathBuf {
    env::var_os(HOME_ENV).filter(|v| !v.is_empty()).map_or_else(
        || dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(BASE_DIR),
        PathBuf::from,
    )
}

/// Get the configuration file path.
#[must_use]
pub fn config_file() -> PathBuf {
    base_dir().join(CONFIG_FILE)
}

/// Get the default data directory.
///
/// Used unless the configuration or the command line names another one.
#[must_use]
pub fn default_data_dir() -> PathBuf {
    base_dir().join(DATA_DIR)
}

/// File name for a history export made on `date`
#[must_use]
pub fn export_file_name(date: NaiveDate) -> String {
    format!("workout-history-{}.json", date.format("%Y-%m-%d"))
}
