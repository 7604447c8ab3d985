//! Shared setup for commands that touch tracked data

use std::path::PathBuf;

use toolish::adapters::JsonFileStore;
use toolish::catalog::Catalog;
use toolish::config::Config;
use toolish::store::WorkoutStore;

/// Loaded configuration, catalog and store
#[derive(Debug)]
pub struct Context {
    pub config: Config,
    pub catalog: Catalog,
    pub store: WorkoutStore<JsonFileStore>,
}

impl Context {
    /// Load everything a command needs
    ///
    /// `data_dir` from the command line wins over the configured directory.
    pub fn open(data_dir: Option<PathBuf>) -> anyhow::Result<Self> {
        let config = Config::load();
        let catalog = config.catalog()?;
        let dir = data_dir.unwrap_or_else(|| config.data_dir());
        log::debug!("Using data directory {}", dir.display());

        let store = WorkoutStore::open(JsonFileStore::new(dir))?;
        Ok(Self {
            config,
            catalog,
            store,
        })
    }
}
