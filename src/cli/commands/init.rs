//! Initialize toolish configuration

use std::fs;
use std::path::PathBuf;

use toolish::config::Config;
use toolish::output::{OperationResult, OutputMode};

/// Write the default configuration and create the data directory
pub fn init(force: bool, data_dir: Option<PathBuf>, mode: OutputMode) -> anyhow::Result<()> {
    let path = Config::config_path();

    if path.exists() && !force {
        OperationResult {
            success: false,
            message: format!(
                "Already initialized ({} exists).\nUse --force to reinitialize.",
                path.display()
            ),
        }
        .render(mode);
        return Ok(());
    }

    let mut config = Config::default();
    config.storage.data_dir = data_dir;
    config.save()?;
    log::debug!("Wrote {}", path.display());

    let dir = config.data_dir();
    fs::create_dir_all(&dir)?;

    OperationResult {
        success: true,
        message: format!(
            "toolish initialized!\n  Config: {}\n  Data:   {}",
            path.display(),
            dir.display()
        ),
    }
    .render(mode);
    Ok(())
}
