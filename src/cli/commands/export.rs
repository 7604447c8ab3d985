//! Export the workout history

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use toolish::output::{OperationResult, OutputMode};
use toolish::paths;

use super::context::Context;

/// Write the history JSON to `output`, stdout for `-`, or a dated file
pub fn export(
    output: Option<&Path>,
    data_dir: Option<PathBuf>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let ctx = Context::open(data_dir)?;
    let json = ctx.store.export_history()?;

    if output == Some(Path::new("-")) {
        println!("{json}");
        return Ok(());
    }

    let path = output.map_or_else(
        || PathBuf::from(paths::export_file_name(Utc::now().date_naive())),
        Path::to_path_buf,
    );
    fs::write(&path, json)?;

    OperationResult {
        success: true,
        message: format!("Exported workout history to {}", path.display()),
    }
    .render(mode);
    Ok(())
}
