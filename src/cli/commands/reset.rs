//! Delete tracked data

use std::path::PathBuf;

use toolish::output::{OperationResult, OutputMode};

use super::context::Context;

/// Delete all tracked data, or only personal records
pub fn reset(
    records_only: bool,
    yes: bool,
    data_dir: Option<PathBuf>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let what = if records_only {
        "all personal records"
    } else {
        "all workout data"
    };
    if !yes {
        anyhow::bail!("this deletes {what}; pass --yes to confirm");
    }

    let mut ctx = Context::open(data_dir)?;
    if records_only {
        ctx.store.reset_personal_records()?;
    } else {
        ctx.store.clear_all()?;
    }

    OperationResult {
        success: true,
        message: format!("Deleted {what}."),
    }
    .render(mode);
    Ok(())
}
