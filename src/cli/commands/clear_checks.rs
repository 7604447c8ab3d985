//! Untick the sets of a day

use std::path::PathBuf;

use toolish::core::models::DayId;
use toolish::output::{OperationResult, OutputMode, SaveResult};

use super::context::Context;

/// Re-save the last session of every exercise of `day` with all sets unticked
pub fn clear_checks(day: DayId, data_dir: Option<PathBuf>, mode: OutputMode) -> anyhow::Result<()> {
    let mut ctx = Context::open(data_dir)?;
    let keys = ctx.catalog.require_day(day)?.keys();

    match ctx.store.clear_checks(day, &keys)? {
        Some(summary) => SaveResult::from(&summary).render(mode),
        None => OperationResult {
            success: true,
            message: "No completed sets to clear.".to_string(),
        }
        .render(mode),
    }
    Ok(())
}
