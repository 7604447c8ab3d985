//! Show recent completion dates

use std::path::PathBuf;

use toolish::core::models::DayId;
use toolish::output::{DatesResult, OutputMode};

use super::context::Context;

/// Show the newest completion dates of `day`
pub fn dates(
    day: DayId,
    limit: Option<usize>,
    data_dir: Option<PathBuf>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let ctx = Context::open(data_dir)?;
    ctx.catalog.require_day(day)?;

    let limit = limit.unwrap_or(ctx.config.display.recent_limit);
    DatesResult {
        day,
        dates: ctx.store.format_recent_dates(day, limit, ctx.config.date_format()),
    }
    .render(mode);
    Ok(())
}
