//! Show the tracked state of a day

use std::path::PathBuf;

use toolish::core::models::DayId;
use toolish::core::services::format_date_or_default;
use toolish::output::{DayReport, ExerciseReport, OutputMode};

use super::context::Context;

/// Show personal records, last sessions and recent completion dates of `day`
pub fn show(day: DayId, data_dir: Option<PathBuf>, mode: OutputMode) -> anyhow::Result<()> {
    let ctx = Context::open(data_dir)?;
    let catalog_day = ctx.catalog.require_day(day)?;
    let date_format = ctx.config.date_format();

    let exercises = catalog_day
        .entries()
        .map(|(key, body_part, exercise)| {
            let history = ctx.store.history(&key);
            ExerciseReport {
                body_part: body_part.to_string(),
                exercise: exercise.name.clone(),
                target: format!("{} x {}", exercise.sets, exercise.rep_range),
                variant: history
                    .map_or_else(|| exercise.default_variant().to_string(), |h| h.variant.clone()),
                record: ctx.store.personal_record(&key),
                last_done: ctx
                    .store
                    .last_done(&key)
                    .map(|date| format_date_or_default(date, date_format)),
                previous_sets: history.map(|h| h.sets.clone()).unwrap_or_default(),
                key: key.to_string(),
            }
        })
        .collect();

    DayReport {
        day,
        recent_dates: ctx.store.format_recent_dates(
            day,
            ctx.config.display.recent_limit,
            date_format,
        ),
        exercises,
    }
    .render(mode);
    Ok(())
}
