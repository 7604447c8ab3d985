//! List the program

use toolish::config::Config;
use toolish::core::models::DayId;
use toolish::output::{CatalogDayInfo, CatalogExerciseInfo, CatalogResult, OutputMode};

/// List every day of the catalog, or only `day`
pub fn catalog(day: Option<DayId>, mode: OutputMode) -> anyhow::Result<()> {
    let catalog = Config::load().catalog()?;

    let days = match day {
        Some(day) => vec![catalog.require_day(day)?],
        None => catalog.days.iter().collect(),
    };

    let result = CatalogResult {
        days: days
            .into_iter()
            .map(|day| CatalogDayInfo {
                day: day.day,
                exercises: day
                    .entries()
                    .map(|(key, body_part, exercise)| CatalogExerciseInfo {
                        key: key.to_string(),
                        body_part: body_part.to_string(),
                        exercise: exercise.name.clone(),
                        sets: exercise.sets,
                        rep_range: exercise.rep_range.clone(),
                        options: exercise.options.clone(),
                    })
                    .collect(),
            })
            .collect(),
    };
    result.render(mode);
    Ok(())
}
