//! Session input
//!
//! A session is entered as JSON: a list of exercises, each naming its body
//! part and slot the way the catalog does, with the sets performed.
//!
//! ```json
//! [
//!   {
//!     "bodyPart": "CHEST",
//!     "exercise": "Horizontal Push",
//!     "variant": "Barbell Bench Press",
//!     "soreness": 2,
//!     "exertion": 4,
//!     "sets": [{ "weight": "60", "reps": "8", "completed": true }]
//!   }
//! ]
//! ```
//!
//! Inputs are resolved against the catalog into [`ExerciseSession`]s before
//! anything reaches the store. A save always covers the whole day: exercises
//! left out of the input are carried over by [`fill_day`].

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{Catalog, CatalogError, CatalogExercise};
use crate::core::models::{
    DayId, ExerciseKey, ExerciseSession, HistoryRecord, SetEntry, default_exertion,
    default_soreness, deserialize_exertion, deserialize_soreness,
};

/// Errors turning input into sessions
#[derive(Debug, Error)]
pub enum IntakeError {
    /// The day or an exercise is not in the catalog
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The same exercise appears more than once in one save
    #[error("exercise entered twice: {0}")]
    DuplicateExercise(ExerciseKey),
}

/// One exercise as entered by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInput {
    /// Body part heading, e.g. `CHEST`
    pub body_part: String,
    /// Slot name, e.g. `Horizontal Push`
    pub exercise: String,
    /// Chosen variant (default: the catalog's first option)
    #[serde(default)]
    pub variant: Option<String>,
    /// Soreness rating, clamped to 0-10
    #[serde(default = "default_soreness", deserialize_with = "deserialize_soreness")]
    pub soreness: u8,
    /// Exertion rating, clamped to 1-5
    #[serde(default = "default_exertion", deserialize_with = "deserialize_exertion")]
    pub exertion: u8,
    /// Sets performed
    #[serde(default)]
    pub sets: Vec<SetEntry>,
}

/// Parse a JSON list of session inputs
pub fn parse(json: &str) -> anyhow::Result<Vec<SessionInput>> {
    Ok(serde_json::from_str(json)?)
}

/// Turn inputs for `day` into sessions the store accepts
///
/// Every input must name an exercise of `day` in `catalog`, at most once.
pub fn resolve(
    day: DayId,
    inputs: Vec<SessionInput>,
    catalog: &Catalog,
) -> Result<Vec<ExerciseSession>, IntakeError> {
    catalog.require_day(day)?;

    let mut seen = HashSet::new();
    inputs
        .into_iter()
        .map(|input| {
            let key = ExerciseKey::new(day, &input.body_part, &input.exercise).map_err(|_| {
                CatalogError::UnknownExercise(format!("{}-{}", input.body_part, input.exercise))
            })?;
            let exercise =
                catalog.find(&key).ok_or_else(|| CatalogError::UnknownExercise(key.to_string()))?;
            if !seen.insert(key.clone()) {
                return Err(IntakeError::DuplicateExercise(key));
            }

            let variant = input
                .variant
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| exercise.default_variant().to_string());

            Ok(ExerciseSession::new(key, variant)
                .with_sets(input.sets)
                .with_soreness(input.soreness)
                .with_exertion(input.exertion))
        })
        .collect()
}

/// Extend `sessions` to every exercise of `day`, in catalog order
///
/// An exercise missing from `sessions` is carried over from its stored
/// snapshot with every set unticked, or gets the catalog's number of empty
/// sets when it has no history. Either way it has no completed set, so a
/// partial save never marks the day completed.
pub fn fill_day(
    day: DayId,
    sessions: Vec<ExerciseSession>,
    catalog: &Catalog,
    history: &BTreeMap<ExerciseKey, HistoryRecord>,
) -> Result<Vec<ExerciseSession>, CatalogError> {
    let catalog_day = catalog.require_day(day)?;
    let mut given: BTreeMap<ExerciseKey, ExerciseSession> =
        sessions.into_iter().map(|s| (s.key.clone(), s)).collect();

    let filled: Vec<ExerciseSession> = catalog_day
        .entries()
        .map(|(key, _, exercise)| {
            given.remove(&key).unwrap_or_else(|| carry_over(key, exercise, history))
        })
        .collect();

    if let Some(key) = given.into_keys().next() {
        return Err(CatalogError::UnknownExercise(key.to_string()));
    }
    Ok(filled)
}

fn carry_over(
    key: ExerciseKey,
    exercise: &CatalogExercise,
    history: &BTreeMap<ExerciseKey, HistoryRecord>,
) -> ExerciseSession {
    if let Some(stored) = history.get(&key) {
        return stored.to_cleared_session(key);
    }
    let sets = (0..exercise.sets).map(|_| SetEntry::new("", "", false)).collect();
    ExerciseSession::new(key, exercise.default_variant()).with_sets(sets)
}
