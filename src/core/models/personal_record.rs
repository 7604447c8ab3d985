//! Personal record model
//!
//! Best values only ever go up. `last_completed` is touched by every save of
//! the exercise, whether or not it set a new best.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Best-ever values for an exercise slot
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalRecord {
    /// Heaviest weight ever entered
    #[serde(default)]
    pub best_weight: f64,

    /// Most reps ever entered
    #[serde(default)]
    pub best_reps: u32,

    /// Date of the last save that touched this record
    #[serde(default)]
    pub last_completed: Option<NaiveDate>,
}

/// Best values found within a single session
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SessionBest {
    /// Heaviest parsed weight, 0 if none
    pub weight: f64,
    /// Most parsed reps, 0 if none
    pub reps: u32,
}

impl PersonalRecord {
    /// Fold a session's best values into this record
    #[must_use]
    pub fn merge(self, best: SessionBest, date: NaiveDate) -> Self {
        Self {
            best_weight: best.weight.max(self.best_weight),
            best_reps: best.reps.max(self.best_reps),
            last_completed: Some(date),
        }
    }

    /// Whether the stored values are usable (finite, non-negative weight)
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.best_weight.is_finite() && self.best_weight >= 0.0
    }
}
