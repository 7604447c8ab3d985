//! Exercise key
//!
//! An [`ExerciseKey`] identifies one exercise slot within one day, e.g.
//! `day1-CHEST-Horizontal Push`. History and personal records are keyed by it.
//!
//! # Uniqueness contract
//!
//! The rendered form is `{day}-{body_part}-{exercise}`. Body parts must not
//! contain `-` and neither component may be empty, so every key renders to a
//! distinct string and parses back to itself. Exercise names may contain `-`.
//!
//! ```
//! use toolish::core::models::{DayId, ExerciseKey};
//!
//! let key = ExerciseKey::new(DayId::new(1).unwrap(), "CHEST", "Horizontal Push").unwrap();
//! assert_eq!(key.to_string(), "day1-CHEST-Horizontal Push");
//! assert_eq!("day1-CHEST-Horizontal Push".parse::<ExerciseKey>().unwrap(), key);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use super::DayId;

/// Errors that can occur when building or parsing keys
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// Day was zero or not a number
    #[error("invalid day: {0}")]
    InvalidDay(String),

    /// Body part was empty
    #[error("body part must not be empty")]
    EmptyBodyPart,

    /// Exercise name was empty
    #[error("exercise name must not be empty")]
    EmptyExercise,

    /// Body part contained the key separator
    #[error("body part must not contain '-': {0}")]
    DashInBodyPart(String),

    /// Rendered key did not have three components
    #[error("malformed exercise key: {0}")]
    Malformed(String),
}

/// Identifier of one exercise slot within one day
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExerciseKey {
    day: DayId,
    body_part: String,
    exercise: String,
}

impl ExerciseKey {
    /// Build a key, enforcing the uniqueness contract
    pub fn new(
        day: DayId,
        body_part: impl Into<String>,
        exercise: impl Into<String>,
    ) -> Result<Self, KeyError> {
        let body_part = body_part.into();
        let exercise = exercise.into();

        if body_part.trim().is_empty() {
            return Err(KeyError::EmptyBodyPart);
        }
        if body_part.contains('-') {
            return Err(KeyError::DashInBodyPart(body_part));
        }
        if exercise.trim().is_empty() {
            return Err(KeyError::EmptyExercise);
        }

        Ok(Self {
            day,
            body_part,
            exercise,
        })
    }

    /// Day this exercise belongs to
    #[must_use]
    pub const fn day(&self) -> DayId {
        self.day
    }

    /// Body part heading (e.g. `CHEST`)
    #[must_use]
    pub fn body_part(&self) -> &str {
        &self.body_part
    }

    /// Exercise slot name (e.g. `Horizontal Push`)
    #[must_use]
    pub fn exercise(&self) -> &str {
        &self.exercise
    }
}

impl fmt::Display for ExerciseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.day, self.body_part, self.exercise)
    }
}

impl FromStr for ExerciseKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (day, rest) = s.split_once('-').ok_or_else(|| KeyError::Malformed(s.to_string()))?;
        let (body_part, exercise) =
            rest.split_once('-').ok_or_else(|| KeyError::Malformed(s.to_string()))?;
        if !day.starts_with("day") {
            return Err(KeyError::Malformed(s.to_string()));
        }
        Self::new(day.parse()?, body_part, exercise)
    }
}

impl Serialize for ExerciseKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ExerciseKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
