//! Exercise catalog
//!
//! The catalog is the static program: days, split into body-part sections,
//! each listing exercise slots with their default set count, rep range and
//! variant options. It is read-only configuration for the store and the
//! source of every valid [`ExerciseKey`].
//!
//! The built-in three-day program ships as TOML inside the binary; a custom
//! catalog file in the same format can be configured instead.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::{DayId, ExerciseKey, KeyError};

const BUILTIN_CATALOG: &str = include_str!("builtin.toml");

/// Errors that can occur when loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        /// Catalog file path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The catalog was not valid TOML or had the wrong shape
    #[error("invalid catalog: {0}")]
    Parse(#[from] toml::de::Error),

    /// A body part or exercise name breaks the key contract
    #[error("invalid exercise in {day}: {source}")]
    InvalidKey {
        /// Day of the offending exercise
        day: DayId,
        /// Underlying error
        #[source]
        source: KeyError,
    },

    /// Two exercises render to the same key
    #[error("duplicate exercise key: {0}")]
    DuplicateKey(String),

    /// The same day appears twice
    #[error("duplicate day: {0}")]
    DuplicateDay(DayId),

    /// An exercise was referenced that the catalog does not contain
    #[error("unknown exercise: {0}")]
    UnknownExercise(String),

    /// A day was referenced that the catalog does not contain
    #[error("unknown day: {0}")]
    UnknownDay(DayId),
}

/// The whole program
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Days in program order
    pub days: Vec<CatalogDay>,
}

/// One day of the program
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDay {
    /// Day number
    pub day: DayId,
    /// Body-part sections in display order
    #[serde(default)]
    pub sections: Vec<BodyPartSection>,
}

/// Exercises grouped under a body-part heading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyPartSection {
    /// Heading, e.g. `CHEST`
    pub body_part: String,
    /// Exercise slots in display order
    #[serde(default)]
    pub exercises: Vec<CatalogExercise>,
}

/// An exercise slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogExercise {
    /// Slot name, e.g. `Horizontal Push`
    pub name: String,
    /// Default number of sets
    pub sets: u32,
    /// Target rep range, free text (`8-12`, `15 each leg`)
    pub rep_range: String,
    /// Variants that can fill the slot; the first is the default
    #[serde(default)]
    pub options: Vec<String>,
}

impl CatalogExercise {
    /// Variant used when none is chosen
    #[must_use]
    pub fn default_variant(&self) -> &str {
        self.options.first().map_or("", String::as_str)
    }
}

impl Catalog {
    /// The built-in three-day program
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml(BUILTIN_CATALOG)
    }

    /// Parse and validate a catalog from TOML
    pub fn from_toml(content: &str) -> Result<Self, CatalogError> {
        let catalog: Self = toml::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load, parse and validate a catalog file
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Check that every exercise yields a valid key and no two keys collide
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut days = HashSet::new();
        let mut keys = HashSet::new();

        for day in &self.days {
            if !days.insert(day.day) {
                return Err(CatalogError::DuplicateDay(day.day));
            }
            for section in &day.sections {
                for exercise in &section.exercises {
                    let key = ExerciseKey::new(day.day, &section.body_part, &exercise.name)
                        .map_err(|source| CatalogError::InvalidKey {
                            day: day.day,
                            source,
                        })?;
                    if !keys.insert(key.to_string()) {
                        return Err(CatalogError::DuplicateKey(key.to_string()));
                    }
                }
            }
        }
        Ok(())
    }

    /// Look up a day
    #[must_use]
    pub fn day(&self, day: DayId) -> Option<&CatalogDay> {
        self.days.iter().find(|d| d.day == day)
    }

    /// Look up a day, failing if it does not exist
    pub fn require_day(&self, day: DayId) -> Result<&CatalogDay, CatalogError> {
        self.day(day).ok_or(CatalogError::UnknownDay(day))
    }

    /// Look up the exercise a key refers to
    #[must_use]
    pub fn find(&self, key: &ExerciseKey) -> Option<&CatalogExercise> {
        self.day(key.day())?
            .sections
            .iter()
            .filter(|s| s.body_part == key.body_part())
            .flat_map(|s| &s.exercises)
            .find(|e| e.name == key.exercise())
    }
}

impl CatalogDay {
    /// Every exercise of the day with its key, in display order
    ///
    /// Exercises that break the key contract are skipped; validated catalogs
    /// have none.
    pub fn entries(&self) -> impl Iterator<Item = (ExerciseKey, &str, &CatalogExercise)> + '_ {
        self.sections.iter().flat_map(move |section| {
            section.exercises.iter().filter_map(move |exercise| {
                ExerciseKey::new(self.day, &section.body_part, &exercise.name)
                    .ok()
                    .map(|key| (key, section.body_part.as_str(), exercise))
            })
        })
    }

    /// Keys of every exercise of the day
    #[must_use]
    pub fn keys(&self) -> Vec<ExerciseKey> {
        self.entries().map(|(key, _, _)| key).collect()
    }
}
