//! Exercise sessions and history snapshots
//!
//! An [`ExerciseSession`] is the already-extracted input for one exercise of a
//! save. The store turns it into a [`HistoryRecord`], which replaces whatever
//! was stored for that key before.

use std::ops::RangeInclusive;

use chrono::NaiveDate;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use super::{ExerciseKey, SetEntry};

/// Valid soreness ratings
pub const SORENESS_RANGE: RangeInclusive<u8> = 0..=10;

/// Valid exertion ratings
pub const EXERTION_RANGE: RangeInclusive<u8> = 1..=5;

/// Soreness used when none was given
pub const DEFAULT_SORENESS: u8 = 0;

/// Exertion used when none was given
pub const DEFAULT_EXERTION: u8 = 3;

/// One exercise as performed in a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseSession {
    /// Which exercise slot this is
    pub key: ExerciseKey,
    /// Chosen variant (e.g. "Barbell Bench Press")
    pub variant: String,
    /// Soreness rating, 0-10
    pub soreness: u8,
    /// Exertion rating, 1-5
    pub exertion: u8,
    /// Sets in order, including incomplete ones
    pub sets: Vec<SetEntry>,
}

impl ExerciseSession {
    /// Create a session with default ratings and no sets
    #[must_use]
    pub fn new(key: ExerciseKey, variant: impl Into<String>) -> Self {
        Self {
            key,
            variant: variant.into(),
            soreness: DEFAULT_SORENESS,
            exertion: DEFAULT_EXERTION,
            sets: Vec::new(),
        }
    }

    /// Set the soreness rating, clamped to 0-10
    #[must_use]
    pub fn with_soreness(mut self, soreness: u8) -> Self {
        self.soreness = clamp(soreness, &SORENESS_RANGE);
        self
    }

    /// Set the exertion rating, clamped to 1-5
    #[must_use]
    pub fn with_exertion(mut self, exertion: u8) -> Self {
        self.exertion = clamp(exertion, &EXERTION_RANGE);
        self
    }

    /// Set the sets
    #[must_use]
    pub fn with_sets(mut self, sets: Vec<SetEntry>) -> Self {
        self.sets = sets;
        self
    }

    /// Whether at least one set was completed
    #[must_use]
    pub fn has_completed_set(&self) -> bool {
        self.sets.iter().any(|s| s.completed)
    }
}

/// Latest full snapshot of an exercise session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Date of the save
    pub date: NaiveDate,

    /// Variant performed
    #[serde(default)]
    pub variant: String,

    /// Soreness rating, 0-10
    #[serde(default = "default_soreness", deserialize_with = "deserialize_soreness")]
    pub soreness: u8,

    /// Exertion rating, 1-5
    #[serde(default = "default_exertion", deserialize_with = "deserialize_exertion")]
    pub exertion: u8,

    /// Sets verbatim
    #[serde(default)]
    pub sets: Vec<SetEntry>,
}

impl HistoryRecord {
    /// Snapshot a session as saved on `date`
    #[must_use]
    pub fn from_session(session: &ExerciseSession, date: NaiveDate) -> Self {
        Self {
            date,
            variant: session.variant.clone(),
            soreness: clamp(session.soreness, &SORENESS_RANGE),
            exertion: clamp(session.exertion, &EXERTION_RANGE),
            sets: session.sets.clone(),
        }
    }

    /// Whether the snapshot has at least one completed set
    #[must_use]
    pub fn has_completed_set(&self) -> bool {
        self.sets.iter().any(|s| s.completed)
    }

    /// Rebuild a session for `key` from this snapshot, with every set unticked
    #[must_use]
    pub fn to_cleared_session(&self, key: ExerciseKey) -> ExerciseSession {
        let sets = self
            .sets
            .iter()
            .map(|s| SetEntry {
                completed: false,
                ..s.clone()
            })
            .collect();
        ExerciseSession {
            key,
            variant: self.variant.clone(),
            soreness: self.soreness,
            exertion: self.exertion,
            sets,
        }
    }
}

fn clamp(value: u8, range: &RangeInclusive<u8>) -> u8 {
    value.clamp(*range.start(), *range.end())
}

pub(crate) const fn default_soreness() -> u8 {
    DEFAULT_SORENESS
}

pub(crate) const fn default_exertion() -> u8 {
    DEFAULT_EXERTION
}

/// Ratings were stored as select-box strings by older data; accept both
#[derive(Deserialize)]
#[serde(untagged)]
enum RawRating {
    Number(i64),
    Float(f64),
    Text(String),
    Other(IgnoredAny),
}

#[allow(clippy::cast_possible_truncation)]
fn rating<'de, D: Deserializer<'de>>(
    deserializer: D,
    range: &RangeInclusive<u8>,
    fallback: u8,
) -> Result<u8, D::Error> {
    let value = match Option::<RawRating>::deserialize(deserializer)? {
        Some(RawRating::Number(n)) => Some(n),
        Some(RawRating::Float(f)) if f.is_finite() => Some(f.round() as i64),
        Some(RawRating::Text(s)) => s.trim().parse::<i64>().ok(),
        Some(RawRating::Float(_) | RawRating::Other(_)) | None => None,
    };
    Ok(value.map_or(fallback, |n| {
        let (low, high) = (i64::from(*range.start()), i64::from(*range.end()));
        // In range after clamping, so the conversion cannot fail
        u8::try_from(n.clamp(low, high)).unwrap_or(fallback)
    }))
}

/// Lenient soreness rating: clamped to 0-10, unreadable values use the default
pub(crate) fn deserialize_soreness<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<u8, D::Error> {
    rating(deserializer, &SORENESS_RANGE, DEFAULT_SORENESS)
}

/// Lenient exertion rating: clamped to 1-5, unreadable values use the default
pub(crate) fn deserialize_exertion<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<u8, D::Error> {
    rating(deserializer, &EXERTION_RANGE, DEFAULT_EXERTION)
}
