//! Completion date log
//!
//! Each day keeps the dates on which the whole workout was completed:
//! no duplicates, newest first, at most [`MAX_COMPLETION_DATES`] entries.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::services::format_date_or_default;

/// Maximum number of dates kept per day
pub const MAX_COMPLETION_DATES: usize = 10;

/// Display value for a day that was never completed
pub const NEVER: &str = "Never";

/// Deduplicated, descending, capped list of completion dates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<NaiveDate>", into = "Vec<NaiveDate>")]
pub struct CompletionLog(Vec<NaiveDate>);

impl CompletionLog {
    /// Build a log from arbitrary dates, normalizing order, duplicates and size
    #[must_use]
    pub fn from_dates(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        let mut log = Self(dates.into_iter().collect());
        log.normalize();
        log
    }

    /// Add a date. Returns true if the log changed.
    ///
    /// A date older than every entry of a full log is dropped again straight away.
    pub fn insert(&mut self, date: NaiveDate) -> bool {
        if self.0.contains(&date) {
            return false;
        }
        self.0.push(date);
        self.normalize();
        self.0.contains(&date)
    }

    /// All dates, newest first
    #[must_use]
    pub fn dates(&self) -> &[NaiveDate] {
        &self.0
    }

    /// The newest `limit` dates
    #[must_use]
    pub fn recent(&self, limit: usize) -> &[NaiveDate] {
        &self.0[..limit.min(self.0.len())]
    }

    /// Whether `date` is logged
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.0.contains(&date)
    }

    /// Number of logged dates
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no date is logged
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn normalize(&mut self) {
        self.0.sort_unstable_by(|a, b| b.cmp(a));
        self.0.dedup();
        self.0.truncate(MAX_COMPLETION_DATES);
    }
}

impl From<Vec<NaiveDate>> for CompletionLog {
    fn from(dates: Vec<NaiveDate>) -> Self {
        Self::from_dates(dates)
    }
}

impl From<CompletionLog> for Vec<NaiveDate> {
    fn from(log: CompletionLog) -> Self {
        log.0
    }
}

/// The most recent completion dates of a day, or the "never" sentinel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecentDates {
    /// The day has no completion dates
    Never,
    /// Newest first, non-empty
    Dates(Vec<NaiveDate>),
}

impl RecentDates {
    /// Format each date with a chrono format string, or `["Never"]`
    ///
    /// A format that cannot render a date falls back to the default one.
    #[must_use]
    pub fn format(&self, date_format: &str) -> Vec<String> {
        match self {
            Self::Never => vec![NEVER.to_string()],
            Self::Dates(dates) => {
                dates.iter().map(|d| format_date_or_default(*d, date_format)).collect()
            },
        }
    }
}

impl fmt::Display for RecentDates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Never => f.write_str(NEVER),
            Self::Dates(dates) => {
                let joined: Vec<String> = dates.iter().map(ToString::to_string).collect();
                f.write_str(&joined.join(", "))
            },
        }
    }
}
