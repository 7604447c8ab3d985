//! Workout tracking store
//!
//! [`WorkoutStore`] owns the three persisted maps:
//!
//! - `workoutHistory`: [`ExerciseKey`] → latest [`HistoryRecord`]
//! - `personalRecords`: [`ExerciseKey`] → [`PersonalRecord`]
//! - `workoutDates`: [`DayId`] → [`CompletionLog`]
//!
//! It is constructed once per process from a [`KeyValueStore`] and flushed
//! synchronously after every mutating call. Mutations are built on a copy of
//! the state and only swapped in after the storage commit succeeded, so a
//! failed save leaves both storage and memory as they were.

mod load;

use std::collections::BTreeMap;

use chrono::{NaiveDate, Utc};

use crate::core::models::{
    CompletionLog, DayId, ExerciseKey, ExerciseSession, HistoryRecord, PersonalRecord,
    RecentDates,
};
use crate::core::ports::KeyValueStore;
use crate::core::services::{day_completed, session_best};

/// Storage key of the history map
pub const HISTORY_KEY: &str = "workoutHistory";

/// Storage key of the personal records map
pub const RECORDS_KEY: &str = "personalRecords";

/// Storage key of the completion dates map
pub const DATES_KEY: &str = "workoutDates";

/// Number of completion dates shown by default
pub const DEFAULT_RECENT_LIMIT: usize = 3;

/// In-memory view of everything the store persists
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackingState {
    /// Latest session snapshot per exercise
    pub history: BTreeMap<ExerciseKey, HistoryRecord>,
    /// Best values per exercise
    pub records: BTreeMap<ExerciseKey, PersonalRecord>,
    /// Completion dates per day
    pub dates: BTreeMap<DayId, CompletionLog>,
}

/// Outcome of a session save
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    /// Day the session was saved for
    pub day: DayId,
    /// Date the session was saved on
    pub date: NaiveDate,
    /// Number of exercise sessions saved
    pub exercises: usize,
    /// Whether every exercise had a completed set
    pub day_completed: bool,
    /// Whether the date was newly added to the day's completion log
    pub date_added: bool,
    /// Exercises whose best weight went up
    pub new_best_weight: Vec<ExerciseKey>,
    /// Exercises whose best reps went up
    pub new_best_reps: Vec<ExerciseKey>,
}

impl SessionSummary {
    const fn empty(day: DayId, date: NaiveDate) -> Self {
        Self {
            day,
            date,
            exercises: 0,
            day_completed: false,
            date_added: false,
            new_best_weight: Vec::new(),
            new_best_reps: Vec::new(),
        }
    }
}

/// The personal-records / workout-history store
#[derive(Debug)]
pub struct WorkoutStore<S> {
    storage: S,
    state: TrackingState,
}

impl<S: KeyValueStore> WorkoutStore<S> {
    /// Load the store from `storage`
    ///
    /// Missing blobs start empty. Corrupted blobs are repaired or reset (and
    /// logged); only storage read failures are returned as errors.
    pub fn open(storage: S) -> anyhow::Result<Self> {
        let state = load::load_state(&storage)?;
        log::debug!(
            "Loaded {} history record(s), {} personal record(s), {} day log(s)",
            state.history.len(),
            state.records.len(),
            state.dates.len()
        );
        Ok(Self { storage, state })
    }

    /// Create a store with an injected initial state
    ///
    /// Nothing is written until the first mutating call.
    #[must_use]
    pub fn with_state(storage: S, state: TrackingState) -> Self {
        Self { storage, state }
    }

    /// Current in-memory state
    #[must_use]
    pub fn state(&self) -> &TrackingState {
        &self.state
    }

    /// The backing storage
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Personal record for `key`, or the zero record if there is none
    #[must_use]
    pub fn personal_record(&self, key: &ExerciseKey) -> PersonalRecord {
        self.state.records.get(key).copied().unwrap_or_default()
    }

    /// Latest session snapshot for `key`
    #[must_use]
    pub fn history(&self, key: &ExerciseKey) -> Option<&HistoryRecord> {
        self.state.history.get(key)
    }

    /// Date to show as "last done" for `key`
    ///
    /// Only reported while the stored snapshot has a completed set; a save
    /// with every set unticked hides it again.
    #[must_use]
    pub fn last_done(&self, key: &ExerciseKey) -> Option<NaiveDate> {
        self.history(key)
            .filter(|h| h.has_completed_set())
            .and(self.personal_record(key).last_completed)
    }

    /// Completion log of `day`
    #[must_use]
    pub fn completion_log(&self, day: DayId) -> Option<&CompletionLog> {
        self.state.dates.get(&day)
    }

    /// The newest `limit` completion dates of `day`
    #[must_use]
    pub fn recent_dates(&self, day: DayId, limit: usize) -> RecentDates {
        match self.completion_log(day).map(|log| log.recent(limit)) {
            Some(dates) if !dates.is_empty() => RecentDates::Dates(dates.to_vec()),
            _ => RecentDates::Never,
        }
    }

    /// The newest `limit` completion dates of `day`, formatted for display
    ///
    /// Returns `["Never"]` when the day was never completed. A format that
    /// cannot render a date falls back to the default one.
    #[must_use]
    pub fn format_recent_dates(&self, day: DayId, limit: usize, date_format: &str) -> Vec<String> {
        self.recent_dates(day, limit).format(date_format)
    }

    /// Save a session batch for `day`, dated today (UTC)
    pub fn record_session(
        &mut self,
        day: DayId,
        sessions: &[ExerciseSession],
    ) -> anyhow::Result<SessionSummary> {
        self.record_session_on(day, sessions, Utc::now().date_naive())
    }

    /// Save a session batch for `day`, dated `date`
    ///
    /// Per exercise: best values are merged with `max`, `last_completed` is
    /// set to `date`, and the history snapshot is replaced. The date is added
    /// to the day's completion log only if every exercise in the batch has a
    /// completed set. All three maps are committed together.
    pub fn record_session_on(
        &mut self,
        day: DayId,
        sessions: &[ExerciseSession],
        date: NaiveDate,
    ) -> anyhow::Result<SessionSummary> {
        let mut summary = SessionSummary::empty(day, date);
        if sessions.is_empty() {
            log::debug!("Empty session batch for {day}, nothing to save");
            return Ok(summary);
        }

        let mut next = self.state.clone();
        for session in sessions {
            let best = session_best(&session.sets);
            let previous = next.records.get(&session.key).copied().unwrap_or_default();

            if best.weight > previous.best_weight {
                summary.new_best_weight.push(session.key.clone());
            }
            if best.reps > previous.best_reps {
                summary.new_best_reps.push(session.key.clone());
            }

            next.records.insert(session.key.clone(), previous.merge(best, date));
            next.history.insert(session.key.clone(), HistoryRecord::from_session(session, date));
        }

        summary.exercises = sessions.len();
        summary.day_completed = day_completed(sessions);
        if summary.day_completed {
            summary.date_added = next.dates.entry(day).or_default().insert(date);
        }

        self.persist(&next)?;
        self.state = next;

        log::info!(
            "Saved {} exercise(s) for {day} on {date} (day completed: {})",
            summary.exercises,
            summary.day_completed
        );
        Ok(summary)
    }

    /// Untick every stored set of `keys` and save the result for `day`
    ///
    /// Keys without history are skipped. Returns `None` when none of the
    /// stored snapshots had a completed set, in which case nothing is saved.
    pub fn clear_checks(
        &mut self,
        day: DayId,
        keys: &[ExerciseKey],
    ) -> anyhow::Result<Option<SessionSummary>> {
        let stored: Vec<(&ExerciseKey, &HistoryRecord)> =
            keys.iter().filter_map(|k| self.history(k).map(|h| (k, h))).collect();

        if !stored.iter().any(|(_, h)| h.has_completed_set()) {
            return Ok(None);
        }

        let sessions: Vec<ExerciseSession> =
            stored.into_iter().map(|(k, h)| h.to_cleared_session(k.clone())).collect();
        self.record_session(day, &sessions).map(Some)
    }

    /// History map as pretty-printed JSON, exactly as persisted
    pub fn export_history(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(&self.state.history)?)
    }

    /// Remove all tracked data
    pub fn clear_all(&mut self) -> anyhow::Result<()> {
        self.storage.remove(&[HISTORY_KEY, RECORDS_KEY, DATES_KEY])?;
        self.state = TrackingState::default();
        log::info!("Cleared all workout data");
        Ok(())
    }

    /// Remove personal records only; history and completion dates stay
    pub fn reset_personal_records(&mut self) -> anyhow::Result<()> {
        self.storage.remove(&[RECORDS_KEY])?;
        self.state.records.clear();
        log::info!("Reset personal records");
        Ok(())
    }

    fn persist(&self, state: &TrackingState) -> anyhow::Result<()> {
        let entries = [
            (HISTORY_KEY, serde_json::to_string(&state.history)?),
            (RECORDS_KEY, serde_json::to_string(&state.records)?),
            (DATES_KEY, serde_json::to_string(&state.dates)?),
        ];
        self.storage.commit(&entries)
    }
}
