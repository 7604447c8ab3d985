//! Tracking rules for a session save
//!
//! Kept separate from the store so the arithmetic can be tested without any
//! persistence in the way.

use crate::core::models::{ExerciseSession, SessionBest, SetEntry};

/// Best weight and reps across `sets`
///
/// Every set counts, completed or not. Unparseable values count as 0, so they
/// never win against a real value.
#[must_use]
pub fn session_best(sets: &[SetEntry]) -> SessionBest {
    sets.iter().fold(SessionBest::default(), |best, set| SessionBest {
        weight: best.weight.max(set.weight_value()),
        reps: best.reps.max(set.reps_value()),
    })
}

/// Whether a batch of sessions counts as a completed workout day
///
/// Every exercise needs at least one completed set. An empty batch is not a
/// completed day.
#[must_use]
pub fn day_completed(sessions: &[ExerciseSession]) -> bool {
    !sessions.is_empty() && sessions.iter().all(ExerciseSession::has_completed_set)
}
