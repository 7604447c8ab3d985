//! Domain models for toolish
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`DayId`] - A day slot of the program (`day1`, `day2`, ...)
//! - [`ExerciseKey`] - Stable identifier of one exercise slot within one day
//! - [`SetEntry`] - Raw weight/reps input for one set
//! - [`ExerciseSession`] - One exercise as performed in a session
//! - [`HistoryRecord`] - Latest full session snapshot for an exercise
//! - [`PersonalRecord`] - Monotonic best values plus last-touched date
//! - [`CompletionLog`] - Capped, deduplicated, descending completion dates

mod completion_log;
mod day;
mod exercise_key;
mod history;
mod personal_record;
mod set_entry;

pub use completion_log::{CompletionLog, MAX_COMPLETION_DATES, NEVER, RecentDates};
pub use day::DayId;
pub use exercise_key::{ExerciseKey, KeyError};
pub(crate) use history::{
    default_exertion, default_soreness, deserialize_exertion, deserialize_soreness,
};
pub use history::{
    DEFAULT_EXERTION, DEFAULT_SORENESS, EXERTION_RANGE, ExerciseSession, HistoryRecord,
    SORENESS_RANGE,
};
pub use personal_record::{PersonalRecord, SessionBest};
pub use set_entry::{SetEntry, parse_reps, parse_weight};
