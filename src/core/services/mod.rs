//! Business logic services
//!
//! Pure computations over domain models. These services have no I/O
//! dependencies - they operate on data passed in and return results.
//!
//! - [`tracker`] - Best values of a session and the day-completion rule
//! - [`dates`] - Date display formats

pub mod dates;
pub mod tracker;

pub use dates::{DEFAULT_DATE_FORMAT, format_date, format_date_or_default, is_valid_date_format};
pub use tracker::{day_completed, session_best};
