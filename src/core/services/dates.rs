//! Date display formats
//!
//! Display formats come from user configuration. chrono panics when a format
//! fails to render through `to_string()`, which includes valid strftime
//! formats that ask for a time (`%H`) on a plain date, so formats are rendered
//! through a fallible `write!` instead.

use std::fmt::Write;

use chrono::NaiveDate;

/// Month/day/year without padding, e.g. `3/7/2025`
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Render `date` with a chrono format, or `None` if the format cannot render a date
#[must_use]
pub fn format_date(date: NaiveDate, format: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(format)).ok()?;
    Some(out)
}

/// Render `date` with `format`, falling back to [`DEFAULT_DATE_FORMAT`]
#[must_use]
pub fn format_date_or_default(date: NaiveDate, format: &str) -> String {
    format_date(date, format).unwrap_or_else(|| {
        log::warn!("Date format '{format}' cannot render a date, using '{DEFAULT_DATE_FORMAT}'");
        date.format(DEFAULT_DATE_FORMAT).to_string()
    })
}

/// Whether `format` is a chrono format that renders a calendar date
#[must_use]
pub fn is_valid_date_format(format: &str) -> bool {
    !format.is_empty() && format_date(NaiveDate::MIN, format).is_some()
}
