//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use chrono::NaiveDate;
use colored::Colorize;
use serde::Serialize;

use crate::core::models::{DayId, PersonalRecord, SetEntry};
use crate::store::SessionSummary;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Display value for a missing best
const NONE: &str = "None";

/// Best weight for display: `60kg`, or `None` when nothing was lifted
#[must_use]
pub fn format_best_weight(record: &PersonalRecord) -> String {
    if record.best_weight > 0.0 {
        format!("{}kg", record.best_weight)
    } else {
        NONE.to_string()
    }
}

/// Best reps for display: `8 reps`, or `None`
#[must_use]
pub fn format_best_reps(record: &PersonalRecord) -> String {
    if record.best_reps > 0 {
        format!("{} reps", record.best_reps)
    } else {
        NONE.to_string()
    }
}

fn print_json(value: &impl Serialize) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

/// Result of a catalog listing
#[derive(Debug, Serialize)]
pub struct CatalogResult {
    /// Listed days
    pub days: Vec<CatalogDayInfo>,
}

/// One listed day
#[derive(Debug, Serialize)]
pub struct CatalogDayInfo {
    /// Day
    pub day: DayId,
    /// Exercises in display order
    pub exercises: Vec<CatalogExerciseInfo>,
}

/// One listed exercise
#[derive(Debug, Serialize)]
pub struct CatalogExerciseInfo {
    /// Exercise key
    pub key: String,
    /// Body part heading
    pub body_part: String,
    /// Slot name
    pub exercise: String,
    /// Default number of sets
    pub sets: u32,
    /// Target rep range
    pub rep_range: String,
    /// Variant options, default first
    pub options: Vec<String>,
}

/// Everything known about one day, for `show`
#[derive(Debug, Serialize)]
pub struct DayReport {
    /// Day
    pub day: DayId,
    /// Formatted recent completion dates, or `["Never"]`
    pub recent_dates: Vec<String>,
    /// Exercises in display order
    pub exercises: Vec<ExerciseReport>,
}

/// Tracked values of one exercise
#[derive(Debug, Serialize)]
pub struct ExerciseReport {
    /// Exercise key
    pub key: String,
    /// Body part heading
    pub body_part: String,
    /// Slot name
    pub exercise: String,
    /// Target sets and reps, e.g. `3 x 8-12`
    pub target: String,
    /// Variant last used, or the default
    pub variant: String,
    /// Personal record
    pub record: PersonalRecord,
    /// Formatted date the exercise was last done
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_done: Option<String>,
    /// Sets from the latest saved session
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub previous_sets: Vec<SetEntry>,
}

/// Result of saving a session
#[derive(Debug, Serialize)]
pub struct SaveResult {
    /// Day saved
    pub day: DayId,
    /// Date saved on
    pub date: NaiveDate,
    /// Number of exercises saved
    pub exercises: usize,
    /// Whether the whole day was completed
    pub day_completed: bool,
    /// Whether the date was new in the day's completion log
    pub date_added: bool,
    /// Keys with a new best weight
    pub new_best_weight: Vec<String>,
    /// Keys with new best reps
    pub new_best_reps: Vec<String>,
}

impl From<&SessionSummary> for SaveResult {
    fn from(summary: &SessionSummary) -> Self {
        Self {
            day: summary.day,
            date: summary.date,
            exercises: summary.exercises,
            day_completed: summary.day_completed,
            date_added: summary.date_added,
            new_best_weight: summary.new_best_weight.iter().map(ToString::to_string).collect(),
            new_best_reps: summary.new_best_reps.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Recent completion dates of a day
#[derive(Debug, Serialize)]
pub struct DatesResult {
    /// Day
    pub day: DayId,
    /// Formatted dates, or `["Never"]`
    pub dates: Vec<String>,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl CatalogResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        for (i, day) in self.days.iter().enumerate() {
            if i > 0 {
                println!();
            }
            println!("{}", format!("Day {}", day.day.number()).bold());
            let mut heading = "";
            for e in &day.exercises {
                if e.body_part != heading {
                    heading = e.body_part.as_str();
                    println!("  {}", heading.cyan());
                }
                println!("    {} ({} x {})", e.exercise, e.sets, e.rep_range);
                if !e.options.is_empty() {
                    println!("      {}", e.options.join(" / ").dimmed());
                }
            }
        }
    }
}

impl DayReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        println!("{}", format!("Day {}", self.day.number()).bold());
        println!("Last completed: {}\n", self.recent_dates.join(", "));

        let mut heading = "";
        for e in &self.exercises {
            if e.body_part != heading {
                heading = e.body_part.as_str();
                println!("{}", heading.cyan());
            }
            println!("  {} - {} ({})", e.exercise, e.variant, e.target);
            let last = e.last_done.as_deref().unwrap_or(NONE);
            println!(
                "    Best: {} | {} | Last: {}",
                format_best_weight(&e.record).green(),
                format_best_reps(&e.record).green(),
                last
            );
            if !e.previous_sets.is_empty() {
                let sets: Vec<String> = e
                    .previous_sets
                    .iter()
                    .map(|s| {
                        let mark = if s.completed { " done" } else { "" };
                        format!("{}x{}{mark}", s.weight, s.reps)
                    })
                    .collect();
                println!("    Previous: {}", sets.join(", ").dimmed());
            }
        }
    }
}

impl SaveResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        if self.exercises == 0 {
            println!("Nothing to save.");
            return;
        }

        println!("Saved {} exercise(s) for day {} on {}", self.exercises, self.day.number(), self.date);
        for key in &self.new_best_weight {
            println!("  {} {key}: best weight", "New PR".green().bold());
        }
        for key in &self.new_best_reps {
            println!("  {} {key}: best reps", "New PR".green().bold());
        }
        if self.day_completed {
            println!("{}", "Day completed!".green());
        } else {
            println!("{}", "Day not completed: some exercises have no completed set.".yellow());
        }
    }
}

impl DatesResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                for date in &self.dates {
                    println!("{date}");
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => print_json(self),
        }
    }
}
