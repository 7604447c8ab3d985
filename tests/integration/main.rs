//! Integration tests for toolish CLI
//!
//! These tests simulate real training weeks through the binary, testing the
//! full cycle of: init → save sessions → show records → export → reset

// Include lifecycle tests from the same directory
mod lifecycle_test;

use assert_cmd::cargo;
use tempfile::TempDir;

/// Helper function to create a toolish command isolated in `home`
fn toolish(home: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("toolish"));
    cmd.env("TOOLISH_HOME", home.path()).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

/// Session JSON covering every exercise of `day` with one set each
fn full_day_session(day: u8, weight: &str, reps: &str, completed: bool) -> String {
    let catalog = toolish::catalog::Catalog::builtin().unwrap();
    let day = toolish::core::models::DayId::new(day).unwrap();
    let entries: Vec<serde_json::Value> = catalog
        .require_day(day)
        .unwrap()
        .entries()
        .map(|(_, body_part, exercise)| {
            serde_json::json!({
                "bodyPart": body_part,
                "exercise": exercise.name,
                "sets": [{"weight": weight, "reps": reps, "completed": completed}]
            })
        })
        .collect();
    serde_json::to_string(&entries).unwrap()
}
