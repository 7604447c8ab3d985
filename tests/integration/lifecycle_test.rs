//! Integration tests for the full tracking lifecycle
//!
//! Tests the complete flow:
//! 1. User initializes toolish
//! 2. User saves whole and partial days
//! 3. Records, history and completion dates survive between runs
//! 4. Export and reset work on the persisted data

use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

use super::{full_day_session, toolish};

fn json_stdout(cmd: &mut assert_cmd::Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_full_day_marks_completion() {
    let home = TempDir::new().unwrap();
    toolish(&home).arg("init").assert().success();

    let saved = json_stdout(
        toolish(&home)
            .args(["--json", "save", "2"])
            .write_stdin(full_day_session(2, "20", "10", true)),
    );
    assert_eq!(saved["day_completed"], true);
    assert_eq!(saved["date_added"], true);
    assert_eq!(saved["exercises"], 11);

    let report = json_stdout(toolish(&home).args(["--json", "show", "2"]));
    assert_ne!(report["recent_dates"][0], "Never");
    for exercise in report["exercises"].as_array().unwrap() {
        assert_eq!(exercise["record"]["bestWeight"], 20.0);
        assert_eq!(exercise["record"]["bestReps"], 10);
        assert!(exercise["last_done"].is_string());
    }

    // Other days are untouched
    toolish(&home).args(["dates", "1"]).assert().success().stdout("Never\n");
}

#[test]
fn test_partial_day_updates_records_only() {
    let home = TempDir::new().unwrap();

    let saved = json_stdout(
        toolish(&home)
            .args(["--json", "save", "3"])
            .write_stdin(full_day_session(3, "15", "12", false)),
    );
    assert_eq!(saved["day_completed"], false);

    toolish(&home).args(["dates", "3"]).assert().success().stdout("Never\n");

    let report = json_stdout(toolish(&home).args(["--json", "show", "3"]));
    let first = &report["exercises"][0];
    assert_eq!(first["record"]["bestWeight"], 15.0);
    assert!(first["record"]["lastCompleted"].is_string());
    // No completed set, so it is not shown as done
    assert!(first.get("last_done").is_none());
    assert_eq!(first["previous_sets"][0]["completed"], false);
}

#[test]
fn test_records_only_go_up_across_runs() {
    let home = TempDir::new().unwrap();
    toolish(&home)
        .args(["save", "1"])
        .write_stdin(full_day_session(1, "50", "5", true))
        .assert()
        .success();
    toolish(&home)
        .args(["save", "1"])
        .write_stdin(full_day_session(1, "40", "9", true))
        .assert()
        .success()
        .stdout(predicate::str::contains("best reps"))
        .stdout(predicate::str::contains("best weight").not());

    let report = json_stdout(toolish(&home).args(["--json", "show", "1"]));
    for exercise in report["exercises"].as_array().unwrap() {
        assert_eq!(exercise["record"]["bestWeight"], 50.0);
        assert_eq!(exercise["record"]["bestReps"], 9);
        assert_eq!(exercise["previous_sets"][0]["weight"], "40");
    }

    // Saved twice on the same date, logged once
    let dates = json_stdout(toolish(&home).args(["--json", "dates", "1", "--limit", "10"]));
    assert_eq!(dates["dates"].as_array().unwrap().len(), 1);
}

#[test]
fn test_corrupt_data_file_is_repaired() {
    let home = TempDir::new().unwrap();
    toolish(&home)
        .args(["save", "1"])
        .write_stdin(full_day_session(1, "50", "5", true))
        .assert()
        .success();

    fs::write(home.path().join("data/workoutDates.json"), "{{{").unwrap();

    toolish(&home)
        .args(["dates", "1"])
        .assert()
        .success()
        .stdout("Never\n")
        .stderr(predicate::str::contains("Resetting workoutDates"));

    // Records were not affected
    let report = json_stdout(toolish(&home).args(["--json", "show", "1"]));
    assert_eq!(report["exercises"][0]["record"]["bestWeight"], 50.0);
}

#[test]
fn test_export_then_reset() {
    let home = TempDir::new().unwrap();
    toolish(&home)
        .args(["save", "1"])
        .write_stdin(full_day_session(1, "50", "5", true))
        .assert()
        .success();

    let export = home.path().join("history.json");
    toolish(&home).args(["export", "--output"]).arg(&export).assert().success();
    let history: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&export).unwrap()).unwrap();
    assert_eq!(history.as_object().unwrap().len(), 12);
    assert_eq!(history["day1-LEGS-Calf Raise"]["sets"][0]["reps"], "5");

    toolish(&home).args(["reset", "--yes"]).assert().success();
    toolish(&home).args(["export", "--output", "-"]).assert().success().stdout("{}\n");
    toolish(&home).args(["dates", "1"]).assert().success().stdout("Never\n");
}
