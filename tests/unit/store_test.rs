//! Tests for the workout store over its public API

use crate::common::{FailingStore, date, day, key, session};
use tempfile::TempDir;
use toolish::adapters::{JsonFileStore, MemoryStore};
use toolish::core::models::{PersonalRecord, RecentDates};
use toolish::core::ports::KeyValueStore;
use toolish::store::{DATES_KEY, HISTORY_KEY, RECORDS_KEY, TrackingState, WorkoutStore};

// =============================================================================
// PERSONAL RECORDS
// =============================================================================

#[test]
fn test_best_values_come_from_different_sets() {
    let mut store = WorkoutStore::open(MemoryStore::new()).unwrap();
    let bench = key("CHEST", "Horizontal Push");
    let batch = [session(
        bench.clone(),
        &[("80", "3", true), ("60", "12", true), ("70", "8", false)],
    )];
    store.record_session_on(day(1), &batch, date(1)).unwrap();

    let record = store.personal_record(&bench);
    assert_eq!(record.best_weight, 80.0);
    assert_eq!(record.best_reps, 12);
}

#[test]
fn test_unparseable_input_counts_as_zero_but_is_kept() {
    let mut store = WorkoutStore::open(MemoryStore::new()).unwrap();
    let bench = key("CHEST", "Horizontal Push");
    let batch = [session(bench.clone(), &[("abc", "", true), ("-20", "-3", true)])];
    store.record_session_on(day(1), &batch, date(1)).unwrap();

    assert_eq!(
        store.personal_record(&bench),
        PersonalRecord {
            best_weight: 0.0,
            best_reps: 0,
            last_completed: Some(date(1)),
        }
    );
    let history = store.history(&bench).unwrap();
    assert_eq!(history.sets[0].weight, "abc");
    assert_eq!(history.sets[1].reps, "-3");
}

#[test]
fn test_decimal_and_suffixed_weights() {
    let mut store = WorkoutStore::open(MemoryStore::new()).unwrap();
    let bench = key("CHEST", "Horizontal Push");
    let batch = [session(bench.clone(), &[("62.5kg", "8 reps", true)])];
    store.record_session_on(day(1), &batch, date(1)).unwrap();

    let record = store.personal_record(&bench);
    assert_eq!(record.best_weight, 62.5);
    assert_eq!(record.best_reps, 8);
}

#[test]
fn test_last_completed_moves_even_without_improvement() {
    let mut store = WorkoutStore::open(MemoryStore::new()).unwrap();
    let bench = key("CHEST", "Horizontal Push");
    store
        .record_session_on(day(1), &[session(bench.clone(), &[("60", "8", true)])], date(1))
        .unwrap();
    let summary = store
        .record_session_on(day(1), &[session(bench.clone(), &[("40", "5", true)])], date(8))
        .unwrap();

    assert!(summary.new_best_weight.is_empty());
    assert!(summary.new_best_reps.is_empty());
    assert_eq!(store.personal_record(&bench).last_completed, Some(date(8)));
}

// =============================================================================
// COMPLETION DATES
// =============================================================================

#[test]
fn test_completion_log_keeps_ten_newest() {
    let mut store = WorkoutStore::open(MemoryStore::new()).unwrap();
    let batch = [session(key("CHEST", "Horizontal Push"), &[("60", "8", true)])];
    for d in 1..=12 {
        store.record_session_on(day(1), &batch, date(d)).unwrap();
    }

    let log = store.completion_log(day(1)).unwrap();
    assert_eq!(log.len(), 10);
    assert_eq!(log.dates()[0], date(12));
    assert_eq!(log.dates()[9], date(3));
}

#[test]
fn test_days_are_tracked_separately() {
    let mut store = WorkoutStore::open(MemoryStore::new()).unwrap();
    let batch = [session(key("CHEST", "Horizontal Push"), &[("60", "8", true)])];
    store.record_session_on(day(1), &batch, date(1)).unwrap();

    assert_eq!(store.recent_dates(day(2), 3), RecentDates::Never);
    assert_eq!(store.recent_dates(day(1), 3), RecentDates::Dates(vec![date(1)]));
}

#[test]
fn test_format_recent_dates_default_format() {
    let mut store = WorkoutStore::open(MemoryStore::new()).unwrap();
    let batch = [session(key("CHEST", "Horizontal Push"), &[("60", "8", true)])];
    store.record_session_on(day(1), &batch, date(3)).unwrap();
    store.record_session_on(day(1), &batch, date(14)).unwrap();

    assert_eq!(
        store.format_recent_dates(day(1), 3, "%-m/%-d/%Y"),
        vec!["4/14/2025", "4/3/2025"]
    );
}

#[test]
fn test_format_recent_dates_with_time_format_does_not_panic() {
    let mut store = WorkoutStore::open(MemoryStore::new()).unwrap();
    let batch = [session(key("CHEST", "Horizontal Push"), &[("60", "8", true)])];
    store.record_session_on(day(1), &batch, date(3)).unwrap();

    assert_eq!(store.format_recent_dates(day(1), 3, "%H:%M"), vec!["4/3/2025"]);
}

// =============================================================================
// PERSISTENCE
// =============================================================================

#[test]
fn test_failed_commit_leaves_store_untouched() {
    let storage = FailingStore::new();
    let mut store = WorkoutStore::open(&storage).unwrap();
    let bench = key("CHEST", "Horizontal Push");
    store
        .record_session_on(day(1), &[session(bench.clone(), &[("60", "8", true)])], date(1))
        .unwrap();
    let before = store.state().clone();
    let raw_before = storage.raw(RECORDS_KEY);

    storage.fail_commits(true);
    let result =
        store.record_session_on(day(1), &[session(bench.clone(), &[("100", "1", true)])], date(2));

    assert!(result.is_err());
    assert_eq!(store.state(), &before);
    assert_eq!(storage.raw(RECORDS_KEY), raw_before);
    assert_eq!(storage.commits(), 1);

    storage.fail_commits(false);
    store
        .record_session_on(day(1), &[session(bench.clone(), &[("100", "1", true)])], date(2))
        .unwrap();
    assert_eq!(store.personal_record(&bench).best_weight, 100.0);
}

#[test]
fn test_file_store_survives_reopen() {
    let temp = TempDir::new().unwrap();
    let bench = key("CHEST", "Horizontal Push");
    {
        let mut store = WorkoutStore::open(JsonFileStore::new(temp.path())).unwrap();
        store
            .record_session_on(day(1), &[session(bench.clone(), &[("60", "8", true)])], date(1))
            .unwrap();
    }

    let store = WorkoutStore::open(JsonFileStore::new(temp.path())).unwrap();
    assert_eq!(store.personal_record(&bench).best_weight, 60.0);
    assert_eq!(store.last_done(&bench), Some(date(1)));
    assert!(temp.path().join("workoutHistory.json").exists());
    assert!(temp.path().join("personalRecords.json").exists());
    assert!(temp.path().join("workoutDates.json").exists());
}

#[test]
fn test_persisted_field_names() {
    let mut store = WorkoutStore::open(MemoryStore::new()).unwrap();
    let batch = [session(key("CHEST", "Horizontal Push"), &[("60", "8", true)])];
    store.record_session_on(day(1), &batch, date(1)).unwrap();

    let records = store.storage().get(RECORDS_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&records).unwrap();
    let record = &value["day1-CHEST-Horizontal Push"];
    assert_eq!(record["bestWeight"], 60.0);
    assert_eq!(record["bestReps"], 8);
    assert_eq!(record["lastCompleted"], "2025-04-01");

    let history = store.storage().get(HISTORY_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&history).unwrap();
    let snapshot = &value["day1-CHEST-Horizontal Push"];
    assert_eq!(snapshot["variant"], "Variant");
    assert_eq!(snapshot["soreness"], 0);
    assert_eq!(snapshot["exertion"], 3);
    assert_eq!(snapshot["sets"][0]["weight"], "60");
    assert_eq!(snapshot["sets"][0]["completed"], true);
}

#[test]
fn test_corrupt_storage_opens_empty() {
    let storage = MemoryStore::new();
    storage
        .commit(&[
            (HISTORY_KEY, "garbage".to_string()),
            (RECORDS_KEY, "42".to_string()),
            (DATES_KEY, "{\"day1\": 7}".to_string()),
        ])
        .unwrap();

    let store = WorkoutStore::open(storage).unwrap();
    assert_eq!(store.state(), &TrackingState::default());
}

#[test]
fn test_legacy_string_ratings_load() {
    let storage = MemoryStore::new();
    storage
        .commit(&[(
            HISTORY_KEY,
            r#"{"day1-CHEST-Horizontal Push": {"date": "2025-04-01", "variant": "Dumbbell Bench Press",
                "soreness": "4", "exertion": "9", "sets": []}}"#
                .to_string(),
        )])
        .unwrap();

    let store = WorkoutStore::open(storage).unwrap();
    let history = store.history(&key("CHEST", "Horizontal Push")).unwrap();
    assert_eq!(history.soreness, 4);
    assert_eq!(history.exertion, 5);
}

#[test]
fn test_injected_state_is_written_on_first_save() {
    let mut state = TrackingState::default();
    let bench = key("CHEST", "Horizontal Push");
    state.records.insert(
        bench.clone(),
        PersonalRecord {
            best_weight: 90.0,
            best_reps: 3,
            last_completed: Some(date(1)),
        },
    );

    let mut store = WorkoutStore::with_state(MemoryStore::new(), state);
    assert!(store.storage().is_empty());
    assert_eq!(store.personal_record(&bench).best_weight, 90.0);

    store
        .record_session_on(day(1), &[session(bench.clone(), &[("60", "8", true)])], date(2))
        .unwrap();
    let reopened = WorkoutStore::open(store.storage()).unwrap();
    assert_eq!(reopened.personal_record(&bench).best_weight, 90.0);
    assert_eq!(reopened.personal_record(&bench).best_reps, 8);
}
