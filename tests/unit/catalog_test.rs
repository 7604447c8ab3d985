//! Tests for the exercise catalog

use std::fs;

use tempfile::TempDir;
use toolish::catalog::{Catalog, CatalogError};
use toolish::core::models::ExerciseKey;

use crate::common::day;

const SMALL_CATALOG: &str = r#"
[[days]]
day = 1

[[days.sections]]
body_part = "LEGS"

[[days.sections.exercises]]
name = "Squat"
sets = 5
rep_range = "5"
options = ["Back Squat", "Front Squat"]

[[days.sections.exercises]]
name = "Calf Raise"
sets = 3
rep_range = "15 each leg"
"#;

#[test]
fn test_every_builtin_day_has_exercises() {
    let catalog = Catalog::builtin().unwrap();
    for d in &catalog.days {
        assert!(!d.keys().is_empty(), "{} has no exercises", d.day);
        for (_, _, exercise) in d.entries() {
            assert!(exercise.sets > 0);
            assert!(!exercise.options.is_empty());
        }
    }
}

#[test]
fn test_builtin_keys_parse_back() {
    let catalog = Catalog::builtin().unwrap();
    for d in &catalog.days {
        for key in d.keys() {
            let parsed: ExerciseKey = key.to_string().parse().unwrap();
            assert_eq!(parsed, key);
            assert!(catalog.find(&parsed).is_some());
        }
    }
}

#[test]
fn test_load_custom_catalog_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("catalog.toml");
    fs::write(&path, SMALL_CATALOG).unwrap();

    let catalog = Catalog::load(&path).unwrap();
    let legs = catalog.require_day(day(1)).unwrap();
    let keys: Vec<String> = legs.keys().iter().map(ToString::to_string).collect();
    assert_eq!(keys, vec!["day1-LEGS-Squat", "day1-LEGS-Calf Raise"]);

    let calf = catalog.find(&legs.keys()[1]).unwrap();
    assert_eq!(calf.rep_range, "15 each leg");
    assert_eq!(calf.default_variant(), "");
}

#[test]
fn test_load_missing_file() {
    let temp = TempDir::new().unwrap();
    let err = Catalog::load(&temp.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
    assert!(err.to_string().contains("missing.toml"));
}

#[test]
fn test_empty_exercise_name_rejected() {
    let toml = SMALL_CATALOG.replace("name = \"Squat\"", "name = \"\"");
    assert!(matches!(Catalog::from_toml(&toml), Err(CatalogError::InvalidKey { .. })));
}

#[test]
fn test_day_zero_rejected() {
    let toml = SMALL_CATALOG.replace("day = 1", "day = 0");
    assert!(Catalog::from_toml(&toml).is_err());
}
