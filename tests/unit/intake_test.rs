//! Tests for session input parsing and resolution

use toolish::catalog::Catalog;
use toolish::core::models::SetEntry;
use toolish::intake::{self, SessionInput};

use crate::common::day;

#[test]
fn test_set_values_keep_raw_text() {
    let inputs = intake::parse(
        r#"[{"bodyPart": "LEGS", "exercise": "Calf Raise",
             "sets": [{"weight": 62.5, "reps": 12, "completed": true},
                      {"weight": null, "reps": "ten", "completed": false},
                      {}]}]"#,
    )
    .unwrap();

    assert_eq!(
        inputs[0].sets,
        vec![
            SetEntry::new("62.5", "12", true),
            SetEntry::new("", "ten", false),
            SetEntry::new("", "", false),
        ]
    );
}

#[test]
fn test_resolve_whole_day() {
    let catalog = Catalog::builtin().unwrap();
    let inputs: Vec<SessionInput> = catalog
        .require_day(day(3))
        .unwrap()
        .entries()
        .map(|(_, body_part, exercise)| SessionInput {
            body_part: body_part.to_string(),
            exercise: exercise.name.clone(),
            variant: None,
            soreness: 0,
            exertion: 0,
            sets: vec![SetEntry::new("20", "10", true)],
        })
        .collect();
    let count = inputs.len();

    let sessions = intake::resolve(day(3), inputs, &catalog).unwrap();
    assert_eq!(sessions.len(), count);
    assert!(sessions.iter().all(|s| s.key.day() == day(3)));
    assert!(sessions.iter().all(|s| !s.variant.is_empty()));
    // Exertion is clamped to its lower bound
    assert!(sessions.iter().all(|s| s.exertion == 1));
}

#[test]
fn test_blank_variant_uses_default() {
    let catalog = Catalog::builtin().unwrap();
    let inputs = intake::parse(
        r#"[{"bodyPart": "BACK", "exercise": "Vertical Pull", "variant": "  "}]"#,
    )
    .unwrap();
    let sessions = intake::resolve(day(1), inputs, &catalog).unwrap();
    assert_eq!(sessions[0].variant, "Pull Up");
}

#[test]
fn test_exercise_from_another_day_rejected() {
    let catalog = Catalog::builtin().unwrap();
    // Overhead Press only exists on day 2
    let inputs =
        intake::parse(r#"[{"bodyPart": "SHOULDERS", "exercise": "Overhead Press"}]"#).unwrap();
    assert!(intake::resolve(day(1), inputs.clone(), &catalog).is_err());
    assert!(intake::resolve(day(2), inputs, &catalog).is_ok());
}
