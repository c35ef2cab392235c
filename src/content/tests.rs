//! Content domain: tests for tuning parsing and validation.

use super::{PlayerTuning, parse_player_tuning, validate_tuning};
use crate::movement::SurfaceCategory;

#[test]
fn test_default_tuning_is_valid() {
    assert!(validate_tuning(&PlayerTuning::default()).is_empty());
}

#[test]
fn test_shipped_tuning_file_parses_and_validates() {
    let contents = include_str!("../../assets/data/player_tuning.ron");
    let tuning = parse_player_tuning(contents, "player_tuning.ron").unwrap();

    assert!(validate_tuning(&tuning).is_empty());
    assert_eq!(tuning.dash.active_time, 0.12);
    assert_eq!(tuning.slam.impact_time, 0.5);
    assert_eq!(tuning.dash.cooldown, 5.0);
    assert_eq!(tuning.slam_gate_surface, SurfaceCategory::Level);
}

#[test]
fn test_missing_fields_fall_back_to_defaults() {
    let tuning = parse_player_tuning("(max_speed: 200.0)", "partial.ron").unwrap();
    let defaults = PlayerTuning::default();

    assert_eq!(tuning.max_speed, 200.0);
    assert_eq!(tuning.jump_modifier, defaults.jump_modifier);
    assert_eq!(tuning.dash, defaults.dash);
    assert!(tuning.exclusive_abilities);
}

#[test]
fn test_parse_error_names_the_file() {
    let err = parse_player_tuning("(max_speed: \"fast\")", "broken.ron").unwrap_err();
    assert_eq!(err.file, "broken.ron");
    assert!(err.to_string().starts_with("Failed to load broken.ron"));
}

#[test]
fn test_negative_values_are_rejected() {
    let mut tuning = PlayerTuning::default();
    tuning.max_speed = -1.0;
    tuning.dash.cooldown = -5.0;
    tuning.slam.active_time = f32::NAN;

    let errors = validate_tuning(&tuning);
    let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();

    assert_eq!(errors.len(), 3);
    assert!(fields.contains(&"max_speed"));
    assert!(fields.contains(&"dash.cooldown"));
    assert!(fields.contains(&"slam.active_time"));
}

#[test]
fn test_deceleration_must_be_a_fraction() {
    let mut tuning = PlayerTuning::default();
    tuning.jump_deceleration = 1.5;

    let errors = validate_tuning(&tuning);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "jump_deceleration");
}

#[test]
fn test_takeoff_velocity_applies_modifier() {
    let tuning = PlayerTuning {
        jump_takeoff_speed: 7.0,
        jump_modifier: 1.5,
        gravity: 10.0,
        ..PlayerTuning::default()
    };

    assert_eq!(tuning.takeoff_velocity(), 10.5);
    assert!((tuning.jump_height() - 5.5125).abs() < 1e-4);
}
