//! Loading and validating controller tuning.
use std::fs;
use std::path::PathBuf;

use drakewalk::jump::CurveError;
use drakewalk::{ConfigError, Keyframe, PlatformerConfig, DEFAULT_DROP_SPEED};
use rstest::rstest;

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("drakewalk-{}-{name}", std::process::id()));
    fs::write(&path, contents).unwrap_or_else(|e| panic!("write {}: {e}", path.display()));
    path
}

#[test]
fn missing_fields_take_defaults() {
    let config = PlatformerConfig::from_json_str(r#"{ "turn_speed": 90.0 }"#)
        .unwrap_or_else(|e| panic!("rejected: {e}"));
    assert_eq!(config.turn_speed, 90.0);
    assert_eq!(config.drop_speed, DEFAULT_DROP_SPEED);
    assert_eq!(config.jump_curve, PlatformerConfig::default().jump_curve);
}

#[rstest]
#[case::critical_above_one(r#"{ "critical_verticality": 1.5 }"#, "critical_verticality")]
#[case::critical_negative(r#"{ "critical_verticality": -0.1 }"#, "critical_verticality")]
#[case::threshold(r#"{ "grounded_threshold": 2.0 }"#, "grounded_threshold")]
#[case::move_speed(r#"{ "move_speed": -1.0 }"#, "move_speed")]
#[case::turn_speed(r#"{ "turn_speed": -10.0 }"#, "turn_speed")]
#[case::jump_delay(r#"{ "jump_delay": -0.5 }"#, "jump_delay")]
fn out_of_range_values_are_rejected(#[case] json: &str, #[case] expected_field: &str) {
    match PlatformerConfig::from_json_str(json) {
        Err(ConfigError::OutOfRange { field, .. }) => assert_eq!(field, expected_field),
        other => panic!("expected OutOfRange for {expected_field}, got {other:?}"),
    }
}

#[test]
fn unordered_curve_is_rejected() {
    let json = r#"{ "jump_curve": [ { "time": 0.3, "value": 0.0 }, { "time": 0.1, "value": 1.0 } ] }"#;
    assert!(matches!(
        PlatformerConfig::from_json_str(json),
        Err(ConfigError::Curve(CurveError::Unordered { index: 1, .. }))
    ));
}

#[test]
fn empty_curve_is_rejected() {
    let config = PlatformerConfig {
        jump_curve: Vec::new(),
        ..PlatformerConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::Curve(CurveError::Empty))
    ));
}

#[test]
fn malformed_json_is_a_parse_error() {
    assert!(matches!(
        PlatformerConfig::from_json_str("{ move_speed: }"),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn load_reads_a_file() {
    let path = scratch_file(
        "load.json",
        r#"{ "move_speed": 2.5, "jump_curve": [ { "time": 0.0, "value": 0.1 } ] }"#,
    );
    let config = PlatformerConfig::load(&path).unwrap_or_else(|e| panic!("load: {e}"));
    assert_eq!(config.move_speed, 2.5);
    assert_eq!(config.jump_curve, vec![Keyframe::new(0.0, 0.1)]);
    fs::remove_file(&path).ok();
}

#[test]
fn load_reports_missing_file() {
    let path = std::env::temp_dir().join("drakewalk-does-not-exist.json");
    assert!(matches!(
        PlatformerConfig::load(&path),
        Err(ConfigError::Io(_))
    ));
}
