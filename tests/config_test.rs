//! Tests for configuration validation and JSON loading

use coremix::config::{ClassParams, SimConfig, DEFAULT_THRESHOLD};
use coremix::workload;

#[test]
fn test_default_config_is_valid() {
    let config = SimConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.fast_units, 2);
    assert_eq!(config.eff_units, 2);
    assert_eq!(config.fast, ClassParams::new(1.5, 1.33));
    assert_eq!(config.eff, ClassParams::new(1.0, 1.0));
    assert_eq!(config.threshold, DEFAULT_THRESHOLD);
}

#[test]
fn test_builders_override_fields() {
    let config = SimConfig::default()
        .with_fast_units(4)
        .with_eff_units(0)
        .with_fast_params(ClassParams::new(2.0, 1.5))
        .with_threshold(7.0);
    assert!(config.validate().is_ok());
    assert_eq!(config.fast_units, 4);
    assert_eq!(config.eff_units, 0);
    assert_eq!(config.fast.speed, 2.0);
    assert_eq!(config.threshold, 7.0);
}

#[test]
fn test_config_invalid_fast_speed() {
    let config = SimConfig::default().with_fast_params(ClassParams::new(0.0, 1.33));
    assert!(config.validate().is_err());
}

#[test]
fn test_config_invalid_eff_energy_rate() {
    let config = SimConfig::default().with_eff_params(ClassParams::new(1.0, -1.0));
    assert!(config.validate().is_err());
}

#[test]
fn test_config_invalid_threshold() {
    let config = SimConfig::default().with_threshold(f64::INFINITY);
    assert!(config.validate().is_err());
}

#[test]
fn test_zero_unit_counts_pass_config_validation() {
    // Pool emptiness is judged against the workload at scheduler
    // construction, not here.
    let config = SimConfig::default().with_fast_units(0).with_eff_units(0);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_from_json() {
    let json = r#"{
        "fast_units": 4,
        "eff_units": 2,
        "fast": {"speed": 2.0, "energy_rate": 1.6},
        "eff": {"speed": 0.8, "energy_rate": 0.7},
        "threshold": 6.5
    }"#;
    let config = SimConfig::from_json_str(json).unwrap();
    assert_eq!(config.fast_units, 4);
    assert_eq!(config.eff.speed, 0.8);
    assert_eq!(config.threshold, 6.5);
}

#[test]
fn test_config_from_json_fills_defaults() {
    let config = SimConfig::from_json_str("{}").unwrap();
    assert_eq!(config.fast_units, 2);
    assert_eq!(config.fast, ClassParams::new(1.5, 1.33));
    assert_eq!(config.threshold, DEFAULT_THRESHOLD);

    let partial = SimConfig::from_json_str(r#"{"eff_units": 6}"#).unwrap();
    assert_eq!(partial.eff_units, 6);
    assert_eq!(partial.fast_units, 2);
}

#[test]
fn test_config_from_json_rejects_invalid_values() {
    let json = r#"{"fast": {"speed": -1.5, "energy_rate": 1.33}}"#;
    let err = SimConfig::from_json_str(json).unwrap_err();
    assert!(err.contains("fast speed"));
}

#[test]
fn test_config_from_json_rejects_malformed_input() {
    let err = SimConfig::from_json_str("{not json").unwrap_err();
    assert!(err.starts_with("parse error"));
}

#[test]
fn test_config_round_trips_through_json() {
    let config = SimConfig::default().with_threshold(9.0);
    let json = serde_json::to_string(&config).unwrap();
    let parsed = SimConfig::from_json_str(&json).unwrap();
    assert_eq!(parsed.threshold, 9.0);
    assert_eq!(parsed.fast, config.fast);
}

#[test]
fn test_workload_from_json() {
    let json = r#"[
        {"name": "TranscribeDebate", "difficulty": 5},
        {"name": "RenderQuiz", "difficulty": 2},
        {"name": "MapGraph", "difficulty": 1}
    ]"#;
    let tasks = workload::from_json_str(json).unwrap();
    assert_eq!(tasks.len(), 3);
    assert_eq!(tasks[0].name, "TranscribeDebate");
    assert_eq!(tasks[2].difficulty, 1.0);
}
