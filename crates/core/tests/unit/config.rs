//! # Configuration Tests
//!
//! Defaults, JSON deserialization, mode aliases and validation.

use bfcalc_core::common::{CalcError, ConfigError};
use bfcalc_core::config::*;
use bfcalc_core::Calculator;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.general.mode, Mode::BigNumber);
    assert_eq!(config.general.modules_dir, None);
    assert_eq!(config.machine.tape_size, 30_000);
    assert_eq!(config.machine.step_limit, None);
    assert!(!config.machine.trace);
    assert_eq!(config.arith.max_exponent, 1000);
    assert_eq!(config.arith.max_result_bits, 1_000_000);
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_json_is_default() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config.general.mode, Mode::BigNumber);
    assert_eq!(config.machine.tape_size, 30_000);
}

#[test]
fn test_full_json() {
    let json = r#"{
        "general": { "mode": "EightBit", "modules_dir": "/opt/bf" },
        "machine": { "tape_size": 128, "step_limit": 5000, "trace": true },
        "arith": { "max_exponent": 64, "max_result_bits": 4096 }
    }"#;
    let config = Config::from_json(json).unwrap();
    assert_eq!(config.general.mode, Mode::EightBit);
    assert_eq!(
        config.general.modules_dir.as_deref(),
        Some(std::path::Path::new("/opt/bf"))
    );
    assert_eq!(config.machine.tape_size, 128);
    assert_eq!(config.machine.step_limit, Some(5000));
    assert!(config.machine.trace);
    assert_eq!(config.arith.max_exponent, 64);
    assert_eq!(config.arith.max_result_bits, 4096);
}

#[test]
fn test_partial_section_keeps_field_defaults() {
    let config = Config::from_json(r#"{ "machine": { "step_limit": null } }"#).unwrap();
    assert_eq!(config.machine.tape_size, 30_000);
    assert_eq!(config.machine.step_limit, None);
}

#[rstest]
#[case("EightBit", Mode::EightBit)]
#[case("8bit", Mode::EightBit)]
#[case("BigNumber", Mode::BigNumber)]
#[case("big", Mode::BigNumber)]
fn test_mode_names(#[case] name: &str, #[case] expected: Mode) {
    let json = format!(r#"{{ "general": {{ "mode": "{name}" }} }}"#);
    assert_eq!(Config::from_json(&json).unwrap().general.mode, expected);
}

#[test]
fn test_unknown_mode_is_json_error() {
    let err = Config::from_json(r#"{ "general": { "mode": "16bit" } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)), "{err:?}");
}

#[test]
fn test_malformed_json() {
    assert!(matches!(Config::from_json("{"), Err(ConfigError::Json(_))));
}

#[test]
fn test_zero_tape_rejected() {
    let err = Config::from_json(r#"{ "machine": { "tape_size": 0 } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
    assert_eq!(
        err.to_string(),
        "invalid configuration: machine.tape_size must be at least 1"
    );
}

#[test]
fn test_zero_step_limit_rejected() {
    let err = Config::from_json(r#"{ "machine": { "step_limit": 0 } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_calculator_validates_config() {
    let mut config = Config::default();
    config.machine.tape_size = 0;
    let err = Calculator::new(&config).unwrap_err();
    assert!(matches!(err, CalcError::Config(ConfigError::Invalid(_))), "{err:?}");
}

#[test]
fn test_mode_banner() {
    assert_eq!(Mode::EightBit.describe(), "8-bit (results modulo 256)");
    assert_eq!(Mode::BigNumber.describe(), "Big numbers (no limits)");
}
