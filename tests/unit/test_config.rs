//! Unit tests for the config module
//!
//! Tests cover:
//! - Config defaults
//! - Loading from an explicit TOML file
//! - Validation failures
//! - Environment overrides

use std::io::Write;

use circq::config::{Config, LoggingConfig};
use circq::CircqError;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_default_logging_config() {
    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "warn");
    assert!(!logging.json);
}

#[test]
fn test_load_explicit_file() {
    let file = write_config(
        r#"
[buffer]
initial_capacity = 8

[window]
replacements = 3

[logging]
json = true
"#,
    );
    let config = Config::load(file.path().to_str()).unwrap();
    assert_eq!(config.buffer.initial_capacity, 8);
    assert_eq!(config.window.replacements, 3);
    assert!(config.logging.json);
}

#[test]
fn test_load_empty_file_uses_defaults() {
    let file = write_config("");
    let config = Config::load(file.path().to_str()).unwrap();
    assert_eq!(config.buffer.initial_capacity, 4);
    assert_eq!(config.window.replacements, 0);
}

#[test]
fn test_load_missing_file_fails() {
    let err = Config::load(Some("/nonexistent/circq.toml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read config"));
}

#[test]
fn test_load_malformed_file_fails() {
    let file = write_config("[buffer\ninitial_capacity = ");
    assert!(Config::load(file.path().to_str()).is_err());
}

#[test]
fn test_load_rejects_zero_capacity() {
    let file = write_config("[buffer]\ninitial_capacity = 0\n");
    let err = Config::load(file.path().to_str()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<CircqError>(),
        Some(CircqError::Config(_))
    ));
}

#[test]
fn test_env_overrides() {
    std::env::set_var("CIRCQ_LOG_LEVEL", "circq=debug");
    std::env::set_var("CIRCQ_REPLACEMENTS", "not-a-number");

    let mut config = Config::default();
    config.apply_env_overrides();

    std::env::remove_var("CIRCQ_LOG_LEVEL");
    std::env::remove_var("CIRCQ_REPLACEMENTS");

    assert_eq!(config.logging.level, "circq=debug");
    assert_eq!(config.window.replacements, 0);
}
