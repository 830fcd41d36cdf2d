//! Tests for loading scorer configuration from disk.

use std::io::Write;
use strictly_bowling_cli::{OutputFormat, ScorerConfig};

#[test]
fn test_load_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Temp file");
    writeln!(
        file,
        r#"
log_filter = "debug,strictly_bowling=trace"
format = "json"
show_marks = false
"#
    )
    .expect("Write config");

    let config = ScorerConfig::from_file(file.path()).expect("Valid config");
    assert_eq!(config.log_filter(), "debug,strictly_bowling=trace");
    assert_eq!(config.format(), &OutputFormat::Json);
    assert!(!config.show_marks());
}

#[test]
fn test_partial_config_keeps_defaults() {
    let mut file = tempfile::NamedTempFile::new().expect("Temp file");
    writeln!(file, r#"format = "text""#).expect("Write config");

    let config = ScorerConfig::from_file(file.path()).expect("Valid config");
    assert_eq!(config, ScorerConfig::default());
}

#[test]
fn test_missing_file_reports_error() {
    let dir = tempfile::tempdir().expect("Temp dir");
    let err = ScorerConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_unknown_format_rejected() {
    let err = ScorerConfig::from_toml(r#"format = "yaml""#).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}
