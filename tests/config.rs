//! Configuration system tests
//!
//! Tests for config paths, field config persistence, and building a scripted
//! session from a config file.

use editable_field::config::FieldConfig;
use editable_field::config_paths;
use editable_field::editable::{CharClass, EditableElement, InputConstraints, Mode, Properties};
use editable_field::session::{Command, Session};

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.to_string_lossy().contains("editable-field"));
    }
}

#[test]
fn test_field_file_ends_with_yaml() {
    if let Some(path) = config_paths::field_file() {
        assert!(path.to_string_lossy().ends_with("field.yaml"));
    }
}

#[test]
fn test_logs_dir_is_subdir_of_config() {
    if let (Some(config), Some(logs)) = (config_paths::config_dir(), config_paths::logs_dir()) {
        assert!(logs.starts_with(&config));
    }
}

// ========================================================================
// Field Config Tests
// ========================================================================

fn sample_config() -> FieldConfig {
    FieldConfig {
        field: Properties::new("zip", "12345".to_string())
            .required(true)
            .class("inline"),
        constraints: InputConstraints {
            min_length: Some(5),
            max_length: Some(5),
            char_filter: CharClass::Digits,
        },
    }
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("field.yaml");

    let config = sample_config();
    config.save_to(&path).unwrap();

    assert!(path.exists());
    assert_eq!(FieldConfig::load_from(&path).unwrap(), config);
}

#[test]
fn test_load_from_reports_path_on_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("field.yaml");
    std::fs::write(&path, "constraints:\n  char_filter: emoji\n").unwrap();

    let err = FieldConfig::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("field.yaml"));
}

#[test]
fn test_session_honours_config_constraints() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("field.yaml");
    sample_config().save_to(&path).unwrap();

    let config = FieldConfig::load_from(&path).unwrap();
    let mut session = Session::new(config).unwrap();
    assert_eq!(session.field().name(), "zip");
    assert!(session.field().required());

    session.execute(Command::Edit).unwrap();
    session.execute(Command::Type("123".to_string())).unwrap();
    session.execute(Command::Conclude).unwrap();
    assert_eq!(session.field().mode(), Mode::Editing);
    assert_eq!(session.field().value(), "12345");

    session.execute(Command::Type("54321".to_string())).unwrap();
    let report = session.execute(Command::Conclude).unwrap();
    assert_eq!(session.field().mode(), Mode::Viewing);
    assert_eq!(session.field().value(), "54321");
    assert!(report.contains("session concluded"));
}
