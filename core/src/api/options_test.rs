use std::io::Write;

use pretty_assertions::assert_eq;

use super::error::ConfigError;
use super::options::ExecutionLimits;

#[test]
fn test_default_limits() {
    let limits = ExecutionLimits::default();
    assert_eq!(limits.max_function_recursion_level, 5);
    assert_eq!(limits.max_until_execution_unique, 50);
    assert_eq!(limits.max_executions_without_builtins, 200);
    assert_eq!(limits.max_executions, 250);
    assert!(limits.validate().is_ok());
}

#[test]
fn test_empty_document_gives_defaults() {
    let limits = ExecutionLimits::from_toml_str("").unwrap();
    assert_eq!(limits, ExecutionLimits::default());
}

#[test]
fn test_partial_document_keeps_other_defaults() {
    let limits = ExecutionLimits::from_toml_str(
        "max_function_recursion_level = 2\nmax_executions = 5000\n",
    )
    .unwrap();

    assert_eq!(
        limits,
        ExecutionLimits {
            max_function_recursion_level: 2,
            max_executions: 5000,
            ..ExecutionLimits::default()
        }
    );
}

#[test]
fn test_unknown_key_is_rejected() {
    let result = ExecutionLimits::from_toml_str("max_depth = 3");
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn test_wrong_type_is_rejected() {
    let result = ExecutionLimits::from_toml_str("max_executions = \"many\"");
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn test_zero_limit_is_rejected() {
    let result = ExecutionLimits::from_toml_str("max_until_execution_unique = 0");
    match result {
        Err(ConfigError::InvalidLimit { field, .. }) => {
            assert_eq!(field, "max_until_execution_unique");
        }
        other => panic!("expected InvalidLimit, got {:?}", other),
    }
}

#[test]
fn test_unlimited_is_valid() {
    assert!(ExecutionLimits::unlimited().validate().is_ok());
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "max_executions_without_builtins = 42").unwrap();

    let limits = ExecutionLimits::from_file(file.path()).unwrap();
    assert_eq!(limits.max_executions_without_builtins, 42);
    assert_eq!(limits.max_executions, 250);
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("limits.toml");

    let err = ExecutionLimits::from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("limits.toml"));
}
