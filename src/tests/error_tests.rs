// Category 1: Error Handling Tests (error.rs)
// Tests for AppError conversions, Display output and classification

use crate::error::{AppError, AppResult, ErrorKind};

/// Test Case 1.1: Convert Rusqlite Error to AppError
/// When database operations fail, convert to AppError::Database
#[test]
fn test_database_error_conversion() {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    let result: Result<(), rusqlite::Error> = conn.execute("INVALID SQL STATEMENT", []).map(|_| ());

    let app_error: AppError = result.unwrap_err().into();
    match app_error {
        AppError::Database(_) => {}, // Expected
        other => panic!("Expected AppError::Database, got {:?}", other),
    }
}

/// Test Case 1.2: Convert Serde JSON Error to AppError
#[test]
fn test_serde_error_conversion() {
    let result: Result<serde_json::Value, serde_json::Error> = serde_json::from_str("{ invalid json }");

    let app_error: AppError = result.unwrap_err().into();
    match app_error {
        AppError::Serde(_) => {}, // Expected
        other => panic!("Expected AppError::Serde, got {:?}", other),
    }
}

/// Test Case 1.3: Domain errors classify by kind
#[test]
fn test_error_kinds() {
    assert_eq!(AppError::Validation("x".into()).kind(), ErrorKind::Validation);
    assert_eq!(AppError::NotFound("rev1".into()).kind(), ErrorKind::NotFound);
    assert_eq!(AppError::Unauthorized("no".into()).kind(), ErrorKind::Authorization);
    assert_eq!(AppError::Internal("boom".into()).kind(), ErrorKind::Other);
    assert_eq!(AppError::MissingConfig("KEY").kind(), ErrorKind::Other);
}

/// Test Case 1.4: AppError Display - NotFound names the id
#[test]
fn test_not_found_display() {
    let display = format!("{}", AppError::NotFound("rev042".to_string()));
    assert!(display.contains("not found"));
    assert!(display.contains("rev042"));
}

/// Test Case 1.5: AppError Display - InvalidConfig names key and value
#[test]
fn test_invalid_config_display() {
    let error = AppError::InvalidConfig {
        key: "REVIEWS_BACKEND",
        value: "postgres".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("REVIEWS_BACKEND"));
    assert!(display.contains("postgres"));
}

/// Test Case 1.6: AppError Display - MissingConfig
#[test]
fn test_missing_config_display() {
    let display = format!("{}", AppError::MissingConfig("REVIEWS_CURRENT_USER"));
    assert!(display.contains("missing configuration value"));
    assert!(display.contains("REVIEWS_CURRENT_USER"));
}

/// Test Case 1.7: AppResult type alias works correctly
#[test]
fn test_app_result_type_alias() {
    fn returns_ok() -> AppResult<i32> {
        Ok(42)
    }

    fn returns_err() -> AppResult<i32> {
        Err(AppError::Internal("test".to_string()))
    }

    assert_eq!(returns_ok().unwrap(), 42);
    assert!(returns_err().is_err());
}
