//! Integration tests for logging functionality
//!
//! A global subscriber can be installed once per process, so initialization
//! is exercised in a single test.

use epd_gateway::config::LoggingConfig;
use epd_gateway::logging::init_logging;
use epd_gateway::{log_transaction_complete, log_transaction_start};
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert!(!config.local_enabled);
    assert_eq!(config.local_rotation, "daily");
}

#[test]
fn test_invalid_level_is_rejected_before_install() {
    let err = init_logging("verbose", &LoggingConfig::default()).unwrap_err();
    assert!(err.to_string().contains("Invalid log level: verbose"));
}

#[test]
fn test_init_logging_with_file_layer() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("logs");
    let config = LoggingConfig {
        local_enabled: true,
        local_path: log_path.to_string_lossy().to_string(),
        local_rotation: "hourly".to_string(),
    };
    assert!(!log_path.exists());

    let guard = init_logging("debug", &config).unwrap();
    assert!(guard.writes_to_file());
    assert!(log_path.is_dir());

    log_transaction_start!("ITI-78", "Patient");
    log_transaction_complete!("ITI-78", 2, Duration::from_millis(15));

    let second = init_logging("info", &LoggingConfig::default());
    assert!(second.is_err());
}
