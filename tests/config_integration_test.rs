//! Integration tests for configuration loading and validation
//!
//! Tests that modify environment variables hold `ENV_MUTEX`.

use epd_gateway::config::{load_config, EpdConfig};
use epd_gateway::domain::EpdError;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn cleanup_env_vars() {
    for var in [
        "EPD_APPLICATION_LOG_LEVEL",
        "EPD_MAG_BASE_URL",
        "EPD_MAG_MESSAGE_ENDPOINT",
        "EPD_MAG_SOURCE_ENDPOINT",
        "EPD_MAG_DESTINATION_ENDPOINT",
        "EPD_MAG_TIMEOUT_SECONDS",
        "EPD_MAG_CONTENT_TYPE",
        "EPD_MAG_UPGRADE_INSECURE_LINKS",
        "EPD_LOGGING_LOCAL_ENABLED",
        "EPD_LOGGING_LOCAL_PATH",
        "EPD_LOGGING_LOCAL_ROTATION",
        "TEST_MAG_TOKEN",
    ] {
        std::env::remove_var(var);
    }
}

fn write_config(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_load_complete_config() {
    let _guard = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config(
        r#"
[application]
log_level = "warn"

[mag]
base_url = "https://test.ahdis.ch/mag-pmp/fhir"
message_endpoint = "https://test.ahdis.ch/mag-pmp/fhir/$process-message"
source_endpoint = "http://test.ahdis.ch/mag-pmp/camel/source"
destination_endpoint = "http://test.ahdis.ch/mag-pmp/camel/destination"
timeout_seconds = 45
content_type = "application/fhir+json"
upgrade_insecure_links = false

[mag.headers]
X-Tenant = "bern"

[logging]
local_enabled = true
local_path = "/tmp/epd-gateway"
local_rotation = "hourly"
"#,
    );

    let config = load_config(temp_file.path()).unwrap();
    assert_eq!(config.application.log_level, "warn");
    assert_eq!(config.mag.base_url, "https://test.ahdis.ch/mag-pmp/fhir/");
    assert_eq!(
        config.mag.message_endpoint,
        "https://test.ahdis.ch/mag-pmp/fhir/$process-message"
    );
    assert_eq!(config.mag.timeout_seconds, 45);
    assert_eq!(config.mag.content_type, "application/fhir+json");
    assert!(!config.mag.upgrade_insecure_links);
    assert_eq!(config.mag.headers.len(), 1);
    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_load_minimal_config_uses_defaults() {
    let _guard = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config(
        r#"
[mag]
base_url = "https://mag.example.ch/fhir/"
"#,
    );

    let config = load_config(temp_file.path()).unwrap();
    assert_eq!(config.application.log_level, "info");
    assert_eq!(config.mag.message_endpoint, "$process-message");
    assert_eq!(config.mag.timeout_seconds, 30);
    assert_eq!(config.mag.content_type, "application/fhir+json;fhir=4.0");
    assert!(config.mag.upgrade_insecure_links);
    assert!(config.mag.headers.is_empty());
    assert!(!config.logging.local_enabled);
}

#[test]
fn test_env_var_substitution() {
    let _guard = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("TEST_MAG_TOKEN", "secret-token");

    let temp_file = write_config(
        r#"
# Authorization = "${NOT_SET_ANYWHERE}"
[mag]
base_url = "https://mag.example.ch/fhir/"

[mag.headers]
Authorization = "Bearer ${TEST_MAG_TOKEN}"
"#,
    );

    let config = load_config(temp_file.path()).unwrap();
    assert_eq!(
        config.mag.headers.get("Authorization").map(String::as_str),
        Some("Bearer secret-token")
    );
    cleanup_env_vars();
}

#[test]
fn test_missing_env_var_is_reported() {
    let _guard = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config(
        r#"
[mag]
base_url = "https://mag.example.ch/fhir/"

[mag.headers]
Authorization = "Bearer ${TEST_MAG_TOKEN}"
"#,
    );

    let err = load_config(temp_file.path()).unwrap_err();
    assert!(matches!(err, EpdError::Configuration(_)));
    assert!(err.to_string().contains("TEST_MAG_TOKEN"));
}

#[test]
fn test_env_overrides() {
    let _guard = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("EPD_APPLICATION_LOG_LEVEL", "debug");
    std::env::set_var("EPD_MAG_TIMEOUT_SECONDS", "12");
    std::env::set_var("EPD_MAG_UPGRADE_INSECURE_LINKS", "false");
    std::env::set_var("EPD_LOGGING_LOCAL_PATH", "/tmp/override");

    let temp_file = write_config(
        r#"
[mag]
base_url = "https://mag.example.ch/fhir/"
timeout_seconds = 60
"#,
    );

    let config = load_config(temp_file.path()).unwrap();
    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.mag.timeout_seconds, 12);
    assert!(!config.mag.upgrade_insecure_links);
    assert_eq!(config.logging.local_path, "/tmp/override");
    cleanup_env_vars();
}

#[test]
fn test_invalid_config_fails_validation() {
    let _guard = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config(
        r#"
[mag]
base_url = "https://mag.example.ch/fhir/"
timeout_seconds = 0
"#,
    );

    let err = load_config(temp_file.path()).unwrap_err();
    assert!(err
        .to_string()
        .contains("Configuration validation failed: mag.timeout_seconds must be > 0"));
}

#[test]
fn test_missing_mag_section() {
    let _guard = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config("[application]\nlog_level = \"info\"\n");
    let err = load_config(temp_file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse TOML"));
}

#[test]
fn test_from_env() {
    let _guard = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("EPD_MAG_BASE_URL", "https://mag.example.ch/fhir");
    std::env::set_var("EPD_MAG_SOURCE_ENDPOINT", "http://source.example.ch");

    let config = EpdConfig::from_env().unwrap();
    assert_eq!(config.mag.base_url, "https://mag.example.ch/fhir/");
    assert_eq!(config.mag.source_endpoint, "http://source.example.ch");
    assert_eq!(config.mag.timeout_seconds, 30);
    cleanup_env_vars();
}

#[test]
fn test_from_env_requires_base_url() {
    let _guard = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let err = EpdConfig::from_env().unwrap_err();
    assert!(err.to_string().contains("EPD_MAG_BASE_URL"));
}
