//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{ApplicationConfig, EpdConfig, LoggingConfig, MagConfig};
use crate::domain::errors::EpdError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into EpdConfig
/// 4. Applies environment variable overrides (EPD_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns `EpdError::Configuration` if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use epd_gateway::config::loader::load_config;
///
/// let config = load_config("epd-gateway.toml").expect("Failed to load config");
/// println!("{}", config.mag.base_url);
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<EpdConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(EpdError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        EpdError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: EpdConfig = toml::from_str(&contents)
        .map_err(|e| EpdError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config);
    finish(config)
}

impl EpdConfig {
    /// Builds the configuration from environment variables only
    ///
    /// A `.env` file in the working directory is loaded first when present.
    /// `EPD_MAG_BASE_URL` is required; every other setting falls back to its
    /// default and honours the same `EPD_*` overrides as [`load_config`].
    ///
    /// # Errors
    ///
    /// Returns `EpdError::Configuration` if `EPD_MAG_BASE_URL` is missing or
    /// the resulting configuration is invalid.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let base_url = std::env::var("EPD_MAG_BASE_URL").map_err(|_| {
            EpdError::Configuration(
                "Missing required environment variable: EPD_MAG_BASE_URL".to_string(),
            )
        })?;

        let mut config = EpdConfig {
            application: ApplicationConfig::default(),
            mag: MagConfig::new(base_url),
            logging: LoggingConfig::default(),
        };
        apply_env_overrides(&mut config);
        finish(config)
    }
}

fn finish(mut config: EpdConfig) -> Result<EpdConfig> {
    config.mag.normalize();
    config.validate().map_err(|e| {
        EpdError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    tracing::debug!(
        base_url = %config.mag.base_url,
        timeout_seconds = config.mag.timeout_seconds,
        extra_headers = config.mag.headers.len(),
        "Configuration loaded"
    );
    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied unchanged.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| EpdError::Configuration(format!("Invalid substitution pattern: {}", e)))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(EpdError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using EPD_* prefix
///
/// Environment variables follow the pattern: EPD_<SECTION>_<KEY>
/// For example: EPD_MAG_BASE_URL, EPD_LOGGING_LOCAL_PATH.
/// Values that fail to parse leave the setting untouched.
fn apply_env_overrides(config: &mut EpdConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("EPD_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Gateway overrides
    if let Ok(val) = std::env::var("EPD_MAG_BASE_URL") {
        config.mag.base_url = val;
    }
    if let Ok(val) = std::env::var("EPD_MAG_MESSAGE_ENDPOINT") {
        config.mag.message_endpoint = val;
    }
    if let Ok(val) = std::env::var("EPD_MAG_SOURCE_ENDPOINT") {
        config.mag.source_endpoint = val;
    }
    if let Ok(val) = std::env::var("EPD_MAG_DESTINATION_ENDPOINT") {
        config.mag.destination_endpoint = val;
    }
    if let Ok(val) = std::env::var("EPD_MAG_TIMEOUT_SECONDS") {
        if let Ok(timeout) = val.parse() {
            config.mag.timeout_seconds = timeout;
        }
    }
    if let Ok(val) = std::env::var("EPD_MAG_CONTENT_TYPE") {
        config.mag.content_type = val;
    }
    if let Ok(val) = std::env::var("EPD_MAG_UPGRADE_INSECURE_LINKS") {
        if let Ok(upgrade) = val.parse() {
            config.mag.upgrade_insecure_links = upgrade;
        }
    }

    // Logging overrides
    if let Ok(val) = std::env::var("EPD_LOGGING_LOCAL_ENABLED") {
        if let Ok(enabled) = val.parse() {
            config.logging.local_enabled = enabled;
        }
    }
    if let Ok(val) = std::env::var("EPD_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("EPD_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }
}
