//! Configuration schema types
//!
//! This module defines the configuration structure for the gateway client.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use url::Url;

/// Main gateway client configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpdConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Mobile Access Gateway connection
    pub mag: MagConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl EpdConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.mag.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Mobile Access Gateway connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MagConfig {
    /// FHIR base URL of the gateway, always ending with `/`
    pub base_url: String,

    /// Endpoint receiving ITI-93 messages, relative to `base_url` or absolute
    #[serde(default = "default_message_endpoint")]
    pub message_endpoint: String,

    /// `MessageHeader.source.endpoint` of identity feed messages
    #[serde(default)]
    pub source_endpoint: String,

    /// `MessageHeader.destination.endpoint` of identity feed messages
    #[serde(default)]
    pub destination_endpoint: String,

    /// Deadline of a single exchange
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Content type sent with request bodies
    #[serde(default = "default_content_type")]
    pub content_type: String,

    /// Rewrite `http:` document links to `https:` before ITI-68 retrieval
    #[serde(default = "default_true")]
    pub upgrade_insecure_links: bool,

    /// Static headers added to every request
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

impl MagConfig {
    /// Creates a configuration for `base_url` with every other setting at its default
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            message_endpoint: default_message_endpoint(),
            source_endpoint: String::new(),
            destination_endpoint: String::new(),
            timeout_seconds: default_timeout_seconds(),
            content_type: default_content_type(),
            upgrade_insecure_links: true,
            headers: HashMap::new(),
        }
    }

    /// Parsed base URL with a trailing slash
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute http(s) URL
    pub fn base(&self) -> Result<Url, String> {
        let url = Url::parse(&normalize_base_url(&self.base_url))
            .map_err(|e| format!("Invalid mag.base_url '{}': {}", self.base_url, e))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!(
                "mag.base_url must use http or https (got '{}')",
                url.scheme()
            ));
        }
        Ok(url)
    }

    pub(crate) fn normalize(&mut self) {
        self.base_url = normalize_base_url(&self.base_url);
    }

    fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("mag.base_url cannot be empty".to_string());
        }
        self.base()?;

        if self.message_endpoint.trim().is_empty() {
            return Err("mag.message_endpoint cannot be empty".to_string());
        }

        if self.timeout_seconds == 0 {
            return Err("mag.timeout_seconds must be > 0".to_string());
        }

        if self.content_type.trim().is_empty() {
            return Err("mag.content_type cannot be empty".to_string());
        }

        if let Some(name) = self.headers.keys().find(|name| name.trim().is_empty()) {
            return Err(format!("mag.headers contains an empty header name ('{name}')"));
        }

        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

fn normalize_base_url(base_url: &str) -> String {
    let trimmed = base_url.trim();
    if trimmed.is_empty() || trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_message_endpoint() -> String {
    "$process-message".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_content_type() -> String {
    "application/fhir+json;fhir=4.0".to_string()
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
