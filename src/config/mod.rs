//! Configuration management for the gateway client.
//!
//! # Overview
//!
//! Configuration comes from a TOML file or purely from the environment, with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `EPD_<SECTION>_<KEY>` overrides
//! - Default values for optional settings
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use epd_gateway::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("epd-gateway.toml")?;
//! println!("Gateway: {}", config.mag.base_url);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - log level
//! - [`MagConfig`] - gateway base URL, endpoints, timeout, headers
//! - [`LoggingConfig`] - local file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [mag]
//! base_url = "https://test.ahdis.ch/mag-pmp/fhir/"
//! source_endpoint = "http://test.ahdis.ch/mag-pmp/camel/source"
//! destination_endpoint = "http://test.ahdis.ch/mag-pmp/camel/destination"
//! timeout_seconds = 30
//!
//! [mag.headers]
//! Authorization = "Bearer ${EPD_MAG_TOKEN}"
//!
//! [logging]
//! local_enabled = true
//! local_path = "./logs"
//! local_rotation = "daily"
//! ```

pub mod loader;
pub mod schema;

pub use loader::load_config;
pub use schema::{ApplicationConfig, EpdConfig, LoggingConfig, MagConfig};
