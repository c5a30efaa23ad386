//! External system integrations.
//!
//! - [`mag`] - Swiss EPR Mobile Access Gateway (MHD, PDQm, PIXm, PMIR)
//!
//! # Design Pattern
//!
//! Adapters isolate external dependencies. The gateway client talks to the
//! network only through the [`mag::HttpTransport`] trait, so tests and
//! embedding applications can substitute their own transport:
//!
//! ```rust,no_run
//! use epd_gateway::adapters::mag::MagClient;
//! use epd_gateway::config::MagConfig;
//! use epd_gateway::domain::SourceIdentifier;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut config = MagConfig::new("https://test.ahdis.ch/mag-pmp/fhir/");
//! config.timeout_seconds = 10;
//!
//! let client = MagClient::new(config)?;
//! let source = SourceIdentifier::new("urn:oid:2.16.756.5.30.1.178.1.1", "SPI-123")?;
//! let parameters = client
//!     .lookup_identifiers(&source, &["urn:oid:2.16.756.5.30.1.127.3.10.3".to_string()])
//!     .await?;
//! println!("{:?}", parameters.target_identifiers());
//! # Ok(())
//! # }
//! ```

pub mod mag;
