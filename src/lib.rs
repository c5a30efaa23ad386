// EPD Gateway - Swiss EPR Mobile Access Gateway client
// Copyright (c) 2025 EPD Gateway Contributors
// Licensed under the MIT License

//! # EPD Gateway
//!
//! Client library for the Mobile Access Gateway (MAG) of the Swiss
//! electronic patient record. It builds the FHIR resources of the IHE
//! mobile profiles and executes them against the gateway.
//!
//! ## Overview
//!
//! | Transaction | Profile | Entry point |
//! |---|---|---|
//! | ITI-65 Provide Document Bundle | MHD | [`adapters::mag::MagClient::upload_document`] |
//! | ITI-66 Find Document Lists | MHD | [`adapters::mag::MagClient::find_submission_sets`] |
//! | ITI-67 Find Document References | MHD | [`adapters::mag::MagClient::find_document_references`] |
//! | ITI-68 Retrieve Document | MHD | [`adapters::mag::MagClient::retrieve_document`] |
//! | ITI-78 Patient Demographics Query | PDQm | [`adapters::mag::MagClient::search_patients`] |
//! | ITI-83 Identifier Cross-reference | PIXm | [`adapters::mag::MagClient::lookup_identifiers`] |
//! | ITI-93 Patient Identity Feed | PMIR | [`adapters::mag::MagClient::patient_feed`] |
//!
//! ITI-104 is recognised and rejected; the gateway only accepts ITI-93.
//!
//! ## Architecture
//!
//! - [`domain`] - errors, identifiers and caller inputs
//! - [`fhir`] - wire models of the exchanged resources
//! - [`catalog`] - EPR document classification codes
//! - [`core`] - pure bundle builders and response unwrapping
//! - [`adapters`] - HTTP transport and the gateway client
//! - [`config`] - configuration management
//! - [`logging`] - structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use epd_gateway::adapters::mag::MagClient;
//! use epd_gateway::catalog;
//! use epd_gateway::config::EpdConfig;
//! use epd_gateway::domain::{DocumentFile, DocumentMetadata};
//! use epd_gateway::fhir::{Identifier, Patient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = EpdConfig::from_env()?;
//!     let client = MagClient::new(config.mag)?;
//!
//!     let patient = Patient {
//!         identifier: vec![Identifier::new("urn:oid:1.2.3.4", "PAT-1")],
//!         ..Default::default()
//!     };
//!     let file = DocumentFile::from_path("report.pdf", None).await?;
//!     let metadata = DocumentMetadata::builder()
//!         .title("Discharge report")
//!         .content_language("de-CH")
//!         .source_identifier("urn:oid:1.2.3.4.5")
//!         .category(catalog::class_code("419891008").ok_or("unknown class")?.coding())
//!         .type_coding(catalog::type_code("419891008").ok_or("unknown type")?.coding())
//!         .facility(catalog::facility_code("264358009").ok_or("unknown facility")?.coding())
//!         .practice_setting(catalog::practice_setting_code("394802001").ok_or("unknown setting")?.coding())
//!         .build()?;
//!
//!     let response = client.upload_document(patient, file, metadata).await?;
//!     println!("{} entries stored", response.entry.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`domain::Result`]. Precondition failures
//! ([`domain::InvalidArgument`]) are reported before any network call;
//! exchange failures are classified as exactly one
//! [`domain::TransportError`] variant and never retried.
//!
//! ## Logging
//!
//! The library emits `tracing` events; install a subscriber with
//! [`logging::init_logging`] or any other `tracing` subscriber.

pub mod adapters;
pub mod catalog;
pub mod config;
pub mod core;
pub mod domain;
pub mod fhir;
pub mod logging;
