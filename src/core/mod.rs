//! Transaction builders
//!
//! Pure construction and unwrapping logic; nothing in this module performs
//! network I/O.
//!
//! # Modules
//!
//! - [`document_bundle`] - ITI-65 Provide Document Bundle
//! - [`encoding`] - base64 content of `Binary` resources
//! - [`identity_feed`] - ITI-93 Patient Identity Feed messages
//! - [`queries`] - ITI-66/67/78/83 parameters and response unwrapping
//!
//! # Example
//!
//! ```rust
//! use epd_gateway::core::identity_feed::{IdentityFeedBuilder, PatientFeedAction};
//! use epd_gateway::fhir::{Organization, Patient};
//!
//! let organization = Organization {
//!     id: Some("org-1".to_string()),
//!     ..Default::default()
//! };
//! let patient = Patient::default().with_managing_organization(organization);
//!
//! let bundle = IdentityFeedBuilder::new(
//!     "https://mag.example.ch/fhir/",
//!     "http://source.example.ch",
//!     "http://mag.example.ch",
//! )
//! .build(patient, PatientFeedAction::Add)
//! .unwrap();
//!
//! assert_eq!(bundle.entry.len(), 2);
//! ```

pub mod document_bundle;
pub mod encoding;
pub mod identity_feed;
pub mod queries;
