//! Domain models and types for the gateway client.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Identifiers** ([`TempUrn`], [`UuidOid`], [`SourceIdentifier`])
//! - **Caller inputs** ([`DocumentFile`], [`DocumentMetadata`])
//! - **Error types** ([`EpdError`], [`InvalidArgument`], [`TransportError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, EpdError>`]. Precondition
//! failures are reported as [`EpdError::InvalidArgument`] before any network
//! call is made:
//!
//! ```rust
//! use epd_gateway::domain::SourceIdentifier;
//!
//! fn parse(raw: &str) -> epd_gateway::domain::Result<SourceIdentifier> {
//!     Ok(raw.parse::<SourceIdentifier>()?)
//! }
//!
//! assert!(parse("urn:oid:1.2.3|PAT-1").is_ok());
//! assert!(parse("PAT-1").is_err());
//! ```

pub mod errors;
pub mod file;
pub mod ids;
pub mod metadata;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{EpdError, InvalidArgument, TransportError};
pub use file::DocumentFile;
pub use ids::{SourceIdentifier, TempUrn, UuidOid};
pub use metadata::{DocumentMetadata, DocumentMetadataBuilder};
pub use result::Result;
