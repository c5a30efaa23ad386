//! Domain error types
//!
//! Every failure path of the gateway client ends in one of these types.
//! Third-party error types (reqwest, serde_json, toml) are converted at the
//! boundary and never exposed to callers.

use thiserror::Error;

/// Main gateway error type
#[derive(Debug, Error)]
pub enum EpdError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Precondition violations detected before any I/O
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),

    /// Network exchange failures
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// File content could not be converted to the binary payload
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// The server answered with a resource of an unexpected type
    #[error("Unexpected resource: expected {expected}, got {found}")]
    UnexpectedResource { expected: String, found: String },

    /// Transaction recognised but not supported by the gateway
    #[error("Unsupported transaction: {0}")]
    Unsupported(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Precondition failures
///
/// Always local, never retried, and reported before any network attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    /// Patient missing or without any identifier
    #[error("Patient resource missing or incomplete")]
    InvalidPatient,

    /// No file supplied for upload
    #[error("File is missing")]
    MissingFile,

    /// No document metadata supplied for upload
    #[error("Meta data is missing")]
    MissingMetadata,

    /// Type code not allowed for the class code
    #[error("Type code {type_code} is not allowed for class code {class_code}")]
    IncompatibleTypeCode {
        class_code: String,
        type_code: String,
    },

    /// Patient has no contained managing organization
    #[error("Patient resource needs to contain an Organization resource of the managing organization")]
    MissingContainedOrganization,

    /// managingOrganization does not point at the contained organization
    #[error("Contained Organization resource needs to be referenced in patient.managingOrganization")]
    UnreferencedOrganization,

    /// Merge requested without a surviving patient
    #[error("A merge candidate is required for the merge action")]
    MissingMergeCandidate,

    /// Nothing resolvable to download
    #[error("No valid URL to document")]
    NoDocumentUrl,

    /// Malformed `system|value` identifier
    #[error("Invalid source identifier: {0}")]
    InvalidSourceIdentifier(String),

    /// Organization identifier without an OID system
    #[error("Organization identifier needs a system OID (provided was: {0})")]
    InvalidOrganizationIdentifier(String),

    /// Search parameters that cannot be mapped to a query string
    #[error("Invalid query parameters: {0}")]
    InvalidQuery(String),
}

/// Network exchange outcome classification
///
/// Exactly one variant is produced per failed exchange.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Response received with a status outside the success range
    #[error("Status: {code}. {status_text}")]
    Status { code: u16, status_text: String },

    /// No response before the deadline
    #[error("Request timed out without response from server after {elapsed_seconds} seconds")]
    Timeout { elapsed_seconds: u64 },

    /// Connection reset, DNS failure, refused connection, unreadable body
    #[error("Network error: {0}")]
    Network(String),
}

impl TransportError {
    /// HTTP status code, if the server answered at all
    pub fn status_code(&self) -> Option<u16> {
        match self {
            TransportError::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for EpdError {
    fn from(err: std::io::Error) -> Self {
        EpdError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for EpdError {
    fn from(err: serde_json::Error) -> Self {
        EpdError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for EpdError {
    fn from(err: toml::de::Error) -> Self {
        EpdError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epd_error_display() {
        let err = EpdError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_invalid_argument_conversion() {
        let err: EpdError = InvalidArgument::MissingFile.into();
        assert!(matches!(
            err,
            EpdError::InvalidArgument(InvalidArgument::MissingFile)
        ));
        assert_eq!(err.to_string(), "Invalid argument: File is missing");
    }

    #[test]
    fn test_transport_error_conversion() {
        let err: EpdError = TransportError::Timeout { elapsed_seconds: 3 }.into();
        assert!(matches!(err, EpdError::Transport(_)));
        assert!(err.to_string().contains("3 seconds"));
    }

    #[test]
    fn test_status_error_display() {
        let err = TransportError::Status {
            code: 404,
            status_text: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "Status: 404. Not Found");
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(
            TransportError::Network("reset".to_string()).status_code(),
            None
        );
    }

    #[test]
    fn test_incompatible_type_code_display() {
        let err = InvalidArgument::IncompatibleTypeCode {
            class_code: "419891008".to_string(),
            type_code: "371529009".to_string(),
        };
        assert!(err.to_string().contains("371529009"));
        assert!(err.to_string().contains("419891008"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: EpdError = io_err.into();
        assert!(matches!(err, EpdError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: EpdError = json_err.into();
        assert!(matches!(err, EpdError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: EpdError = toml_err.into();
        assert!(matches!(err, EpdError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_epd_error_implements_std_error() {
        let err = EpdError::Unsupported("ITI-104".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
