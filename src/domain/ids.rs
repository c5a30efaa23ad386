//! Identifier types used inside transaction bundles
//!
//! Temporary URNs cross-link resources inside one bundle before the server
//! assigns permanent ids. Source identifiers carry a patient id together with
//! the assigning system in the `system|value` token form used by PIXm.

use super::errors::InvalidArgument;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Temporary resource reference of the form `urn:uuid:<uuid>`
///
/// Generated fresh per request. A bundle entry's `fullUrl` and every
/// reference pointing at that entry share the same value.
///
/// # Examples
///
/// ```
/// use epd_gateway::domain::ids::TempUrn;
///
/// let a = TempUrn::generate();
/// let b = TempUrn::generate();
/// assert!(a.as_str().starts_with("urn:uuid:"));
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TempUrn(String);

impl TempUrn {
    /// Creates a new random `urn:uuid:` reference
    pub fn generate() -> Self {
        Self(format!("urn:uuid:{}", Uuid::new_v4()))
    }

    /// Returns the URN as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TempUrn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for TempUrn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Globally unique OID under the `2.25` arc, rendered as `urn:oid:2.25.<n>`
///
/// The numeric part is the decimal value of a random UUID, which is the
/// standard way to mint an OID without a registered root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UuidOid(String);

impl UuidOid {
    /// Creates a new random UUID-derived OID
    pub fn generate() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    /// Derives the OID for a given UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(format!("urn:oid:2.25.{}", uuid.as_u128()))
    }

    /// Returns the OID URN as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UuidOid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Patient identifier qualified by its assigning system
///
/// Format: `{system}|{value}`, e.g.
/// `urn:oid:2.16.756.5.30.1.178.1.1|PATIENT1`.
///
/// # Examples
///
/// ```
/// use epd_gateway::domain::ids::SourceIdentifier;
/// use std::str::FromStr;
///
/// let id = SourceIdentifier::from_str("urn:oid:1.2.3|PATIENT1").unwrap();
/// assert_eq!(id.system(), "urn:oid:1.2.3");
/// assert_eq!(id.value(), "PATIENT1");
/// assert_eq!(id.to_string(), "urn:oid:1.2.3|PATIENT1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceIdentifier {
    system: String,
    value: String,
}

impl SourceIdentifier {
    /// Creates a new source identifier
    ///
    /// # Returns
    ///
    /// Returns `InvalidArgument::InvalidSourceIdentifier` if either part is
    /// empty or the system contains `|`
    pub fn new(
        system: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, InvalidArgument> {
        let system = system.into();
        let value = value.into();
        if system.trim().is_empty() {
            return Err(invalid("Identifier system cannot be empty".to_string()));
        }
        if value.trim().is_empty() {
            return Err(invalid("Identifier value cannot be empty".to_string()));
        }
        if system.contains('|') {
            return Err(invalid(format!(
                "Identifier system must not contain '|': {system}"
            )));
        }
        Ok(Self { system, value })
    }

    /// Assigning system (usually an OID URN)
    pub fn system(&self) -> &str {
        &self.system
    }

    /// Identifier value within the system
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for SourceIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.system, self.value)
    }
}

impl FromStr for SourceIdentifier {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (system, value) = s
            .split_once('|')
            .ok_or_else(|| invalid(format!("Expected format {{system}}|{{value}}, got: {s}")))?;
        Self::new(system, value)
    }
}

fn invalid(reason: String) -> InvalidArgument {
    InvalidArgument::InvalidSourceIdentifier(reason)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_urn_format() {
        let urn = TempUrn::generate();
        let uuid_part = urn.as_str().strip_prefix("urn:uuid:").unwrap();
        assert!(Uuid::parse_str(uuid_part).is_ok());
    }

    #[test]
    fn test_temp_urn_unique() {
        let urns: std::collections::HashSet<_> = (0..100).map(|_| TempUrn::generate()).collect();
        assert_eq!(urns.len(), 100);
    }

    #[test]
    fn test_uuid_oid_from_uuid() {
        let uuid = Uuid::from_u128(42);
        assert_eq!(UuidOid::from_uuid(uuid).as_str(), "urn:oid:2.25.42");
    }

    #[test]
    fn test_uuid_oid_only_digits_after_arc() {
        let oid = UuidOid::generate();
        let digits = oid.as_str().strip_prefix("urn:oid:2.25.").unwrap();
        assert!(!digits.is_empty());
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_source_identifier_parse() {
        let id: SourceIdentifier = "urn:oid:2.16.756.5.30.1.178.1.1|PATIENT1".parse().unwrap();
        assert_eq!(id.system(), "urn:oid:2.16.756.5.30.1.178.1.1");
        assert_eq!(id.value(), "PATIENT1");
    }

    #[test]
    fn test_source_identifier_value_may_contain_pipe() {
        let id: SourceIdentifier = "urn:oid:1.2|a|b".parse().unwrap();
        assert_eq!(id.value(), "a|b");
    }

    #[test]
    fn test_source_identifier_invalid() {
        assert!("no-separator".parse::<SourceIdentifier>().is_err());
        assert!("|value".parse::<SourceIdentifier>().is_err());
        assert!("urn:oid:1.2|".parse::<SourceIdentifier>().is_err());
        assert!(SourceIdentifier::new("a|b", "c").is_err());
    }

    #[test]
    fn test_source_identifier_error_converts_to_epd_error() {
        use crate::domain::{EpdError, Result};

        fn parse(raw: &str) -> Result<SourceIdentifier> {
            Ok(raw.parse::<SourceIdentifier>()?)
        }

        let err = parse("PAT-1").unwrap_err();
        assert!(matches!(
            err,
            EpdError::InvalidArgument(InvalidArgument::InvalidSourceIdentifier(_))
        ));
        assert!(err.to_string().contains("Expected format {system}|{value}, got: PAT-1"));
        assert!(parse("urn:oid:1.2.3|PAT-1").is_ok());
    }
}
