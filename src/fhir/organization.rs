//! Managing organization factory

use super::datatypes::{Address, ContactPoint, ContactPointSystem, HumanName, Identifier};
use super::resources::{Organization, OrganizationContact};
use crate::domain::errors::InvalidArgument;
use crate::domain::result::Result;
use uuid::Uuid;

/// Contact person of an organization
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactPerson {
    pub given: String,
    pub family: String,
    pub phone: Option<String>,
    pub mail: Option<String>,
}

/// Creates an Organization with a random UUID id
///
/// The identifier value falls back to `name` when empty.
///
/// # Errors
///
/// Returns [`InvalidArgument::InvalidOrganizationIdentifier`] if the
/// identifier system is not an OID URN.
///
/// # Examples
///
/// ```
/// use epd_gateway::fhir::datatypes::Identifier;
/// use epd_gateway::fhir::organization::{create_organization, ContactPerson};
///
/// let contact = ContactPerson {
///     given: "Anna".to_string(),
///     family: "Muster".to_string(),
///     ..Default::default()
/// };
/// let mut identifier = Identifier::default();
/// identifier.system = Some("urn:oid:2.16.756.5.30.1.178.1.1".to_string());
///
/// let org = create_organization("Spital Bern", identifier, contact, None).unwrap();
/// assert_eq!(org.identifier[0].value.as_deref(), Some("Spital Bern"));
/// ```
pub fn create_organization(
    name: &str,
    mut identifier: Identifier,
    contact: ContactPerson,
    address: Option<Address>,
) -> Result<Organization> {
    match identifier.system.as_deref() {
        Some(system) if system.contains("urn:oid:") => {}
        other => {
            return Err(InvalidArgument::InvalidOrganizationIdentifier(
                other.unwrap_or("<no system>").to_string(),
            )
            .into())
        }
    }

    if identifier.value.as_deref().map_or(true, str::is_empty) {
        identifier.value = Some(name.to_string());
    }

    let mut telecom = Vec::new();
    if let Some(phone) = contact.phone.filter(|p| !p.is_empty()) {
        telecom.push(ContactPoint::new(ContactPointSystem::Phone, phone));
    }
    if let Some(mail) = contact.mail.filter(|m| !m.is_empty()) {
        telecom.push(ContactPoint::new(ContactPointSystem::Email, mail));
    }

    Ok(Organization {
        id: Some(Uuid::new_v4().to_string()),
        identifier: vec![identifier],
        name: Some(name.to_string()),
        address: address.into_iter().collect(),
        contact: vec![OrganizationContact {
            name: Some(HumanName {
                use_: None,
                family: Some(contact.family),
                given: vec![contact.given],
            }),
            telecom,
        }],
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::EpdError;

    fn oid_identifier(value: &str) -> Identifier {
        Identifier::new("urn:oid:2.16.756.5.30.1.178.1.1", value)
    }

    fn contact() -> ContactPerson {
        ContactPerson {
            given: "Anna".to_string(),
            family: "Muster".to_string(),
            phone: Some("+41 31 000 00 00".to_string()),
            mail: Some("anna@spital.ch".to_string()),
        }
    }

    #[test]
    fn test_rejects_identifier_without_oid_system() {
        let result = create_organization(
            "Spital",
            Identifier::new("http://example.org", "1"),
            contact(),
            None,
        );
        match result {
            Err(EpdError::InvalidArgument(InvalidArgument::InvalidOrganizationIdentifier(s))) => {
                assert_eq!(s, "http://example.org")
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_identifier_without_system() {
        let err = create_organization("Spital", Identifier::value_only("1"), contact(), None)
            .unwrap_err();
        assert!(err.to_string().contains("<no system>"));
    }

    #[test]
    fn test_keeps_identifier_value() {
        let org = create_organization("Spital", oid_identifier("GLN-1"), contact(), None).unwrap();
        assert_eq!(org.identifier[0].value.as_deref(), Some("GLN-1"));
        assert!(org.address.is_empty());
    }

    #[test]
    fn test_contact_telecoms_in_order() {
        let org = create_organization("Spital", oid_identifier(""), contact(), None).unwrap();
        assert_eq!(org.identifier[0].value.as_deref(), Some("Spital"));
        let telecom = &org.contact[0].telecom;
        assert_eq!(telecom.len(), 2);
        assert_eq!(telecom[0].system, Some(ContactPointSystem::Phone));
        assert_eq!(telecom[1].system, Some(ContactPointSystem::Email));
    }

    #[test]
    fn test_ids_are_unique() {
        let a = create_organization("A", oid_identifier("1"), contact(), None).unwrap();
        let b = create_organization("A", oid_identifier("1"), contact(), None).unwrap();
        assert_ne!(a.id, b.id);
    }
}
