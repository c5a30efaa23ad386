//! Integration tests for ITI-93 identity feed messages

use epd_gateway::core::identity_feed::{
    IdentityFeedBuilder, PatientFeedAction, PATIENT_FEED_EVENT, TEMPORARY_BUNDLE_ID,
    TEMPORARY_MERGE_PATIENT_ID,
};
use epd_gateway::domain::{EpdError, InvalidArgument};
use epd_gateway::fhir::datatypes::Identifier;
use epd_gateway::fhir::organization::{create_organization, ContactPerson};
use epd_gateway::fhir::resources::LinkType;
use epd_gateway::fhir::{BundleType, HttpVerb, Patient, Reference, Resource};
use test_case::test_case;

const BASE: &str = "https://mag.example.ch/fhir/";

fn builder() -> IdentityFeedBuilder {
    IdentityFeedBuilder::new(BASE, "http://source.example.ch", "http://mag.example.ch")
}

fn organization() -> epd_gateway::fhir::Organization {
    let contact = ContactPerson {
        given: "Anna".to_string(),
        family: "Muster".to_string(),
        phone: Some("+41 31 000 00 00".to_string()),
        mail: Some("anna.muster@example.ch".to_string()),
    };
    create_organization(
        "Spital Bern",
        Identifier::new("urn:oid:2.16.756.5.30.1.178.1.1", ""),
        contact,
        None,
    )
    .unwrap()
}

fn patient(id: &str) -> Patient {
    Patient {
        id: Some(id.to_string()),
        identifier: vec![Identifier::new("urn:oid:2.16.756.5.30.1.178.1.1", "PAT-1")],
        ..Default::default()
    }
    .with_managing_organization(organization())
}

#[test_case("add")]
#[test_case("update")]
#[test_case("remove")]
fn test_missing_organization_reference_fails_for_every_action(name: &str) {
    let mut patient = patient("p1");
    patient.managing_organization = Some(Reference::to("Organization/other"));

    let action = PatientFeedAction::parse(name, None).unwrap();
    let err = builder().build(patient, action).unwrap_err();
    assert!(matches!(
        err,
        EpdError::InvalidArgument(InvalidArgument::UnreferencedOrganization)
    ));
}

#[test]
fn test_patient_without_contained_resource_fails() {
    let patient = Patient {
        id: Some("p1".to_string()),
        ..Default::default()
    };
    let err = builder().build(patient, PatientFeedAction::Add).unwrap_err();
    assert!(matches!(
        err,
        EpdError::InvalidArgument(InvalidArgument::MissingContainedOrganization)
    ));
}

#[test]
fn test_add_message_envelope() {
    let bundle = builder().build(patient("p1"), PatientFeedAction::Add).unwrap();
    let json = serde_json::to_value(&bundle).unwrap();

    assert_eq!(json["type"], "message");
    assert_eq!(json["entry"][0]["fullUrl"], "https://mag.example.ch/fhir/MessageHeader/1");
    let header = &json["entry"][0]["resource"];
    assert_eq!(header["resourceType"], "MessageHeader");
    assert_eq!(header["eventUri"], PATIENT_FEED_EVENT);
    assert_eq!(header["source"]["endpoint"], "http://source.example.ch");
    assert_eq!(header["destination"][0]["endpoint"], "http://mag.example.ch");
    assert_eq!(header["focus"][0]["reference"], "Patient/p1");

    let patient_entry = &json["entry"][1];
    assert_eq!(patient_entry["request"]["method"], "POST");
    assert_eq!(patient_entry["request"]["url"], "https://mag.example.ch/fhir/Patient");
    assert_eq!(patient_entry["resource"]["contained"][0]["resourceType"], "Organization");
}

#[test]
fn test_merge_with_same_id_uses_temporary_candidate_id() {
    let candidate = patient("p1");
    let action = PatientFeedAction::parse("merge", Some(candidate)).unwrap();
    let bundle = builder().build(patient("p1"), action).unwrap();

    assert_eq!(bundle.entry.len(), 2);
    let Some(Resource::Bundle(history)) = &bundle.entry[1].resource else {
        panic!("merge must nest a history bundle");
    };
    assert_eq!(history.bundle_type, BundleType::History);
    assert_eq!(history.id.as_deref(), Some(TEMPORARY_BUNDLE_ID));
    assert_eq!(
        history.entry[0].request.as_ref().map(|r| r.method),
        Some(HttpVerb::Put)
    );

    let Some(Resource::Patient(original)) = &history.entry[0].resource else {
        panic!("history entry must be the original patient");
    };
    assert_eq!(original.active, Some(false));
    assert_eq!(original.link.len(), 1);
    assert_eq!(original.link[0].link_type, LinkType::ReplacedBy);
    assert_eq!(
        original.link[0].other.reference.as_deref(),
        Some(format!("#{TEMPORARY_MERGE_PATIENT_ID}").as_str())
    );

    let candidate = original
        .contained
        .iter()
        .find_map(|r| match r {
            Resource::Patient(p) => Some(p),
            _ => None,
        })
        .unwrap();
    assert_eq!(candidate.id.as_deref(), Some(TEMPORARY_MERGE_PATIENT_ID));
    assert_eq!(candidate.active, Some(true));
}

#[test]
fn test_merge_without_candidate_is_rejected() {
    let err = PatientFeedAction::parse("merge", None).unwrap_err();
    assert!(matches!(
        err,
        EpdError::InvalidArgument(InvalidArgument::MissingMergeCandidate)
    ));
}

#[test]
fn test_unknown_action_builds_header_only() {
    let action = PatientFeedAction::parse("link", None).unwrap();
    assert_eq!(action, PatientFeedAction::Unsupported("link".to_string()));

    let bundle = builder().build(patient("p1"), action).unwrap();
    assert_eq!(bundle.entry.len(), 1);
}

#[test]
fn test_organization_factory_rejects_non_oid_system() {
    let err = create_organization(
        "Spital Bern",
        Identifier::new("http://example.ch/orgs", "org-1"),
        ContactPerson::default(),
        None,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        EpdError::InvalidArgument(InvalidArgument::InvalidOrganizationIdentifier(_))
    ));
}
