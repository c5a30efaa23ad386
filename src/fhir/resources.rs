//! FHIR R4 resources exchanged with the Mobile Access Gateway
//!
//! [`Resource`] is the `resourceType`-tagged sum of every shape the client
//! produces or consumes. Resource types the client does not model are kept
//! as raw JSON in [`Resource::Other`]. Contained resources are owned by their container
//! (`Patient.contained`, `DocumentReference.contained`) and referenced by a
//! local `#id` fragment, so the graph stays a tree.

use super::bundle::Bundle;
use super::datatypes::{
    Address, Attachment, CodeableConcept, Coding, ContactPoint, Extension, HumanName, Identifier,
    Meta, Reference,
};
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Any resource exchanged with the gateway
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "resourceType")]
pub enum Resource {
    Binary(Binary),
    Bundle(Bundle),
    DocumentReference(DocumentReference),
    List(ListResource),
    MessageHeader(MessageHeader),
    OperationOutcome(OperationOutcome),
    Organization(Organization),
    Parameters(Parameters),
    Patient(Patient),
    /// Any other resource type, e.g. a contained `Practitioner`
    #[serde(untagged)]
    Other(Value),
}

impl Resource {
    /// Value of the `resourceType` discriminator
    pub fn resource_type(&self) -> &str {
        match self {
            Resource::Binary(_) => "Binary",
            Resource::Bundle(_) => "Bundle",
            Resource::DocumentReference(_) => "DocumentReference",
            Resource::List(_) => "List",
            Resource::MessageHeader(_) => "MessageHeader",
            Resource::OperationOutcome(_) => "OperationOutcome",
            Resource::Organization(_) => "Organization",
            Resource::Parameters(_) => "Parameters",
            Resource::Patient(_) => "Patient",
            Resource::Other(value) => value
                .get("resourceType")
                .and_then(Value::as_str)
                .unwrap_or_default(),
        }
    }

    /// Logical id of the resource, if assigned
    pub fn id(&self) -> Option<&str> {
        match self {
            Resource::Binary(r) => r.id.as_deref(),
            Resource::Bundle(r) => r.id.as_deref(),
            Resource::DocumentReference(r) => r.id.as_deref(),
            Resource::List(r) => r.id.as_deref(),
            Resource::MessageHeader(r) => r.id.as_deref(),
            Resource::OperationOutcome(r) => r.id.as_deref(),
            Resource::Organization(r) => r.id.as_deref(),
            Resource::Parameters(r) => r.id.as_deref(),
            Resource::Patient(r) => r.id.as_deref(),
            Resource::Other(value) => value.get("id").and_then(Value::as_str),
        }
    }
}

impl<'de> Deserialize<'de> for Resource {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let object = match Value::deserialize(deserializer)? {
            Value::Object(object) => object,
            _ => return Err(de::Error::custom("resource must be a JSON object")),
        };
        let resource_type = match object.get("resourceType").and_then(Value::as_str) {
            Some(resource_type) => resource_type.to_string(),
            None => return Err(de::Error::missing_field("resourceType")),
        };

        let resource = match resource_type.as_str() {
            "Binary" => typed(object, Resource::Binary),
            "Bundle" => typed(object, Resource::Bundle),
            "DocumentReference" => typed(object, Resource::DocumentReference),
            "List" => typed(object, Resource::List),
            "MessageHeader" => typed(object, Resource::MessageHeader),
            "OperationOutcome" => typed(object, Resource::OperationOutcome),
            "Organization" => typed(object, Resource::Organization),
            "Parameters" => typed(object, Resource::Parameters),
            "Patient" => typed(object, Resource::Patient),
            _ => return Ok(Resource::Other(Value::Object(object))),
        };
        resource.map_err(de::Error::custom)
    }
}

/// Deserializes a modelled resource once its discriminator is stripped
fn typed<T: DeserializeOwned>(
    mut object: Map<String, Value>,
    variant: fn(T) -> Resource,
) -> serde_json::Result<Resource> {
    object.shift_remove("resourceType");
    serde_json::from_value(Value::Object(object)).map(variant)
}

macro_rules! impl_from_resource {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Resource {
                fn from(resource: $ty) -> Self {
                    Resource::$variant(resource)
                }
            }
        )*
    };
}

impl_from_resource! {
    Binary => Binary,
    Bundle => Bundle,
    DocumentReference => DocumentReference,
    List => ListResource,
    MessageHeader => MessageHeader,
    OperationOutcome => OperationOutcome,
    Organization => Organization,
    Parameters => Parameters,
    Patient => Patient,
}

/// Patient.link.type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkType {
    ReplacedBy,
    Replaces,
    Refer,
    Seealso,
}

/// Link between two patient records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientLink {
    pub other: Reference,

    #[serde(rename = "type")]
    pub link_type: LinkType,
}

/// Patient resource
///
/// Members the client does not interpret are kept in `extra` so a caller's
/// record is forwarded to the gateway unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contained: Vec<Resource>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifier: Vec<Identifier>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub name: Vec<HumanName>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub telecom: Vec<ContactPoint>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub address: Vec<Address>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub managing_organization: Option<Reference>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub link: Vec<PatientLink>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Patient {
    /// First identifier carrying both system and value
    pub fn primary_identifier(&self) -> Option<(&str, &str)> {
        let first = self.identifier.first()?;
        Some((first.system.as_deref()?, first.value.as_deref()?))
    }

    /// The first contained resource, when it is an Organization
    pub fn contained_organization(&self) -> Option<&Organization> {
        match self.contained.first() {
            Some(Resource::Organization(org)) => Some(org),
            _ => None,
        }
    }

    /// Embeds `organization` as the first contained resource and points
    /// `managingOrganization` at it
    ///
    /// An organization without id gets a random one.
    pub fn with_managing_organization(mut self, mut organization: Organization) -> Self {
        let id = organization
            .id
            .get_or_insert_with(|| uuid::Uuid::new_v4().to_string())
            .clone();
        self.contained.insert(0, Resource::Organization(organization));
        self.managing_organization = Some(Reference::contained(&id));
        self
    }
}

/// Contact person of an organization
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrganizationContact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<HumanName>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub telecom: Vec<ContactPoint>,
}

/// Organization resource
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Organization {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifier: Vec<Identifier>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub telecom: Vec<ContactPoint>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub address: Vec<Address>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contact: Vec<OrganizationContact>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Raw document content
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Binary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub content_type: String,

    /// Base64 encoded content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

/// List.entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEntry {
    pub item: Reference,
}

/// List resource; a submission set in MHD
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifier: Vec<Identifier>,

    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub mode: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableConcept>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<Reference>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entry: Vec<ListEntry>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// DocumentReference.content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentReferenceContent {
    pub attachment: Attachment,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<Coding>,
}

/// DocumentReference.context
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentReferenceContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facility_type: Option<CodeableConcept>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub practice_setting: Option<CodeableConcept>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_patient_info: Option<Reference>,
}

/// Document metadata resource
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contained: Vec<Resource>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master_identifier: Option<Identifier>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifier: Vec<Identifier>,

    #[serde(default)]
    pub status: String,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub doc_type: Option<CodeableConcept>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub category: Vec<CodeableConcept>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<Reference>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security_label: Vec<CodeableConcept>,

    #[serde(default)]
    pub content: Vec<DocumentReferenceContent>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<DocumentReferenceContext>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DocumentReference {
    /// URL of the first content attachment that has one
    pub fn attachment_url(&self) -> Option<&str> {
        self.content
            .iter()
            .find_map(|c| c.attachment.url.as_deref())
    }
}

/// MessageHeader.source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageSource {
    pub endpoint: String,
}

/// MessageHeader.destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDestination {
    pub endpoint: String,
}

/// Header of a message bundle
///
/// The event is either `eventUri` or `eventCoding`. Members such as the
/// `response` of a reply header are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageHeader {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_uri: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_coding: Option<Coding>,

    pub source: MessageSource,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub focus: Vec<Reference>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub destination: Vec<MessageDestination>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Parameters.parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParametersParameter {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_identifier: Option<Identifier>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_reference: Option<Reference>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_string: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Operation input/output
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Parameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameter: Vec<ParametersParameter>,
}

impl Parameters {
    /// `valueIdentifier` of every `targetIdentifier` parameter
    pub fn target_identifiers(&self) -> Vec<&Identifier> {
        self.parameter
            .iter()
            .filter(|p| p.name == "targetIdentifier")
            .filter_map(|p| p.value_identifier.as_ref())
            .collect()
    }

    /// Identifier value assigned by `system`, if returned
    pub fn target_identifier_for(&self, system: &str) -> Option<&str> {
        self.target_identifiers()
            .into_iter()
            .find(|id| id.system.as_deref() == Some(system))
            .and_then(|id| id.value.as_deref())
    }
}

/// OperationOutcome.issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationOutcomeIssue {
    pub severity: String,

    pub code: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<String>,
}

/// Error or warning report from the server
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OperationOutcome {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default)]
    pub issue: Vec<OperationOutcomeIssue>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn organization(id: &str) -> Organization {
        Organization {
            id: Some(id.to_string()),
            name: Some("Spital".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_resource_type_tag_is_written() {
        let value = serde_json::to_value(Resource::from(organization("org-1"))).unwrap();
        assert_eq!(value["resourceType"], "Organization");
        assert_eq!(value["id"], "org-1");
    }

    #[test]
    fn test_patient_round_trip_keeps_unknown_members() {
        let input = json!({
            "resourceType": "Patient",
            "id": "p1",
            "identifier": [{"system": "urn:oid:1.2.3", "value": "42"}],
            "deceasedBoolean": false,
            "maritalStatus": {"text": "single"}
        });
        let resource: Resource = serde_json::from_value(input.clone()).unwrap();
        let Resource::Patient(patient) = &resource else {
            panic!("expected Patient");
        };
        assert_eq!(patient.extra["deceasedBoolean"], false);
        assert!(!patient.extra.contains_key("resourceType"));
        assert_eq!(serde_json::to_value(&resource).unwrap(), input);
    }

    #[test]
    fn test_unmodelled_resource_is_kept_opaque() {
        let input = json!({
            "resourceType": "DocumentReference",
            "status": "current",
            "contained": [
                {"resourceType": "Practitioner", "id": "author", "name": [{"family": "Muster"}]}
            ],
            "author": [{"reference": "#author"}],
            "content": [{"attachment": {"url": "http://host/Binary/1"}}]
        });
        let resource: Resource = serde_json::from_value(input.clone()).unwrap();
        let Resource::DocumentReference(doc) = &resource else {
            panic!("expected DocumentReference");
        };
        assert_eq!(doc.contained[0].resource_type(), "Practitioner");
        assert_eq!(doc.contained[0].id(), Some("author"));
        assert!(matches!(doc.contained[0], Resource::Other(_)));
        assert_eq!(serde_json::to_value(&resource).unwrap(), input);
    }

    #[test]
    fn test_malformed_known_resource_is_an_error() {
        let result = serde_json::from_value::<Resource>(json!({
            "resourceType": "Parameters",
            "parameter": "not-a-list"
        }));
        assert!(result.is_err());
        assert!(serde_json::from_value::<Resource>(json!({"id": "x"})).is_err());
        assert!(serde_json::from_value::<Resource>(json!(["Patient"])).is_err());
    }

    #[test]
    fn test_message_header_with_event_coding() {
        let resource: Resource = serde_json::from_value(json!({
            "resourceType": "MessageHeader",
            "eventCoding": {
                "system": "urn:ihe:iti:pmir:2019:patient-feed",
                "code": "patient-feed"
            },
            "source": {"endpoint": "http://mag.example.ch/source"},
            "response": {"identifier": "a1b2", "code": "ok"}
        }))
        .unwrap();
        let Resource::MessageHeader(header) = resource else {
            panic!("expected MessageHeader");
        };
        assert!(header.event_uri.is_none());
        assert_eq!(header.event_coding.unwrap().code.as_deref(), Some("patient-feed"));
        assert_eq!(header.extra["response"]["code"], "ok");
        assert!(!header.extra.contains_key("resourceType"));
    }

    #[test]
    fn test_contained_organization_is_tagged() {
        let patient = Patient::default().with_managing_organization(organization("org-1"));
        let value = serde_json::to_value(Resource::from(patient.clone())).unwrap();
        assert_eq!(value["contained"][0]["resourceType"], "Organization");
        assert_eq!(value["managingOrganization"]["reference"], "#org-1");
        assert_eq!(patient.contained_organization().unwrap().id.as_deref(), Some("org-1"));
    }

    #[test]
    fn test_with_managing_organization_assigns_missing_id() {
        let patient = Patient::default().with_managing_organization(Organization::default());
        let org_id = patient.contained_organization().unwrap().id.clone().unwrap();
        assert_eq!(
            patient.managing_organization.unwrap().reference.unwrap(),
            format!("#{org_id}")
        );
    }

    #[test]
    fn test_primary_identifier_requires_system_and_value() {
        let mut patient = Patient {
            identifier: vec![Identifier::value_only("42")],
            ..Default::default()
        };
        assert!(patient.primary_identifier().is_none());
        patient.identifier[0].system = Some("urn:oid:1.2".to_string());
        assert_eq!(patient.primary_identifier(), Some(("urn:oid:1.2", "42")));
    }

    #[test]
    fn test_link_type_wire_name() {
        let link = PatientLink {
            other: Reference::contained("p2"),
            link_type: LinkType::ReplacedBy,
        };
        assert_eq!(serde_json::to_value(&link).unwrap()["type"], "replaced-by");
    }

    #[test]
    fn test_attachment_url_skips_empty_content() {
        let doc: DocumentReference = serde_json::from_value(json!({
            "status": "current",
            "content": [
                {"attachment": {"contentType": "text/plain"}},
                {"attachment": {"url": "http://host/Binary/1"}}
            ]
        }))
        .unwrap();
        assert_eq!(doc.attachment_url(), Some("http://host/Binary/1"));
    }

    #[test]
    fn test_parameters_target_identifier_for() {
        let params: Parameters = serde_json::from_value(json!({
            "parameter": [
                {"name": "targetIdentifier", "valueIdentifier": {"system": "urn:oid:2.16.756.5.30.1.127.3.10.3", "value": "761337610411265304"}},
                {"name": "targetIdentifier", "valueIdentifier": {"system": "urn:oid:1.1.1.99.1", "value": "MPI-1"}},
                {"name": "targetId", "valueReference": {"reference": "Patient/1"}}
            ]
        }))
        .unwrap();
        assert_eq!(params.target_identifiers().len(), 2);
        assert_eq!(
            params.target_identifier_for("urn:oid:1.1.1.99.1"),
            Some("MPI-1")
        );
        assert_eq!(params.target_identifier_for("urn:oid:9"), None);
    }
}
