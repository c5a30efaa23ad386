//! Search parameter mapping and response unwrapping
//!
//! Query structs serialize to ordered `(name, value)` pairs, absent fields
//! omitted. Unwrappers turn the server's JSON answer into typed resources:
//! a searchset without `entry` (or `{}`) is an empty result, entries of an
//! unexpected type are skipped.

use crate::domain::errors::{EpdError, InvalidArgument};
use crate::domain::ids::SourceIdentifier;
use crate::domain::result::Result;
use crate::fhir::resources::{DocumentReference, ListResource, Parameters, Patient, Resource};
use serde::Serialize;
use serde_json::Value;

/// Typed search parameters of a FHIR search interaction
pub trait SearchQuery: Serialize {
    /// Query pairs in declaration order
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument::InvalidQuery` if a parameter is not a
    /// scalar.
    fn to_pairs(&self) -> Result<Vec<(String, String)>> {
        let value = serde_json::to_value(self)?;
        let Value::Object(map) = value else {
            return Err(InvalidArgument::InvalidQuery(
                "Search parameters must serialize to an object".to_string(),
            )
            .into());
        };

        let mut pairs = Vec::with_capacity(map.len());
        for (name, value) in map {
            let value = match value {
                Value::Null => continue,
                Value::String(s) => s,
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.to_string(),
                other => {
                    return Err(InvalidArgument::InvalidQuery(format!(
                        "Parameter '{name}' is not a scalar: {other}"
                    ))
                    .into())
                }
            };
            pairs.push((name, value));
        }
        Ok(pairs)
    }
}

/// ITI-66 Find Document Lists parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubmissionSetQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(rename = "designationType", skip_serializing_if = "Option::is_none")]
    pub designation_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient: Option<String>,
    #[serde(rename = "sourceId", skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "patient.identifier", skip_serializing_if = "Option::is_none")]
    pub patient_identifier: Option<String>,
    #[serde(rename = "source.given", skip_serializing_if = "Option::is_none")]
    pub source_given: Option<String>,
    #[serde(rename = "source.family", skip_serializing_if = "Option::is_none")]
    pub source_family: Option<String>,
}

impl SearchQuery for SubmissionSetQuery {}

/// ITI-67 Find Document References parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentReferenceQuery {
    #[serde(rename = "author.given", skip_serializing_if = "Option::is_none")]
    pub author_given: Option<String>,
    #[serde(rename = "author.family", skip_serializing_if = "Option::is_none")]
    pub author_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facility: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient: Option<String>,
    #[serde(rename = "patient.identifier", skip_serializing_if = "Option::is_none")]
    pub patient_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related: Option<String>,
    #[serde(rename = "security-label", skip_serializing_if = "Option::is_none")]
    pub security_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setting: Option<String>,
    #[serde(rename = "sourceId", skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub doc_type: Option<String>,
}

impl SearchQuery for DocumentReferenceQuery {}

/// ITI-78 Mobile Patient Demographics Query parameters
///
/// The gateway may ignore `_id`, `active`, `identifier`, `telecom`,
/// `birthdate`, `address` and `mothersMaidenName`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PatientQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given: Option<String>,
    #[serde(rename = "address-city", skip_serializing_if = "Option::is_none")]
    pub address_city: Option<String>,
    #[serde(rename = "address-country", skip_serializing_if = "Option::is_none")]
    pub address_country: Option<String>,
    #[serde(rename = "address-postalcode", skip_serializing_if = "Option::is_none")]
    pub address_postalcode: Option<String>,
    #[serde(rename = "address-state", skip_serializing_if = "Option::is_none")]
    pub address_state: Option<String>,
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telecom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "mothersMaidenName", skip_serializing_if = "Option::is_none")]
    pub mothers_maiden_name: Option<String>,
}

impl SearchQuery for PatientQuery {}

/// ITI-83 query: `sourceIdentifier` followed by one `targetSystem` per
/// requested system
pub fn pix_query_pairs(
    source: &SourceIdentifier,
    target_systems: &[String],
) -> Vec<(String, String)> {
    std::iter::once(("sourceIdentifier".to_string(), source.to_string()))
        .chain(
            target_systems
                .iter()
                .map(|system| ("targetSystem".to_string(), system.clone())),
        )
        .collect()
}

fn resource_type_of(value: &Value) -> &str {
    value
        .get("resourceType")
        .and_then(Value::as_str)
        .unwrap_or("<none>")
}

/// Parses `value` as a resource of type `expected`
///
/// # Errors
///
/// `EpdError::UnexpectedResource` for any other `resourceType`,
/// `EpdError::Serialization` if the resource is malformed.
pub fn expect_resource(value: Value, expected: &str) -> Result<Resource> {
    let found = resource_type_of(&value);
    if found != expected {
        return Err(EpdError::UnexpectedResource {
            expected: expected.to_string(),
            found: found.to_string(),
        });
    }
    Ok(serde_json::from_value(value)?)
}

/// Resources of type `expected` from a searchset's entries
fn entries_of_type(response: Value, expected: &str) -> Result<Vec<Resource>> {
    let Value::Object(mut envelope) = response else {
        return Ok(Vec::new());
    };
    let Some(Value::Array(entries)) = envelope.remove("entry") else {
        return Ok(Vec::new());
    };

    let mut resources = Vec::with_capacity(entries.len());
    for mut entry in entries {
        let Some(resource) = entry.get_mut("resource").map(Value::take) else {
            continue;
        };
        let found = resource_type_of(&resource);
        if found != expected {
            tracing::debug!(expected, found, "Skipping search entry of unexpected type");
            continue;
        }
        resources.push(serde_json::from_value(resource)?);
    }
    Ok(resources)
}

/// ITI-66 response to submission sets
pub fn unwrap_submission_sets(response: Value) -> Result<Vec<ListResource>> {
    Ok(entries_of_type(response, "List")?
        .into_iter()
        .filter_map(|r| match r {
            Resource::List(list) => Some(list),
            _ => None,
        })
        .collect())
}

/// ITI-67 response to document references
pub fn unwrap_document_references(response: Value) -> Result<Vec<DocumentReference>> {
    Ok(entries_of_type(response, "DocumentReference")?
        .into_iter()
        .filter_map(|r| match r {
            Resource::DocumentReference(doc) => Some(doc),
            _ => None,
        })
        .collect())
}

/// ITI-78 response to patients
///
/// A single Patient yields a one-element list, a Bundle its patient entries.
///
/// # Errors
///
/// `EpdError::UnexpectedResource` for any other answer.
pub fn unwrap_patients(response: Value) -> Result<Vec<Patient>> {
    let found = resource_type_of(&response).to_string();
    match found.as_str() {
        "Patient" => match expect_resource(response, "Patient")? {
            Resource::Patient(patient) => Ok(vec![patient]),
            other => Err(unexpected("Patient", &other)),
        },
        "Bundle" => Ok(entries_of_type(response, "Patient")?
            .into_iter()
            .filter_map(|r| match r {
                Resource::Patient(patient) => Some(patient),
                _ => None,
            })
            .collect()),
        _ => Err(EpdError::UnexpectedResource {
            expected: "Patient or Bundle".to_string(),
            found,
        }),
    }
}

/// ITI-83 response to the cross-reference Parameters
///
/// # Errors
///
/// `EpdError::UnexpectedResource` if the answer is not a Parameters
/// resource.
pub fn unwrap_parameters(response: Value) -> Result<Parameters> {
    match expect_resource(response, "Parameters")? {
        Resource::Parameters(parameters) => Ok(parameters),
        other => Err(unexpected("Parameters", &other)),
    }
}

pub(crate) fn unexpected(expected: &str, found: &Resource) -> EpdError {
    EpdError::UnexpectedResource {
        expected: expected.to_string(),
        found: found.resource_type().to_string(),
    }
}
