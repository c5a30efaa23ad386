//! ITI-93 Patient Identity Feed
//!
//! Wraps a patient record in a message bundle sent to the gateway's
//! `$process-message` endpoint. The shape depends on the action: add,
//! update and remove append the patient directly, merge nests the original
//! record in a history bundle.

use crate::domain::errors::{EpdError, InvalidArgument};
use crate::domain::result::Result;
use crate::fhir::bundle::{Bundle, BundleEntry, BundleRequest, BundleType, HttpVerb};
use crate::fhir::datatypes::Reference;
use crate::fhir::resources::{
    LinkType, MessageDestination, MessageHeader, MessageSource, Patient, PatientLink, Resource,
};
use std::fmt;

pub const PATIENT_FEED_EVENT: &str = "urn:ihe:iti:pmir:2019:patient-feed";
pub const TEMPORARY_PATIENT_ID: &str = "temporary-patient-id";
pub const TEMPORARY_MERGE_PATIENT_ID: &str = "temporary-mergePatient-id";
pub const TEMPORARY_BUNDLE_ID: &str = "temporary-bundle-id";
const MESSAGE_HEADER_ID: &str = "1";

/// Action of a patient identity feed
#[derive(Debug, Clone, PartialEq)]
pub enum PatientFeedAction {
    Add,
    Update,
    /// Merge into the surviving patient
    Merge(Box<Patient>),
    /// Not executed by the gateway although it answers with success
    Remove,
    /// Unknown action name, sent as a header-only message
    Unsupported(String),
}

impl PatientFeedAction {
    /// Maps the wire names `add`, `update`, `merge` and `remove`
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::MissingMergeCandidate`] for `merge` without
    /// a candidate.
    pub fn parse(name: &str, merge_candidate: Option<Patient>) -> Result<Self> {
        match name {
            "add" => Ok(Self::Add),
            "update" => Ok(Self::Update),
            "merge" => merge_candidate
                .map(|candidate| Self::Merge(Box::new(candidate)))
                .ok_or_else(|| InvalidArgument::MissingMergeCandidate.into()),
            "remove" => Ok(Self::Remove),
            other => Ok(Self::Unsupported(other.to_string())),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Add => "add",
            Self::Update => "update",
            Self::Merge(_) => "merge",
            Self::Remove => "remove",
            Self::Unsupported(name) => name,
        }
    }
}

impl fmt::Display for PatientFeedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// ITI-104 actions; the gateway only implements ITI-93
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FhirFeedAction {
    Add,
    Update,
    ResolveDuplicate,
    Remove,
}

/// The rejection returned for every ITI-104 request
pub fn iti104_unsupported(action: FhirFeedAction) -> EpdError {
    tracing::warn!(?action, "ITI-104 requested, not supported by the gateway");
    EpdError::Unsupported(
        "ITI-104 is currently not supported by Mobile Access Gateway. Use ITI-93 instead"
            .to_string(),
    )
}

/// Checks the managing organization invariant
///
/// The first contained resource is the managing organization and
/// `managingOrganization.reference` must be `#<its id>`.
pub fn check_managing_organization(patient: &Patient) -> std::result::Result<(), InvalidArgument> {
    let contained = patient
        .contained
        .first()
        .ok_or(InvalidArgument::MissingContainedOrganization)?;
    let reference = patient
        .managing_organization
        .as_ref()
        .and_then(|r| r.reference.as_deref());

    match (reference, contained.id()) {
        (Some(reference), Some(id)) if reference.strip_prefix('#') == Some(id) => Ok(()),
        _ => Err(InvalidArgument::UnreferencedOrganization),
    }
}

/// Builds ITI-93 message bundles
#[derive(Debug, Clone)]
pub struct IdentityFeedBuilder {
    base_url: String,
    source_endpoint: String,
    destination_endpoint: String,
}

impl IdentityFeedBuilder {
    pub fn new(
        base_url: impl Into<String>,
        source_endpoint: impl Into<String>,
        destination_endpoint: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            source_endpoint: source_endpoint.into(),
            destination_endpoint: destination_endpoint.into(),
        }
    }

    /// Builds the message bundle for `action`
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument::MissingContainedOrganization` or
    /// `InvalidArgument::UnreferencedOrganization` if the patient does not
    /// carry its managing organization.
    pub fn build(&self, mut patient: Patient, action: PatientFeedAction) -> Result<Bundle> {
        check_managing_organization(&patient)?;

        let patient_id = patient
            .id
            .get_or_insert_with(|| TEMPORARY_PATIENT_ID.to_string())
            .clone();

        let mut message = Bundle::new(BundleType::Message);
        message.entry.push(BundleEntry {
            full_url: Some(format!("{}MessageHeader/{}", self.base_url, MESSAGE_HEADER_ID)),
            resource: Some(Resource::MessageHeader(self.message_header(&patient_id))),
            ..Default::default()
        });

        let patient_url = format!("{}Patient", self.base_url);
        let action_name = action.name().to_string();

        match action {
            PatientFeedAction::Add => {
                message.entry.push(self.patient_entry(patient, HttpVerb::Post));
            }
            PatientFeedAction::Update => {
                message.entry.push(self.patient_entry(patient, HttpVerb::Put));
            }
            PatientFeedAction::Merge(candidate) => {
                let original = merge(patient, *candidate);
                let mut history = Bundle::new(BundleType::History);
                history.id = Some(TEMPORARY_BUNDLE_ID.to_string());
                history.entry.push(BundleEntry {
                    resource: Some(Resource::Patient(original)),
                    request: Some(BundleRequest::new(HttpVerb::Put, patient_url)),
                    ..Default::default()
                });
                message.entry.push(BundleEntry {
                    resource: Some(Resource::Bundle(history)),
                    ..Default::default()
                });
            }
            PatientFeedAction::Remove => {
                tracing::warn!(
                    patient_id = %patient_id,
                    "REMOVE is not supported by the Mobile Access Gateway, the patient is not deleted although the server responds with ok"
                );
                message.entry.push(self.patient_entry(patient, HttpVerb::Delete));
            }
            PatientFeedAction::Unsupported(name) => {
                tracing::warn!(action = %name, "ITI-93 action is not implemented");
            }
        }

        tracing::debug!(
            action = %action_name,
            patient_id = %patient_id,
            entries = message.entry.len(),
            "Built ITI-93 message bundle"
        );
        Ok(message)
    }

    fn message_header(&self, patient_id: &str) -> MessageHeader {
        MessageHeader {
            id: Some(MESSAGE_HEADER_ID.to_string()),
            event_uri: Some(PATIENT_FEED_EVENT.to_string()),
            event_coding: None,
            source: MessageSource {
                endpoint: self.source_endpoint.clone(),
            },
            focus: vec![Reference::to(format!("Patient/{patient_id}"))],
            destination: vec![MessageDestination {
                endpoint: self.destination_endpoint.clone(),
            }],
            extra: Default::default(),
        }
    }

    fn patient_entry(&self, patient: Patient, method: HttpVerb) -> BundleEntry {
        let full_url = format!(
            "{}Patient/{}",
            self.base_url,
            patient.id.as_deref().unwrap_or(TEMPORARY_PATIENT_ID)
        );
        BundleEntry::new(
            full_url,
            Resource::Patient(patient),
            BundleRequest::new(method, format!("{}Patient", self.base_url)),
        )
    }
}

/// Deactivates `original`, links it to the activated `candidate` and embeds
/// the candidate as a contained resource
fn merge(mut original: Patient, mut candidate: Patient) -> Patient {
    if candidate.id.is_none() || candidate.id == original.id {
        candidate.id = Some(TEMPORARY_MERGE_PATIENT_ID.to_string());
    }
    let candidate_id = candidate.id.clone().unwrap_or_default();

    candidate.active = Some(true);
    if candidate.managing_organization.is_none() {
        candidate.managing_organization = original.managing_organization.clone();
    }

    original.active = Some(false);
    original.link = vec![PatientLink {
        other: Reference::contained(&candidate_id),
        link_type: LinkType::ReplacedBy,
    }];
    original.contained.push(Resource::Patient(candidate));
    original
}
