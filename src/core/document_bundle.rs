//! ITI-65 Provide Document Bundle
//!
//! Builds the transaction bundle that uploads one document: a Binary with
//! the content, a submission set List and the DocumentReference describing
//! it. The three entries are cross-linked through fresh `urn:uuid:`
//! references, so the bundle is self-consistent before any network call.

use super::encoding::encode_file;
use crate::domain::errors::InvalidArgument;
use crate::domain::file::DocumentFile;
use crate::domain::ids::{TempUrn, UuidOid};
use crate::domain::metadata::DocumentMetadata;
use crate::domain::result::Result;
use crate::fhir::bundle::{Bundle, BundleEntry, BundleRequest, BundleType, HttpVerb};
use crate::fhir::datatypes::{
    Attachment, CodeableConcept, Coding, Extension, Identifier, Meta, Reference,
};
use crate::fhir::resources::{
    Binary, DocumentReference, DocumentReferenceContent, DocumentReferenceContext, ListEntry,
    ListResource, Patient, Resource,
};
use chrono::Utc;
use uuid::Uuid;

pub const PROVIDE_BUNDLE_PROFILE: &str =
    "http://profiles.ihe.net/ITI/MHD/StructureDefinition/IHE.MHD.Comprehensive.ProvideBundle";
pub const SUBMISSION_SET_PROFILE: &str =
    "http://profiles.ihe.net/ITI/MHD/StructureDefinition/IHE.MHD.Comprehensive.SubmissionSet";
const DESIGNATION_TYPE_URL: &str =
    "http://profiles.ihe.net/ITI/MHD/StructureDefinition/ihe-designationType";
const SOURCE_ID_URL: &str = "http://profiles.ihe.net/ITI/MHD/StructureDefinition/ihe-sourceId";
const LIST_TYPES_SYSTEM: &str = "http://profiles.ihe.net/ITI/MHD/CodeSystem/MHDlistTypes";
const FORMAT_CODE_SYSTEM: &str = "urn:oid:1.3.6.1.4.1.19376.1.2.3";
const SNOMED_CT: &str = crate::catalog::SNOMED_CT;

/// Id given to the contained patient copy when the caller's record has none
pub const TEMPORARY_PATIENT_ID: &str = "temporary-patient-id";

const JSON: &str = "application/json";
const FHIR_JSON: &str = "application/fhir+json";

/// Assembles an ITI-65 transaction bundle
///
/// # Examples
///
/// ```no_run
/// use epd_gateway::core::document_bundle::DocumentBundleBuilder;
/// # use epd_gateway::domain::{DocumentFile, DocumentMetadata};
/// # use epd_gateway::fhir::Patient;
///
/// # async fn example(patient: Patient, metadata: DocumentMetadata) -> epd_gateway::domain::Result<()> {
/// let file = DocumentFile::from_path("report.pdf", None).await?;
/// let bundle = DocumentBundleBuilder::new("https://mag.example.ch/fhir/")
///     .patient(patient)
///     .file(file)
///     .metadata(metadata)
///     .build()
///     .await?;
/// assert_eq!(bundle.entry.len(), 3);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct DocumentBundleBuilder {
    base_url: String,
    patient: Option<Patient>,
    file: Option<DocumentFile>,
    metadata: Option<DocumentMetadata>,
}

impl DocumentBundleBuilder {
    /// `base_url` is the FHIR base of the gateway, used for patient subject
    /// references
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            patient: None,
            file: None,
            metadata: None,
        }
    }

    pub fn patient(mut self, patient: Patient) -> Self {
        self.patient = Some(patient);
        self
    }

    pub fn file(mut self, file: DocumentFile) -> Self {
        self.file = Some(file);
        self
    }

    pub fn metadata(mut self, metadata: DocumentMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Validates the inputs, encodes the file and returns the bundle
    ///
    /// Checks run in order: patient, file, metadata. The first failure is
    /// returned and nothing is encoded.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument::InvalidPatient` if the patient is missing or its
    ///   first identifier lacks a system or value
    /// - `InvalidArgument::MissingFile` / `MissingMetadata`
    /// - `InvalidArgument::IncompatibleTypeCode` for a type code the
    ///   category does not allow
    /// - `EpdError::Encoding` if the file is empty
    pub async fn build(self) -> Result<Bundle> {
        let mut patient = self.patient.ok_or(InvalidArgument::InvalidPatient)?;
        let (system, value) = patient
            .primary_identifier()
            .ok_or(InvalidArgument::InvalidPatient)?;
        let subject = Reference::to(format!("{}Patient/{}-{}", self.base_url, system, value));

        let file = self.file.ok_or(InvalidArgument::MissingFile)?;
        let metadata = self.metadata.ok_or(InvalidArgument::MissingMetadata)?;
        metadata.validate()?;

        let bundle_id = format!("bundle-id-{}", Uuid::new_v4());
        let binary_urn = TempUrn::generate();
        let document_urn = TempUrn::generate();
        let submission_set_urn = TempUrn::generate();
        let master_identifier = UuidOid::generate();
        let today = Utc::now().format("%Y-%m-%d").to_string();
        let content_type = effective_content_type(file.content_type(), metadata.is_fhir);

        let patient_id = patient
            .id
            .get_or_insert_with(|| TEMPORARY_PATIENT_ID.to_string())
            .clone();

        let mut binary = Binary {
            id: None,
            content_type: content_type.clone(),
            data: None,
        };

        let submission_set = ListResource {
            id: Some(submission_set_urn.to_string()),
            meta: Some(Meta::profile(SUBMISSION_SET_PROFILE)),
            extension: vec![
                Extension {
                    url: DESIGNATION_TYPE_URL.to_string(),
                    value_codeable_concept: Some(
                        Coding::new(SNOMED_CT, "71388002", "Procedure (procedure)").into(),
                    ),
                    value_identifier: None,
                    value_string: None,
                },
                Extension {
                    url: SOURCE_ID_URL.to_string(),
                    value_codeable_concept: None,
                    value_identifier: Some(Identifier::value_only(&metadata.source_identifier)),
                    value_string: None,
                },
            ],
            identifier: vec![Identifier::official_uri(submission_set_urn.as_str())],
            status: "current".to_string(),
            mode: "working".to_string(),
            title: Some(metadata.title.clone()),
            code: Some(Coding::new(LIST_TYPES_SYSTEM, "submissionset", "Submission Set").into()),
            subject: Some(subject.clone()),
            date: Some(today.clone()),
            entry: vec![ListEntry {
                item: Reference::to(document_urn.as_str()),
            }],
            ..Default::default()
        };

        let document_reference = DocumentReference {
            contained: vec![Resource::Patient(patient)],
            master_identifier: Some(Identifier::value_only(master_identifier.as_str())),
            identifier: vec![Identifier::official_uri(document_urn.as_str())],
            status: "current".to_string(),
            doc_type: Some(metadata.type_coding.clone().into()),
            category: vec![metadata.category.clone().into()],
            subject: Some(subject),
            date: Some(today),
            description: Some(metadata.description.clone()),
            security_label: vec![
                Coding::new(SNOMED_CT, "17621005", "Normal (qualifier value)").into(),
            ],
            content: vec![DocumentReferenceContent {
                attachment: Attachment {
                    content_type: Some(content_type),
                    language: Some(metadata.content_language.clone()),
                    url: Some(binary_urn.to_string()),
                    title: None,
                },
                format: Some(mime_type_sufficient()),
            }],
            context: Some(DocumentReferenceContext {
                facility_type: Some(CodeableConcept::from(metadata.facility.clone())),
                practice_setting: Some(CodeableConcept::from(metadata.practice_setting.clone())),
                source_patient_info: Some(Reference::contained(&patient_id)),
            }),
            ..Default::default()
        };

        binary.data = Some(encode_file(&file).await?);

        let mut bundle = Bundle::new(BundleType::Transaction);
        bundle.id = Some(bundle_id);
        bundle.meta = Some(Meta::profile(PROVIDE_BUNDLE_PROFILE));
        bundle.entry = vec![
            post_entry(binary_urn, Resource::Binary(binary)),
            post_entry(submission_set_urn, Resource::List(submission_set)),
            post_entry(document_urn, Resource::DocumentReference(document_reference)),
        ];

        tracing::debug!(
            bundle_id = bundle.id.as_deref().unwrap_or_default(),
            file = file.name(),
            "Built ITI-65 document bundle"
        );
        Ok(bundle)
    }
}

/// `application/json` declared as FHIR becomes `application/fhir+json`
pub fn effective_content_type(declared: &str, is_fhir: bool) -> String {
    if declared == JSON && is_fhir {
        FHIR_JSON.to_string()
    } else {
        declared.to_string()
    }
}

fn mime_type_sufficient() -> Coding {
    Coding::new(
        FORMAT_CODE_SYSTEM,
        "urn:ihe:iti:xds:2017:mimeTypeSufficient",
        "MimeType sufficient",
    )
}

fn post_entry(full_url: TempUrn, resource: Resource) -> BundleEntry {
    let full_url = full_url.into_inner();
    let request = BundleRequest::new(HttpVerb::Post, full_url.clone());
    BundleEntry::new(full_url, resource, request)
}
