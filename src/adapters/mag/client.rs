//! Mobile Access Gateway client
//!
//! One method per IHE transaction. Each call builds its request with the
//! pure builders in [`crate::core`], runs a single exchange through the
//! [`HttpTransport`] and unwraps the answer into typed resources.

use super::transport::{build_url, HttpTransport, ReqwestTransport, TransportRequest};
use crate::config::MagConfig;
use crate::core::document_bundle::DocumentBundleBuilder;
use crate::core::identity_feed::{
    iti104_unsupported, FhirFeedAction, IdentityFeedBuilder, PatientFeedAction,
};
use crate::core::queries::{
    expect_resource, pix_query_pairs, unexpected, unwrap_document_references, unwrap_parameters,
    unwrap_patients, unwrap_submission_sets, DocumentReferenceQuery, PatientQuery,
    SearchQuery, SubmissionSetQuery,
};
use crate::domain::errors::{EpdError, InvalidArgument};
use crate::domain::file::DocumentFile;
use crate::domain::ids::SourceIdentifier;
use crate::domain::metadata::DocumentMetadata;
use crate::domain::result::Result;
use crate::fhir::bundle::{Bundle, HttpVerb};
use crate::fhir::resources::{DocumentReference, ListResource, Parameters, Patient, Resource};
use crate::{log_transaction_complete, log_transaction_start};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, Instant};
use url::Url;

const CONTENT_TYPE: &str = "Content-Type";

/// Target of an ITI-68 retrieval
#[derive(Debug, Clone, Copy)]
pub enum DocumentLocation<'a> {
    /// Attachment URL taken as is
    Url(&'a str),
    /// First content attachment carrying a URL
    Reference(&'a DocumentReference),
}

impl<'a> From<&'a str> for DocumentLocation<'a> {
    fn from(url: &'a str) -> Self {
        Self::Url(url)
    }
}

impl<'a> From<&'a DocumentReference> for DocumentLocation<'a> {
    fn from(reference: &'a DocumentReference) -> Self {
        Self::Reference(reference)
    }
}

/// Client executing transactions against one gateway
///
/// Calls are independent: the client holds no per-request state and can be
/// shared between tasks.
///
/// # Example
///
/// ```no_run
/// use epd_gateway::adapters::mag::MagClient;
/// use epd_gateway::config::MagConfig;
/// use epd_gateway::core::queries::PatientQuery;
///
/// # async fn example() -> epd_gateway::domain::Result<()> {
/// let client = MagClient::new(MagConfig::new("https://test.ahdis.ch/mag-pmp/fhir/"))?;
/// let patients = client
///     .search_patients(&PatientQuery {
///         family: Some("Muster".to_string()),
///         ..Default::default()
///     })
///     .await?;
/// println!("{} patients", patients.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct MagClient {
    transport: Arc<dyn HttpTransport>,
    config: MagConfig,
    base_url: Url,
}

impl MagClient {
    /// Creates a client with a reqwest transport bounded by
    /// `config.timeout_seconds`
    ///
    /// # Errors
    ///
    /// Returns `EpdError::Configuration` if the base URL is invalid or the
    /// HTTP client cannot be built.
    pub fn new(config: MagConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(Duration::from_secs(config.timeout_seconds))?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Creates a client on top of a caller-supplied transport
    ///
    /// # Errors
    ///
    /// Returns `EpdError::Configuration` if the base URL is invalid.
    pub fn with_transport(config: MagConfig, transport: Arc<dyn HttpTransport>) -> Result<Self> {
        let base_url = config.base().map_err(EpdError::Configuration)?;
        tracing::debug!(base_url = %base_url, "Gateway client created");
        Ok(Self {
            transport,
            config,
            base_url,
        })
    }

    pub fn config(&self) -> &MagConfig {
        &self.config
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Runs one exchange and parses the JSON answer
    ///
    /// `endpoint` is resolved against the base URL. The configured content
    /// type is sent first, then the configured static headers, then
    /// `headers`; a later header replaces an earlier one of the same name.
    ///
    /// # Errors
    ///
    /// Any [`TransportError`](crate::domain::TransportError) of the exchange,
    /// or `EpdError::Serialization` if the answer is not JSON.
    pub async fn send<T>(
        &self,
        endpoint: &str,
        method: HttpVerb,
        query: &[(String, String)],
        payload: Option<&T>,
        headers: &[(String, String)],
    ) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let url = build_url(&self.base_url, endpoint, query)?;
        let mut request = TransportRequest::new(method, url);
        request.headers = self.merged_headers(headers);
        if let Some(payload) = payload {
            request = request.body(serde_json::to_string(payload)?);
        }

        let body = self.transport.execute(request).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn get(&self, endpoint: &str, query: &[(String, String)]) -> Result<Value> {
        self.send::<Value>(endpoint, HttpVerb::Get, query, None, &[])
            .await
    }

    fn merged_headers(&self, extra: &[(String, String)]) -> Vec<(String, String)> {
        let mut merged: Vec<(String, String)> =
            vec![(CONTENT_TYPE.to_string(), self.config.content_type.clone())];
        let mut configured: Vec<_> = self.config.headers.iter().collect();
        configured.sort();

        let candidates = configured
            .into_iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .chain(extra.iter().cloned());
        for (name, value) in candidates {
            match merged.iter_mut().find(|(n, _)| n.eq_ignore_ascii_case(&name)) {
                Some(existing) => existing.1 = value,
                None => merged.push((name, value)),
            }
        }
        merged
    }

    /// ITI-65 Provide Document Bundle
    ///
    /// POSTs a prepared transaction bundle to the base URL and returns the
    /// transaction-response bundle.
    pub async fn provide_document(&self, bundle: &Bundle) -> Result<Bundle> {
        log_transaction_start!("ITI-65", self.base_url);
        let started = Instant::now();

        let response = self
            .send("", HttpVerb::Post, &[], Some(bundle), &[])
            .await?;
        let response = match expect_resource(response, "Bundle")? {
            Resource::Bundle(bundle) => bundle,
            other => return Err(unexpected("Bundle", &other)),
        };

        log_transaction_complete!("ITI-65", response.entry.len(), started.elapsed());
        Ok(response)
    }

    /// Builds the ITI-65 bundle for one document and uploads it
    ///
    /// Validation and encoding happen before any network call; a failure
    /// there leaves the gateway untouched.
    pub async fn upload_document(
        &self,
        patient: Patient,
        file: DocumentFile,
        metadata: DocumentMetadata,
    ) -> Result<Bundle> {
        let bundle = DocumentBundleBuilder::new(self.base_url.as_str())
            .patient(patient)
            .file(file)
            .metadata(metadata)
            .build()
            .await?;
        self.provide_document(&bundle).await
    }

    /// ITI-66 Find Document Lists
    pub async fn find_submission_sets(
        &self,
        query: &SubmissionSetQuery,
    ) -> Result<Vec<ListResource>> {
        log_transaction_start!("ITI-66", "List");
        let started = Instant::now();

        let response = self.get("List", &query.to_pairs()?).await?;
        let lists = unwrap_submission_sets(response)?;

        log_transaction_complete!("ITI-66", lists.len(), started.elapsed());
        Ok(lists)
    }

    /// ITI-67 Find Document References
    pub async fn find_document_references(
        &self,
        query: &DocumentReferenceQuery,
    ) -> Result<Vec<DocumentReference>> {
        log_transaction_start!("ITI-67", "DocumentReference");
        let started = Instant::now();

        let response = self.get("DocumentReference", &query.to_pairs()?).await?;
        let references = unwrap_document_references(response)?;

        log_transaction_complete!("ITI-67", references.len(), started.elapsed());
        Ok(references)
    }

    /// Reads a single DocumentReference by id
    ///
    /// # Errors
    ///
    /// `EpdError::UnexpectedResource` if the answer is not a
    /// DocumentReference (an OperationOutcome, for instance).
    pub async fn fetch_document_reference(&self, id: &str) -> Result<DocumentReference> {
        let endpoint = format!("DocumentReference/{id}");
        log_transaction_start!("ITI-67", endpoint);

        match expect_resource(self.get(&endpoint, &[]).await?, "DocumentReference")? {
            Resource::DocumentReference(reference) => Ok(reference),
            other => Err(unexpected("DocumentReference", &other)),
        }
    }

    /// ITI-68 Retrieve Document
    ///
    /// Returns the document body as text. With
    /// `upgrade_insecure_links` set, an `http:` link is fetched over
    /// `https:` on the same host.
    ///
    /// # Errors
    ///
    /// `InvalidArgument::NoDocumentUrl` if no usable link is found, otherwise
    /// the transport classification of the exchange.
    pub async fn retrieve_document<'a>(
        &self,
        location: impl Into<DocumentLocation<'a>>,
    ) -> Result<String> {
        let link = match location.into() {
            DocumentLocation::Url(url) => url,
            DocumentLocation::Reference(reference) => reference
                .attachment_url()
                .ok_or(InvalidArgument::NoDocumentUrl)?,
        };
        let link = resolve_document_link(link, self.config.upgrade_insecure_links)?;
        log_transaction_start!("ITI-68", link);
        let started = Instant::now();

        let url = Url::parse(&link).map_err(|_| InvalidArgument::NoDocumentUrl)?;
        let mut request = TransportRequest::new(HttpVerb::Get, url);
        let mut configured: Vec<_> = self.config.headers.iter().collect();
        configured.sort();
        for (name, value) in configured {
            request = request.header(name.clone(), value.clone());
        }

        let document = self.transport.execute(request).await?;
        log_transaction_complete!("ITI-68", document.len(), started.elapsed());
        Ok(document)
    }

    /// ITI-78 Mobile Patient Demographics Query
    pub async fn search_patients(&self, query: &PatientQuery) -> Result<Vec<Patient>> {
        log_transaction_start!("ITI-78", "Patient");
        let started = Instant::now();

        let response = self.get("Patient", &query.to_pairs()?).await?;
        let patients = unwrap_patients(response)?;

        log_transaction_complete!("ITI-78", patients.len(), started.elapsed());
        Ok(patients)
    }

    /// ITI-83 Mobile Patient Identifier Cross-reference Query
    ///
    /// An empty `target_systems` asks for every known identifier.
    ///
    /// # Errors
    ///
    /// `EpdError::UnexpectedResource` if the answer is not a Parameters
    /// resource.
    pub async fn lookup_identifiers(
        &self,
        source: &SourceIdentifier,
        target_systems: &[String],
    ) -> Result<Parameters> {
        log_transaction_start!("ITI-83", "Patient/$ihe-pix");
        let started = Instant::now();

        let response = self
            .get("Patient/$ihe-pix", &pix_query_pairs(source, target_systems))
            .await?;
        let parameters = unwrap_parameters(response)?;

        log_transaction_complete!(
            "ITI-83",
            parameters.target_identifiers().len(),
            started.elapsed()
        );
        Ok(parameters)
    }

    /// ITI-93 Mobile Patient Identity Feed
    ///
    /// POSTs the message bundle for `action` to the message endpoint and
    /// returns the response message.
    ///
    /// # Errors
    ///
    /// - `EpdError::Configuration` if the source or destination endpoint is
    ///   not configured
    /// - the precondition failures of [`IdentityFeedBuilder::build`]
    pub async fn patient_feed(&self, patient: Patient, action: PatientFeedAction) -> Result<Bundle> {
        if self.config.source_endpoint.is_empty() || self.config.destination_endpoint.is_empty() {
            return Err(EpdError::Configuration(
                "mag.source_endpoint and mag.destination_endpoint are required for the patient feed"
                    .to_string(),
            ));
        }

        let action_name = action.name().to_string();
        let message = IdentityFeedBuilder::new(
            self.base_url.as_str(),
            self.config.source_endpoint.as_str(),
            self.config.destination_endpoint.as_str(),
        )
        .build(patient, action)?;

        log_transaction_start!("ITI-93", self.config.message_endpoint);
        tracing::info!(action = %action_name, "Sending patient identity feed");
        let started = Instant::now();

        let response = self
            .send(
                &self.config.message_endpoint,
                HttpVerb::Post,
                &[],
                Some(&message),
                &[],
            )
            .await?;
        let response = match expect_resource(response, "Bundle")? {
            Resource::Bundle(bundle) => bundle,
            other => return Err(unexpected("Bundle", &other)),
        };

        log_transaction_complete!("ITI-93", response.entry.len(), started.elapsed());
        Ok(response)
    }

    /// ITI-104 Patient Identity Feed FHIR
    ///
    /// Always rejected without a network call; use [`Self::patient_feed`].
    pub async fn patient_feed_fhir(
        &self,
        _patient: &Patient,
        action: FhirFeedAction,
    ) -> Result<Bundle> {
        Err(iti104_unsupported(action))
    }
}

/// Applies the link policy of ITI-68 retrieval
///
/// Links must start with `http`, in any letter case. With `upgrade` set, any
/// link not already starting with `https` keeps its host and path but
/// switches to `https`.
fn resolve_document_link(link: &str, upgrade: bool) -> Result<String> {
    if !starts_with_ignore_case(link, "http") {
        return Err(InvalidArgument::NoDocumentUrl.into());
    }
    if upgrade && !starts_with_ignore_case(link, "https") {
        return Ok(format!("https{}", &link[4..]));
    }
    Ok(link.to_string())
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .map_or(false, |head| head.eq_ignore_ascii_case(prefix))
}
