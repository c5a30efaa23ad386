//! Bundle resource and its entries
//!
//! Transaction bundles carry one entry per resource with a `fullUrl` and a
//! `request` telling the server how to process it. Message bundles start
//! with a MessageHeader entry.

use super::datatypes::Meta;
use super::resources::Resource;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Bundle.type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BundleType {
    Document,
    Message,
    Transaction,
    TransactionResponse,
    Batch,
    BatchResponse,
    History,
    Searchset,
    Collection,
}

/// HTTP verb of a bundle entry request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpVerb {
    Get,
    Head,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpVerb {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpVerb::Get => "GET",
            HttpVerb::Head => "HEAD",
            HttpVerb::Post => "POST",
            HttpVerb::Put => "PUT",
            HttpVerb::Delete => "DELETE",
            HttpVerb::Patch => "PATCH",
        }
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the server should process an entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleRequest {
    pub method: HttpVerb,
    pub url: String,
}

impl BundleRequest {
    pub fn new(method: HttpVerb, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
        }
    }
}

/// Outcome of processing an entry, present in `*-response` bundles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleResponse {
    pub status: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
}

/// One entry of a bundle
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<Resource>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<BundleRequest>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<BundleResponse>,

    /// Members not modelled here (search, link, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BundleEntry {
    /// Entry addressed by `full_url` with a request
    pub fn new(full_url: impl Into<String>, resource: Resource, request: BundleRequest) -> Self {
        Self {
            full_url: Some(full_url.into()),
            resource: Some(resource),
            request: Some(request),
            ..Default::default()
        }
    }
}

/// Bundle resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,

    #[serde(rename = "type")]
    pub bundle_type: BundleType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u32>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entry: Vec<BundleEntry>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Bundle {
    /// Empty bundle of the given type
    pub fn new(bundle_type: BundleType) -> Self {
        Self {
            id: None,
            meta: None,
            bundle_type,
            total: None,
            entry: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Finds the entry whose `fullUrl` equals `full_url`
    pub fn entry_by_full_url(&self, full_url: &str) -> Option<&BundleEntry> {
        self.entry
            .iter()
            .find(|e| e.full_url.as_deref() == Some(full_url))
    }

    /// Iterates over the resources carried by the entries
    pub fn resources(&self) -> impl Iterator<Item = &Resource> {
        self.entry.iter().filter_map(|e| e.resource.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bundle_type_wire_names() {
        assert_eq!(
            serde_json::to_value(BundleType::TransactionResponse).unwrap(),
            "transaction-response"
        );
        assert_eq!(serde_json::to_value(BundleType::Searchset).unwrap(), "searchset");
    }

    #[test]
    fn test_http_verb_wire_names() {
        assert_eq!(serde_json::to_value(HttpVerb::Delete).unwrap(), "DELETE");
        assert_eq!(HttpVerb::Put.to_string(), "PUT");
    }

    #[test]
    fn test_entry_keeps_unknown_members() {
        let entry: BundleEntry = serde_json::from_value(json!({
            "fullUrl": "http://x/Patient/1",
            "search": {"mode": "match"}
        }))
        .unwrap();
        assert_eq!(entry.extra["search"]["mode"], "match");
        assert!(entry.resource.is_none());
    }

    #[test]
    fn test_entry_by_full_url() {
        let mut bundle = Bundle::new(BundleType::Collection);
        bundle.entry.push(BundleEntry {
            full_url: Some("urn:uuid:a".to_string()),
            ..Default::default()
        });
        assert!(bundle.entry_by_full_url("urn:uuid:a").is_some());
        assert!(bundle.entry_by_full_url("urn:uuid:b").is_none());
    }

    #[test]
    fn test_empty_bundle_omits_entry() {
        let value = serde_json::to_value(Bundle::new(BundleType::Message)).unwrap();
        assert_eq!(value, json!({"type": "message"}));
    }
}
