//! HTTP transport for gateway exchanges
//!
//! One request, one response, no retries. Every failed exchange ends in
//! exactly one [`TransportError`] variant: a status outside 2xx, no answer
//! before the deadline, or a transport-level failure.

use crate::domain::errors::{EpdError, TransportError};
use crate::domain::result::Result;
use crate::fhir::bundle::HttpVerb;
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, Method};
use std::time::{Duration, Instant};
use url::Url;

/// A fully resolved HTTP request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    pub method: HttpVerb,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl TransportRequest {
    pub fn new(method: HttpVerb, url: Url) -> Self {
        Self {
            method,
            url,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }
}

/// Executes requests against the gateway
///
/// Implementations return the response body of a 2xx answer and classify
/// every other outcome as a [`TransportError`].
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: TransportRequest) -> Result<String>;
}

/// Appends `endpoint` to `base` and encodes `query` as `key=value` pairs
///
/// # Errors
///
/// Returns `EpdError::Configuration` if the endpoint cannot be resolved
/// against the base URL.
pub fn build_url(base: &Url, endpoint: &str, query: &[(String, String)]) -> Result<Url> {
    let mut url = base
        .join(endpoint)
        .map_err(|e| EpdError::Configuration(format!("Invalid endpoint '{endpoint}': {e}")))?;
    if !query.is_empty() {
        url.query_pairs_mut()
            .extend_pairs(query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    }
    Ok(url)
}

/// reqwest-backed transport with a single deadline per exchange
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    timeout: Duration,
}

impl ReqwestTransport {
    /// Creates a transport whose exchanges are bounded by `timeout`
    ///
    /// # Errors
    ///
    /// Returns `EpdError::Configuration` if the HTTP client cannot be built.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = ClientBuilder::new()
            .connect_timeout(timeout)
            .build()
            .map_err(|e| EpdError::Configuration(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn exchange(&self, request: TransportRequest) -> std::result::Result<String, TransportError> {
        let mut builder = self.client.request(to_method(request.method), request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| self.classify(e))?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                code: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }
        response.text().await.map_err(|e| self.classify(e))
    }

    fn classify(&self, err: reqwest::Error) -> TransportError {
        if err.is_timeout() {
            TransportError::Timeout {
                elapsed_seconds: deadline_seconds(self.timeout),
            }
        } else {
            TransportError::Network(err.to_string())
        }
    }
}

/// Whole seconds of a deadline, rounded up
fn deadline_seconds(timeout: Duration) -> u64 {
    timeout.as_secs() + u64::from(timeout.subsec_nanos() > 0)
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: TransportRequest) -> Result<String> {
        let method = request.method;
        let url = request.url.to_string();
        let started = Instant::now();

        let outcome = match tokio::time::timeout(self.timeout, self.exchange(request)).await {
            Ok(result) => result,
            Err(_) => Err(TransportError::Timeout {
                elapsed_seconds: deadline_seconds(self.timeout),
            }),
        };
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &outcome {
            Ok(body) => tracing::debug!(
                method = %method,
                url = %url,
                elapsed_ms,
                bytes = body.len(),
                "Gateway exchange succeeded"
            ),
            Err(e) => tracing::warn!(
                method = %method,
                url = %url,
                elapsed_ms,
                status = e.status_code(),
                error = %e,
                "Gateway exchange failed"
            ),
        }
        Ok(outcome?)
    }
}

fn to_method(verb: HttpVerb) -> Method {
    match verb {
        HttpVerb::Get => Method::GET,
        HttpVerb::Head => Method::HEAD,
        HttpVerb::Post => Method::POST,
        HttpVerb::Put => Method::PUT,
        HttpVerb::Delete => Method::DELETE,
        HttpVerb::Patch => Method::PATCH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://mag.example.ch/fhir/").unwrap()
    }

    #[test]
    fn test_build_url_without_query() {
        let url = build_url(&base(), "List", &[]).unwrap();
        assert_eq!(url.as_str(), "https://mag.example.ch/fhir/List");
    }

    #[test]
    fn test_build_url_empty_endpoint_is_base() {
        let url = build_url(&base(), "", &[]).unwrap();
        assert_eq!(url.as_str(), "https://mag.example.ch/fhir/");
    }

    #[test]
    fn test_build_url_encodes_query() {
        let url = build_url(
            &base(),
            "Patient/$ihe-pix",
            &[
                ("sourceIdentifier".to_string(), "urn:oid:1.2|PAT 1".to_string()),
                ("targetSystem".to_string(), "urn:oid:3.4".to_string()),
            ],
        )
        .unwrap();
        assert_eq!(url.path(), "/fhir/Patient/$ihe-pix");
        let pairs: Vec<_> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs[0].1, "urn:oid:1.2|PAT 1");
        assert_eq!(pairs[1].0, "targetSystem");
        assert!(!url.as_str().contains(' '));
    }

    #[test]
    fn test_deadline_seconds_rounds_up() {
        assert_eq!(deadline_seconds(Duration::from_millis(300)), 1);
        assert_eq!(deadline_seconds(Duration::from_millis(1500)), 2);
        assert_eq!(deadline_seconds(Duration::from_secs(30)), 30);
        assert_eq!(deadline_seconds(Duration::ZERO), 0);
    }

    #[test]
    fn test_to_method() {
        assert_eq!(to_method(HttpVerb::Delete), Method::DELETE);
        assert_eq!(to_method(HttpVerb::Post), Method::POST);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let transport = ReqwestTransport::new(Duration::from_secs(5)).unwrap();
        let url = Url::parse(&format!("http://127.0.0.1:{port}/fhir/List")).unwrap();
        let err = transport
            .execute(TransportRequest::new(HttpVerb::Get, url))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            EpdError::Transport(TransportError::Network(_))
        ));
    }

    #[tokio::test]
    async fn test_silent_server_times_out() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let transport = ReqwestTransport::new(Duration::from_secs(1)).unwrap();
        let url = Url::parse(&format!("http://127.0.0.1:{port}/fhir/List")).unwrap();
        let err = transport
            .execute(TransportRequest::new(HttpVerb::Get, url))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            EpdError::Transport(TransportError::Timeout { elapsed_seconds: 1 })
        ));
    }

    #[tokio::test]
    async fn test_sub_second_deadline_reports_one_second() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let transport = ReqwestTransport::new(Duration::from_millis(300)).unwrap();
        let url = Url::parse(&format!("http://127.0.0.1:{port}/fhir/List")).unwrap();
        let err = transport
            .execute(TransportRequest::new(HttpVerb::Get, url))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            EpdError::Transport(TransportError::Timeout { elapsed_seconds: 1 })
        ));
    }
}
