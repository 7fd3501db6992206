//! HTTP transport abstraction
//!
//! Endpoints build a complete [`HttpRequest`] and hand it to an
//! [`HttpTransport`]. The real implementation is [`ReqwestTransport`];
//! [`MockTransport`] (with the `test-utils` feature) records requests and
//! replays canned responses so the request building can be tested without
//! network access.
//!
//! # Example
//!
//! ```
//! use hitbtc_rest::transport::{HttpRequest, HttpTransport, MockTransport};
//! use reqwest::Method;
//!
//! # async fn example() -> Result<(), hitbtc_rest::transport::TransportError> {
//! let transport = MockTransport::new();
//! transport.push_json(200, r#"[{"id":"ETHBTC"}]"#);
//!
//! let request = HttpRequest::new(Method::GET, "https://api.hitbtc.com/api/2/public/symbol");
//! let response = transport.execute(request).await?;
//! assert!(response.is_success());
//! assert_eq!(transport.requests().len(), 1);
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
#[cfg(any(test, feature = "test-utils"))]
use parking_lot::Mutex;
use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
#[cfg(any(test, feature = "test-utils"))]
use std::collections::VecDeque;
use std::fmt;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, instrument};

/// Content type of POST and DELETE bodies
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Transport layer errors
#[derive(Error, Debug)]
pub enum TransportError {
    /// HTTP client failed (connect, TLS, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Request could not be turned into an HTTP request
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Mock transport ran out of queued responses
    #[cfg(any(test, feature = "test-utils"))]
    #[error("no response queued")]
    NoResponse,
}

/// A fully built request, independent of the HTTP library
#[derive(Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// HTTP verb
    pub method: Method,
    /// Absolute URL, including the query string for GET requests
    pub url: String,
    /// URL-encoded form body for POST and DELETE requests
    pub body: Option<String>,
    /// `Authorization` header value for private requests
    pub authorization: Option<String>,
}

impl HttpRequest {
    /// Create a request without body or authorization
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            body: None,
            authorization: None,
        }
    }

    /// Path component of the URL (without query string)
    pub fn path(&self) -> &str {
        let after_scheme = self
            .url
            .split_once("://")
            .map(|(_, rest)| rest)
            .unwrap_or(&self.url);
        let path = after_scheme
            .find('/')
            .map(|idx| &after_scheme[idx..])
            .unwrap_or("/");
        path.split_once('?').map(|(p, _)| p).unwrap_or(path)
    }

    /// Query string of the URL, if any
    pub fn query(&self) -> Option<&str> {
        self.url.split_once('?').map(|(_, q)| q)
    }

    /// Decoded parameters, taken from the body when present, else the query
    pub fn params(&self) -> Vec<(String, String)> {
        let raw = match &self.body {
            Some(body) => body.as_str(),
            None => self.query().unwrap_or(""),
        };
        serde_urlencoded::from_str(raw).unwrap_or_default()
    }

    /// Value of a single decoded parameter
    pub fn param(&self, name: &str) -> Option<String> {
        self.params()
            .into_iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }
}

impl fmt::Debug for HttpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpRequest")
            .field("method", &self.method)
            .field("path", &self.path())
            .field("has_body", &self.body.is_some())
            .field("authorization", &self.authorization.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Raw response: status code and body bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Check for a 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for HTTP transport abstraction
///
/// One call sends exactly one request. Implementations must not retry.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send a request and return the raw response
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Real transport over `reqwest`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport with a request timeout and user agent
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    /// Wrap an existing `reqwest` client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[instrument(skip(self, request), fields(method = %request.method, path = request.path()))]
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self.client.request(request.method.clone(), &request.url);

        if let Some(authorization) = &request.authorization {
            let mut value = HeaderValue::from_str(authorization)
                .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;
            value.set_sensitive(true);
            builder = builder.header(AUTHORIZATION, value);
        }

        if let Some(body) = request.body {
            builder = builder.header(CONTENT_TYPE, FORM_CONTENT_TYPE).body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        debug!(status, len = body.len(), "Received response");

        Ok(HttpResponse { status, body })
    }
}

/// Mock transport for testing
///
/// Responses are returned in the order they were queued. Every request is
/// recorded, including the ones that get an error back.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

#[cfg(any(test, feature = "test-utils"))]
impl MockTransport {
    /// Create a mock transport with no queued responses
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with the given status and body
    pub fn push_json(&self, status: u16, body: impl Into<String>) {
        self.responses.lock().push_back(Ok(HttpResponse {
            status,
            body: body.into().into_bytes(),
        }));
    }

    /// Queue a transport failure
    pub fn push_error(&self, error: TransportError) {
        self.responses.lock().push_back(Err(error));
    }

    /// All requests seen so far
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().clone()
    }

    /// Most recent request
    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().last().cloned()
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[async_trait]
impl HttpTransport for MockTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().push(request);
        self.responses
            .lock()
            .pop_front()
            .unwrap_or(Err(TransportError::NoResponse))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_path_and_query() {
        let request = HttpRequest::new(
            Method::GET,
            "https://api.hitbtc.com/api/2/public/trades?symbol=ETHBTC&by=ts",
        );
        assert_eq!(request.path(), "/api/2/public/trades");
        assert_eq!(request.query(), Some("symbol=ETHBTC&by=ts"));
        assert_eq!(request.param("by"), Some("ts".to_string()));
        assert_eq!(request.param("missing"), None);
    }

    #[test]
    fn test_params_prefer_body() {
        let mut request = HttpRequest::new(Method::POST, "https://api.hitbtc.com/api/2/order");
        request.body = Some("symbol=ETHBTC&side=buy".to_string());
        assert_eq!(request.query(), None);
        assert_eq!(request.param("side"), Some("buy".to_string()));
    }

    #[test]
    fn test_debug_redacts_authorization() {
        let mut request = HttpRequest::new(Method::GET, "https://api.hitbtc.com/api/2/order");
        request.authorization = Some("Basic c2VjcmV0".to_string());
        let debug = format!("{:?}", request);
        assert!(!debug.contains("c2VjcmV0"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_response_success_range() {
        let ok = HttpResponse { status: 204, body: Vec::new() };
        let bad = HttpResponse { status: 400, body: Vec::new() };
        assert!(ok.is_success());
        assert!(!bad.is_success());
    }

    #[tokio::test]
    async fn test_mock_transport_records_and_replies() {
        let transport = MockTransport::new();
        transport.push_json(200, r#"{"ok":true}"#);

        let request = HttpRequest::new(Method::GET, "https://mock.test/api/2/public/symbol");
        let response = transport.execute(request.clone()).await.unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(transport.last_request(), Some(request));
    }

    #[tokio::test]
    async fn test_mock_transport_exhausted() {
        let transport = MockTransport::new();
        let request = HttpRequest::new(Method::GET, "https://mock.test/");

        let result = transport.execute(request).await;
        assert!(matches!(result, Err(TransportError::NoResponse)));
        assert_eq!(transport.requests().len(), 1);
    }

    #[test]
    fn test_reqwest_transport_builds() {
        assert!(ReqwestTransport::new(Duration::from_secs(5), "hitbtc-rest/test").is_ok());
    }
}
