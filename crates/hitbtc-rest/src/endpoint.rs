//! REST endpoint definitions

use reqwest::Url;
use std::fmt;

use crate::error::{RestError, RestResult};

/// Default API host
pub const DEFAULT_HOST: &str = "api.hitbtc.com";
/// Default API version
pub const DEFAULT_VERSION: &str = "2";

/// Where requests are sent: `{scheme}://{host}/api/{version}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoint {
    scheme: String,
    host: String,
    version: String,
}

impl Default for ApiEndpoint {
    fn default() -> Self {
        Self {
            scheme: "https".to_string(),
            host: DEFAULT_HOST.to_string(),
            version: DEFAULT_VERSION.to_string(),
        }
    }
}

impl ApiEndpoint {
    /// Default endpoint (`https://api.hitbtc.com/api/2`)
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the host (e.g. a demo environment)
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Override the API version path segment
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Override the scheme, for local test servers
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    /// API host
    pub fn host(&self) -> &str {
        &self.host
    }

    /// API version
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Base URL every path is appended to
    pub fn base_url(&self) -> String {
        format!("{}://{}/api/{}", self.scheme, self.host, self.version)
    }

    /// URL of a public resource: `/api/{version}/public/{segments...}`
    pub fn public_url(&self, segments: &[&str]) -> RestResult<String> {
        self.url(Some("public"), segments)
    }

    /// URL of a private resource: `/api/{version}/{segments...}`
    pub fn private_url(&self, segments: &[&str]) -> RestResult<String> {
        self.url(None, segments)
    }

    fn url(&self, scope: Option<&str>, segments: &[&str]) -> RestResult<String> {
        // Dot segments are collapsed by the URL parser and an empty one leaves a
        // trailing slash, so either would hit a different route
        if let Some(bad) = segments
            .iter()
            .find(|s| s.is_empty() || **s == "." || **s == "..")
        {
            return Err(RestError::InvalidParameter(format!(
                "invalid path segment '{}'",
                bad
            )));
        }

        let mut url = Url::parse(&self.base_url())
            .map_err(|e| RestError::InvalidEndpoint(format!("{}: {}", self.base_url(), e)))?;

        {
            // Segments are percent-encoded on push, so '/' and '?' stay inside one segment
            let mut path = url
                .path_segments_mut()
                .map_err(|_| RestError::InvalidEndpoint(self.base_url()))?;
            path.extend(scope);
            path.extend(segments);
        }

        Ok(url.to_string())
    }
}

impl fmt::Display for ApiEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base_url())
    }
}
