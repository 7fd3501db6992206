//! Request assembly and response decoding shared by all endpoints

use hitbtc_auth::Credentials;
use reqwest::Method;
use serde_json::Value;
use tracing::{debug, warn};

use crate::endpoint::ApiEndpoint;
use crate::error::{RestError, RestResult};
use crate::transport::{HttpRequest, HttpTransport};

/// Ordered request parameters
pub type Params = Vec<(String, String)>;

/// How much of an undecodable body is kept in the error
const BODY_SNIPPET_LEN: usize = 256;

/// URL-encode parameters as `k1=v1&k2=v2`
pub fn encode_params(params: &[(String, String)]) -> RestResult<String> {
    serde_urlencoded::to_string(params).map_err(|e| RestError::Encode(e.to_string()))
}

/// Build an unauthenticated GET for `/public/{segments...}`
pub(crate) fn public_get(
    endpoint: &ApiEndpoint,
    segments: &[&str],
    params: &[(String, String)],
) -> RestResult<HttpRequest> {
    let url = endpoint.public_url(segments)?;
    let query = encode_params(params)?;

    Ok(HttpRequest::new(Method::GET, with_query(url, &query)))
}

/// Build an authenticated request for `/{segments...}`
///
/// `apikey` and a fresh `nonce` are added to the parameters of every private
/// request regardless of verb. GET parameters go in the query string,
/// POST and DELETE parameters in the form body.
pub(crate) fn private_request(
    endpoint: &ApiEndpoint,
    credentials: &Credentials,
    method: Method,
    segments: &[&str],
    mut params: Params,
) -> RestResult<HttpRequest> {
    let url = endpoint.private_url(segments)?;

    params.retain(|(key, _)| key != "apikey" && key != "nonce");
    params.push(("apikey".to_string(), credentials.api_key().to_string()));
    params.push(("nonce".to_string(), Credentials::generate_nonce()));

    let encoded = encode_params(&params)?;

    let mut request = if method == Method::GET {
        HttpRequest::new(method, with_query(url, &encoded))
    } else {
        let mut request = HttpRequest::new(method, url);
        request.body = Some(encoded);
        request
    };
    request.authorization = Some(credentials.basic_auth_header());

    Ok(request)
}

/// Send one request and decode the body as JSON
///
/// Non-2xx responses are not treated as errors: their body is decoded and
/// returned like any other.
pub(crate) async fn send_json(
    transport: &dyn HttpTransport,
    request: HttpRequest,
) -> RestResult<Value> {
    debug!(method = %request.method, path = request.path(), "Sending request");

    let response = transport.execute(request).await?;

    if !response.is_success() {
        warn!(status = response.status, "Exchange returned non-success status");
    }

    decode_body(&response.body)
}

/// Decode a response body into a generic JSON tree
pub fn decode_body(body: &[u8]) -> RestResult<Value> {
    serde_json::from_slice(body).map_err(|e| RestError::Parse {
        message: e.to_string(),
        body: String::from_utf8_lossy(body)
            .chars()
            .take(BODY_SNIPPET_LEN)
            .collect(),
    })
}

fn with_query(url: String, query: &str) -> String {
    if query.is_empty() {
        url
    } else {
        format!("{}?{}", url, query)
    }
}
