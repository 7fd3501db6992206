//! Error types for REST API operations

use crate::transport::TransportError;
use hitbtc_auth::AuthError;

/// Errors that can occur during REST API operations
///
/// Exchange-reported errors are not represented here: a JSON error body is
/// returned to the caller like any other body. See
/// [`ExchangeError`](crate::types::ExchangeError) for recognising one.
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// Request could not be delivered or the response could not be read
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Loading or using credentials failed
    #[error("Credentials error: {0}")]
    Auth(#[from] AuthError),

    /// Missing API credentials for private endpoint
    #[error("Authentication required for this endpoint")]
    AuthRequired,

    /// Invalid request parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Endpoint configuration does not form a valid URL
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Parameters could not be URL-encoded
    #[error("Encode error: {0}")]
    Encode(String),

    /// Response body is not valid JSON
    #[error("Parse error: {message} (body: {body})")]
    Parse {
        /// Decoder error message
        message: String,
        /// Start of the offending body
        body: String,
    },
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;
