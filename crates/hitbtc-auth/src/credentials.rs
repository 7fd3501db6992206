//! API credentials for HitBTC private endpoints
//!
//! # Security
//!
//! The API secret is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use secrecy::{ExposeSecret, SecretString};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

use crate::error::{AuthError, AuthResult};

/// Highest nonce handed out so far in this process
static LAST_NONCE: AtomicU64 = AtomicU64::new(0);

/// API key and secret used for basic auth on private requests
pub struct Credentials {
    /// API key (sent as the basic-auth username and as `apikey`)
    api_key: String,
    /// API secret (basic-auth password, zeroized on drop)
    secret: SecretString,
}

impl Credentials {
    /// Create credentials from an API key and secret
    ///
    /// Both values are used verbatim. Empty values are rejected.
    pub fn new(api_key: impl Into<String>, secret: impl Into<String>) -> AuthResult<Self> {
        let api_key = api_key.into();
        let secret = secret.into();

        if api_key.is_empty() {
            return Err(AuthError::InvalidCredentials("API key is empty".to_string()));
        }
        if secret.is_empty() {
            return Err(AuthError::InvalidCredentials("API secret is empty".to_string()));
        }

        Ok(Self {
            api_key,
            secret: SecretString::from(secret),
        })
    }

    /// Create credentials from environment variables
    ///
    /// Reads `HITBTC_API_KEY` and `HITBTC_API_SECRET` from the environment.
    pub fn from_env() -> AuthResult<Self> {
        let api_key = std::env::var("HITBTC_API_KEY")
            .map_err(|_| AuthError::EnvVarNotSet("HITBTC_API_KEY".to_string()))?;
        let secret = std::env::var("HITBTC_API_SECRET")
            .map_err(|_| AuthError::EnvVarNotSet("HITBTC_API_SECRET".to_string()))?;

        Self::new(api_key, secret)
    }

    /// Use explicit credentials if given, otherwise load them from `key_file`
    ///
    /// Intended for the code that constructs the client, so the client itself
    /// never touches the file system.
    pub fn resolve(explicit: Option<Credentials>, key_file: impl AsRef<Path>) -> AuthResult<Self> {
        match explicit {
            Some(credentials) => Ok(credentials),
            None => {
                debug!(path = %key_file.as_ref().display(), "No explicit credentials, loading key file");
                Self::from_key_file(key_file)
            }
        }
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Value for the `Authorization` header: `Basic base64(key:secret)`
    pub fn basic_auth_header(&self) -> String {
        let raw = format!("{}:{}", self.api_key, self.secret.expose_secret());
        format!("Basic {}", BASE64.encode(raw))
    }

    /// Generate a nonce for an authenticated request
    ///
    /// The nonce is a millisecond unix timestamp. It is strictly increasing
    /// across the process: when two requests land in the same millisecond
    /// (or the clock steps back) the previous value plus one is used.
    pub fn generate_nonce() -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);

        let previous = match LAST_NONCE.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(now.max(last + 1))
        }) {
            Ok(prev) | Err(prev) => prev,
        };

        now.max(previous + 1).to_string()
    }
}

impl Clone for Credentials {
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            secret: SecretString::from(self.secret.expose_secret().to_string()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field(
                "api_key",
                &format!("{}...", self.api_key.chars().take(8).collect::<String>()),
            )
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nonce_generation() {
        let nonce1 = Credentials::generate_nonce();
        let nonce2 = Credentials::generate_nonce();
        assert_ne!(nonce1, nonce2);

        let n1: u64 = nonce1.parse().unwrap();
        let n2: u64 = nonce2.parse().unwrap();
        assert!(n2 > n1);
    }

    #[test]
    fn test_nonce_is_millisecond_timestamp() {
        let before = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_millis() as u64;
        let nonce: u64 = Credentials::generate_nonce().parse().unwrap();

        assert!(nonce >= before);
        // Same order of magnitude as a millisecond timestamp
        assert_eq!(nonce.to_string().len(), before.to_string().len());
    }

    #[test]
    fn test_nonce_strictly_increasing_in_burst() {
        let nonces: Vec<u64> = (0..1000)
            .map(|_| Credentials::generate_nonce().parse().unwrap())
            .collect();
        assert!(nonces.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_basic_auth_header() {
        let creds = Credentials::new("user", "pass").unwrap();
        // base64("user:pass")
        assert_eq!(creds.basic_auth_header(), "Basic dXNlcjpwYXNz");
    }

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let creds = Credentials::new("test_api_key", "super_secret_value").unwrap();
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("super_secret_value"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_empty_values_rejected() {
        assert!(matches!(
            Credentials::new("", "secret"),
            Err(AuthError::InvalidCredentials(_))
        ));
        assert!(matches!(
            Credentials::new("key", ""),
            Err(AuthError::InvalidCredentials(_))
        ));
    }

    #[test]
    fn test_resolve_prefers_explicit() {
        let explicit = Credentials::new("explicit_key", "explicit_secret").unwrap();
        let resolved = Credentials::resolve(Some(explicit), "/nonexistent/key.yml").unwrap();
        assert_eq!(resolved.api_key(), "explicit_key");
    }

    #[test]
    fn test_clone_keeps_secret() {
        let creds = Credentials::new("key", "secret").unwrap();
        let cloned = creds.clone();
        assert_eq!(creds.basic_auth_header(), cloned.basic_auth_header());
    }
}
