//! YAML key file loading
//!
//! The key file is a small YAML document:
//!
//! ```yaml
//! key: your-api-key
//! secret: your-api-secret
//! ```

use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::credentials::Credentials;
use crate::error::{AuthError, AuthResult};

/// Key file looked up when no explicit credentials are given
pub const DEFAULT_KEY_FILE: &str = "key.yml";

#[derive(Deserialize)]
struct KeyFile {
    key: Option<String>,
    secret: Option<String>,
}

impl Credentials {
    /// Load credentials from a YAML key file with `key` and `secret` fields
    ///
    /// Returns [`AuthError::MissingConfig`] when the file does not exist and
    /// [`AuthError::MissingField`] when either field is absent.
    pub fn from_key_file(path: impl AsRef<Path>) -> AuthResult<Self> {
        let path = path.as_ref();
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(AuthError::MissingConfig(path.display().to_string()));
            }
            Err(e) => return Err(AuthError::Io(e)),
        };

        Self::from_yaml(&contents)
    }

    /// Parse credentials from key file contents
    pub fn from_yaml(contents: &str) -> AuthResult<Self> {
        let file: KeyFile = serde_yaml::from_str(contents)?;

        let key = file
            .key
            .ok_or_else(|| AuthError::MissingField("key".to_string()))?;
        let secret = file
            .secret
            .ok_or_else(|| AuthError::MissingField("secret".to_string()))?;

        Self::new(key, secret)
    }
}
