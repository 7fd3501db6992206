//! Error types for credential handling

/// Errors that can occur while loading or using credentials
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// No explicit credentials and no key file at the given path
    #[error("Missing configuration: no credentials given and no key file at {0}")]
    MissingConfig(String),

    /// Key file exists but lacks a required field
    #[error("Key file is missing field: {0}")]
    MissingField(String),

    /// Credentials are present but unusable
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Key file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Key file is not valid YAML
    #[error("Key file parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Environment variable not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),
}

/// Result type for credential operations
pub type AuthResult<T> = Result<T, AuthError>;
