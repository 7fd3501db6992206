//! Credentials for the HitBTC REST API
//!
//! HitBTC authenticates private endpoints with HTTP basic auth, using the API
//! key as the username and the API secret as the password. This crate holds
//! the key pair, knows how to load it from a YAML key file or the
//! environment, and produces the values every private request needs:
//! the `Authorization` header and a strictly increasing nonce.
//!
//! # Example
//!
//! ```no_run
//! use hitbtc_auth::{Credentials, DEFAULT_KEY_FILE};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Explicit credentials win, otherwise fall back to key.yml
//!     let creds = Credentials::resolve(None, DEFAULT_KEY_FILE)?;
//!     println!("Using key {:?}", creds);
//!
//!     let header = creds.basic_auth_header();
//!     assert!(header.starts_with("Basic "));
//!     Ok(())
//! }
//! ```

mod credentials;
mod error;
mod key_file;

pub use credentials::Credentials;
pub use error::{AuthError, AuthResult};
pub use key_file::DEFAULT_KEY_FILE;
