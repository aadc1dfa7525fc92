//! API key authentication
//!
//! Every request must carry the configured shared secret verbatim in its
//! `Authorization` header. The header is compared as raw bytes, so keys
//! outside visible ASCII work too. A match yields a fixed [`Identity`] that handlers
//! can read from the request extensions; anything else is a 401.

pub mod middleware;

use serde::Serialize;
use thiserror::Error;

/// Message returned to clients for every authentication failure
pub const INVALID_API_KEY: &str = "Invalid API Key";

/// Name of the identity attached to authenticated requests
pub const API_CLIENT_NAME: &str = "library-api-client";

/// Email of the identity attached to authenticated requests
pub const API_CLIENT_EMAIL: &str = "api@library.local";

/// Caller of an authenticated request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub name: String,
    pub email: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("No API key was presented")]
    MissingCredential,

    #[error("The presented API key does not match")]
    InvalidCredential,
}

/// Turns a presented credential into an identity
pub trait Authenticator: Send + Sync {
    fn authenticate(&self, credential: Option<&[u8]>) -> Result<Identity, AuthError>;
}

/// Accepts exactly one configured key
pub struct SharedSecretAuthenticator {
    api_key: String,
    identity: Identity,
}

impl SharedSecretAuthenticator {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            identity: Identity {
                name: API_CLIENT_NAME.to_string(),
                email: API_CLIENT_EMAIL.to_string(),
            },
        }
    }
}

impl Authenticator for SharedSecretAuthenticator {
    fn authenticate(&self, credential: Option<&[u8]>) -> Result<Identity, AuthError> {
        let presented = credential.ok_or(AuthError::MissingCredential)?;
        if constant_time_eq(presented, self.api_key.as_bytes()) {
            Ok(self.identity.clone())
        } else {
            Err(AuthError::InvalidCredential)
        }
    }
}

/// Byte comparison whose duration does not depend on where inputs differ
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
