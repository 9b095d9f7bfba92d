//! Identity service configuration.

use crate::AuthError;
use std::fmt;

/// Endpoints and credentials for the remote identity service.
#[derive(Clone)]
pub struct AuthConfig {
    /// API key sent as the `key` query parameter on credential calls.
    pub api_key: String,
    /// Base URL of the credential endpoints.
    pub auth_url: String,
    /// Base URL of the JSON database holding profile records.
    pub db_url: String,
}

impl AuthConfig {
    /// Create a configuration from explicit values.
    pub fn new(
        api_key: impl Into<String>,
        auth_url: impl Into<String>,
        db_url: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            auth_url: auth_url.into(),
            db_url: db_url.into(),
        }
    }

    /// Read the configuration from the environment.
    ///
    /// Expects `ETALASE_AUTH_API_KEY`, `ETALASE_AUTH_URL`, and
    /// `ETALASE_DB_URL`.
    pub fn from_env() -> Result<Self, AuthError> {
        Ok(Self {
            api_key: require_env("ETALASE_AUTH_API_KEY")?,
            auth_url: require_env("ETALASE_AUTH_URL")?,
            db_url: require_env("ETALASE_DB_URL")?,
        })
    }
}

// The api_key is a credential; keep it out of Debug output and logs.
impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("api_key", &"<redacted>")
            .field("auth_url", &self.auth_url)
            .field("db_url", &self.db_url)
            .finish()
    }
}

fn require_env(name: &'static str) -> Result<String, AuthError> {
    std::env::var(name).map_err(|_| AuthError::MissingConfig(name))
}
