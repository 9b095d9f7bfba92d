//! Authentication errors.

use etalase_commerce::AccountId;
use etalase_data::FetchError;
use thiserror::Error;

/// Authentication error type.
#[derive(Error, Debug)]
pub enum AuthError {
    /// The identity provider rejected the credentials.
    ///
    /// `code` is the provider's error code, e.g. `EMAIL_EXISTS` or
    /// `INVALID_LOGIN_CREDENTIALS`.
    #[error("rejected by identity provider: {code}")]
    Rejected { code: String },

    /// The account was created but the profile record could not be written.
    ///
    /// The account exists remotely; callers should surface the id so the
    /// profile write can be retried rather than the whole registration.
    #[error("profile write failed for account {account_id}: {source}")]
    ProfileWriteFailed {
        account_id: AccountId,
        source: FetchError,
    },

    /// Transport-level failure.
    #[error("transport error: {0}")]
    Transport(#[from] FetchError),

    /// The provider answered with a body we could not decode.
    #[error("malformed provider response: {0}")]
    Malformed(String),

    /// A required configuration value is missing from the environment.
    #[error("missing configuration: {0}")]
    MissingConfig(&'static str),
}

impl AuthError {
    /// Check if this is the provider telling us the email is taken.
    pub fn is_email_taken(&self) -> bool {
        matches!(self, AuthError::Rejected { code } if code == "EMAIL_EXISTS")
    }

    /// Check if this is a credentials failure on sign-in.
    pub fn is_invalid_credentials(&self) -> bool {
        matches!(
            self,
            AuthError::Rejected { code }
                if code == "INVALID_LOGIN_CREDENTIALS"
                    || code == "INVALID_PASSWORD"
                    || code == "EMAIL_NOT_FOUND"
        )
    }
}
