//! Identity service client.

use crate::{AuthConfig, AuthError, AuthSession, NewProfile, Profile};
use etalase_commerce::AccountId;
use etalase_data::{FetchClient, FetchError, Response, Transport};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Client for the remote identity service.
pub struct AuthClient {
    http: FetchClient,
    config: AuthConfig,
}

/// Body of a credential call (`accounts:signUp` / `accounts:signInWithPassword`).
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CredentialRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

/// Successful credential call response.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CredentialResponse {
    local_id: String,
    id_token: String,
    refresh_token: String,
    /// The provider sends this as a decimal string, e.g. `"3600"`.
    expires_in: String,
}

impl CredentialResponse {
    fn into_session(self) -> Result<AuthSession, AuthError> {
        let expires_in = self
            .expires_in
            .parse::<i64>()
            .map_err(|_| AuthError::Malformed(format!("expiresIn: {:?}", self.expires_in)))?;
        Ok(AuthSession {
            account_id: AccountId::new(self.local_id),
            id_token: self.id_token,
            refresh_token: self.refresh_token,
            expires_in,
        })
    }
}

/// Error payload the provider returns on rejected credential calls.
#[derive(Deserialize)]
struct RejectionBody {
    error: RejectionDetail,
}

#[derive(Deserialize)]
struct RejectionDetail {
    message: String,
}

impl AuthClient {
    /// Create a client from a configuration and a transport.
    pub fn new(config: AuthConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            http: FetchClient::new(transport),
            config,
        }
    }

    /// Register a new account and persist its profile record.
    ///
    /// Two remote steps: create the account with the credential endpoint,
    /// then PUT the profile (full name, username, email) under
    /// `users/{accountId}` in the database. If the second step fails the
    /// account still exists; the error carries the account id so the
    /// caller can retry just the profile write.
    pub fn register(
        &self,
        email: &str,
        password: &str,
        profile: NewProfile,
    ) -> Result<AuthSession, AuthError> {
        tracing::debug!("registering new account");
        let session = self.credential_call("accounts:signUp", email, password)?;

        let record = Profile {
            full_name: profile.full_name,
            username: profile.username,
            email: email.to_string(),
        };
        let written = self
            .http
            .put(self.profile_url(&session.account_id))
            .json(&record)?
            .send()
            .and_then(Response::error_for_status);

        if let Err(source) = written {
            tracing::warn!(account_id = %session.account_id, "account created but profile write failed");
            return Err(AuthError::ProfileWriteFailed {
                account_id: session.account_id,
                source,
            });
        }
        Ok(session)
    }

    /// Sign in with an existing account's credentials.
    pub fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        tracing::debug!("signing in");
        self.credential_call("accounts:signInWithPassword", email, password)
    }

    /// Fetch the profile record for an account.
    ///
    /// Returns `Ok(None)` if no record has been written (the database
    /// answers `null` for absent paths).
    pub fn fetch_profile(&self, account_id: &AccountId) -> Result<Option<Profile>, AuthError> {
        let response = self
            .http
            .get(self.profile_url(account_id))
            .send()?
            .error_for_status()?;
        let profile = response
            .json::<Option<Profile>>()
            .map_err(|e| AuthError::Malformed(e.to_string()))?;
        Ok(profile)
    }

    fn credential_call(
        &self,
        endpoint: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, AuthError> {
        let url = format!("{}/{}", self.config.auth_url.trim_end_matches('/'), endpoint);
        let response = self
            .http
            .post(url)
            .query("key", self.config.api_key.as_str())
            .json(&CredentialRequest {
                email,
                password,
                return_secure_token: true,
            })?
            .send()?;

        if !response.is_success() {
            return Err(decode_rejection(&response));
        }
        let body = response
            .json::<CredentialResponse>()
            .map_err(|e| AuthError::Malformed(e.to_string()))?;
        body.into_session()
    }

    fn profile_url(&self, account_id: &AccountId) -> String {
        format!(
            "{}/users/{}.json",
            self.config.db_url.trim_end_matches('/'),
            account_id
        )
    }
}

fn decode_rejection(response: &Response) -> AuthError {
    match response.json::<RejectionBody>() {
        Ok(body) => AuthError::Rejected {
            code: body.error.message,
        },
        Err(_) => AuthError::Transport(FetchError::Http {
            status: response.status,
            message: response.text().unwrap_or_default(),
        }),
    }
}
