//! Account and profile types.

use etalase_commerce::AccountId;
use serde::{Deserialize, Serialize};

/// Profile data collected on the registration form.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProfile {
    /// The user's full name.
    pub full_name: String,
    /// The chosen username.
    pub username: String,
}

impl NewProfile {
    /// Create a new profile input.
    pub fn new(full_name: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            username: username.into(),
        }
    }
}

/// The profile record persisted under `users/{accountId}`.
///
/// Field names follow the remote database's camelCase convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// The user's full name.
    pub full_name: String,
    /// The chosen username.
    pub username: String,
    /// The registered email address.
    pub email: String,
}

/// An established session with the identity provider.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSession {
    /// The provider-assigned account id.
    pub account_id: AccountId,
    /// Session token to attach to authenticated calls.
    pub id_token: String,
    /// Token for renewing the session.
    pub refresh_token: String,
    /// Seconds until `id_token` expires.
    pub expires_in: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_uses_camel_case_wire_names() {
        let profile = Profile {
            full_name: "Budi Santoso".to_string(),
            username: "budi".to_string(),
            email: "budi@example.com".to_string(),
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["fullName"], "Budi Santoso");
        assert_eq!(json["username"], "budi");
        assert_eq!(json["email"], "budi@example.com");
    }
}
