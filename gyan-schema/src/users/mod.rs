use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Body of `/api/users/login`. `identifier` is a username or an email.
#[derive(Clone, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub identifier: String,
    pub password: String,
}

impl LoginCredentials {
    pub fn new(identifier: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("identifier", &self.identifier)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// `data` object of a successful login.
///
/// An absent `access_token` deserializes as empty; callers treat that as a
/// malformed response.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct LoginSession {
    #[serde(default)]
    pub access_token: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,

    /// Only issued to accounts that still have to confirm their email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verify_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(rename = "isVarified", default, skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,

    #[serde(rename = "isNotVarified", default, skip_serializing_if = "Option::is_none")]
    pub is_not_verified: Option<bool>,

    #[serde(default, flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl LoginSession {
    /// Whether the backend flagged the account as unverified.
    pub fn needs_verification(&self) -> bool {
        self.is_not_verified.unwrap_or(false) || self.is_verified == Some(false)
    }
}

impl fmt::Debug for LoginSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginSession")
            .field("username", &self.username)
            .field("is_verified", &self.is_verified)
            .field("is_not_verified", &self.is_not_verified)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_unverified_login() {
        let session: LoginSession = serde_json::from_value(json!({
            "access_token": "a",
            "refresh_token": "r",
            "verify_token": "v",
            "username": "Sudip",
            "isNotVarified": true
        }))
        .expect("parse session");
        assert_eq!(session.access_token, "a");
        assert_eq!(session.verify_token.as_deref(), Some("v"));
        assert!(session.needs_verification());
    }

    #[test]
    fn debug_hides_secrets() {
        let creds = LoginCredentials::new("Sudip", "hunter2");
        assert!(!format!("{creds:?}").contains("hunter2"));

        let session = LoginSession {
            access_token: "secret-token".to_string(),
            ..LoginSession::default()
        };
        assert!(!format!("{session:?}").contains("secret-token"));
    }
}
