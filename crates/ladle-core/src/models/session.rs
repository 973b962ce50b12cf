//! Session and auth wire models

use std::fmt;

use serde::{Deserialize, Serialize};

/// Bearer token pair issued at login.
///
/// This is the only client state that survives a restart; everything else is
/// rebuilt from server responses on each load.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
}

impl fmt::Debug for AuthTokens {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("AuthTokens")
            .field("access_token", &"[REDACTED]")
            .field("refresh_token", &"[REDACTED]")
            .finish()
    }
}

/// Member role as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
    #[serde(rename = "ROLE_USER")]
    User,
}

/// Identity fields fetched from the "who am I" endpoint after bootstrap or
/// login. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: i64,
    pub email: String,
    pub nickname: String,
    pub role: Role,
}

impl Profile {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub nickname: String,
}

/// Login response: the token pair plus the grant type the backend used.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: AuthTokens,
    pub grant_type: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn tokens_debug_redacts_both_tokens() {
        let tokens = AuthTokens {
            access_token: "secret-access".to_string(),
            refresh_token: "secret-refresh".to_string(),
        };
        let rendered = format!("{tokens:?}");
        assert!(!rendered.contains("secret-access"));
        assert!(!rendered.contains("secret-refresh"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[test]
    fn role_uses_backend_wire_names() {
        let profile: Profile = serde_json::from_str(
            r#"{"id":7,"email":"a@b.c","nickname":"amy","role":"ROLE_ADMIN"}"#,
        )
        .unwrap();
        assert_eq!(profile.role, Role::Admin);
        assert!(profile.is_admin());
    }

    #[test]
    fn login_response_parses_nested_token_pair() {
        let response: LoginResponse = serde_json::from_str(
            r#"{"token":{"accessToken":"a","refreshToken":"r"},"grantType":"Bearer"}"#,
        )
        .unwrap();
        assert_eq!(response.token.access_token, "a");
        assert_eq!(response.grant_type, "Bearer");
    }
}
