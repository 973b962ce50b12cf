//! Client bootstrap configuration.
//!
//! The backend endpoints are provisioned through environment variables (an
//! optional `.env` file is loaded by the desktop binary before this runs).
//! Only public endpoints live here; no secret credentials are ever stored.

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};
use crate::util::{is_http_url, normalize_text_option};

const DEFAULT_API_BASE_URL: &str = "http://localhost:8111";
const DEFAULT_WS_CHAT_URL: &str = "ws://localhost:8111/ws/chat";

/// Endpoints required to bootstrap the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootstrapConfig {
    /// REST gateway base URL, without a trailing slash.
    pub api_base_url: String,
    /// Chat WebSocket endpoint. Consumed by the chat feature, kept in the
    /// config so a deployment can point it at a different host.
    pub ws_chat_url: String,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            ws_chat_url: DEFAULT_WS_CHAT_URL.to_string(),
        }
    }
}

impl BootstrapConfig {
    /// Resolve configuration from the process environment, falling back to
    /// the local-development defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_values(
            std::env::var("LADLE_API_BASE_URL").ok(),
            std::env::var("LADLE_WS_CHAT_URL").ok(),
        )
    }

    /// Build a config from optional raw values. Public for testability.
    pub fn from_values(api_base_url: Option<String>, ws_chat_url: Option<String>) -> Result<Self> {
        let api_base_url = match normalize_text_option(api_base_url) {
            Some(url) => normalize_base_url(&url)?,
            None => DEFAULT_API_BASE_URL.to_string(),
        };
        let ws_chat_url =
            normalize_text_option(ws_chat_url).unwrap_or_else(|| DEFAULT_WS_CHAT_URL.to_string());

        Ok(Self {
            api_base_url,
            ws_chat_url,
        })
    }

    /// Redirect URL for third-party sign-in, consumed via full-page
    /// navigation rather than an API call.
    #[must_use]
    pub fn oauth_redirect_url(&self, provider: &str) -> String {
        format!("{}/oauth2/{provider}", self.api_base_url)
    }
}

/// Validate and normalize a REST base URL.
pub fn normalize_base_url(url: &str) -> Result<String> {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ApiError::InvalidConfiguration(
            "API base URL must not be empty",
        ));
    }
    if !is_http_url(trimmed) {
        return Err(ApiError::InvalidConfiguration(
            "API base URL must include http:// or https://",
        ));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn normalize_base_url_strips_trailing_slash() {
        let normalized = normalize_base_url("https://api.ladle.app/").unwrap();
        assert_eq!(normalized, "https://api.ladle.app");
    }

    #[test]
    fn normalize_base_url_rejects_other_schemes() {
        assert!(normalize_base_url("ftp://api.ladle.app").is_err());
        assert!(normalize_base_url("   ").is_err());
    }

    #[test]
    fn from_values_uses_defaults_when_unset() {
        let config = BootstrapConfig::from_values(None, Some("  ".to_string())).unwrap();
        assert_eq!(config, BootstrapConfig::default());
    }

    #[test]
    fn oauth_redirect_url_targets_provider() {
        let config = BootstrapConfig::default();
        assert_eq!(
            config.oauth_redirect_url("google"),
            "http://localhost:8111/oauth2/google"
        );
    }
}
