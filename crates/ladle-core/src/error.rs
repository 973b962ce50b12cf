//! Error types for ladle-core

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Result type alias using ladle-core's `ApiError`
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors that can occur when talking to the backend or local storage
#[derive(Error, Debug)]
pub enum ApiError {
    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// HTTP transport failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON payload failure
    #[error("Failed to parse JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    /// Backend rejected the request with a readable message
    #[error("API error: {0}")]
    Api(String),

    /// Session is missing or no longer accepted by the backend
    #[error("Session is not authorized")]
    Unauthorized,

    /// Durable token storage error
    #[error("Secure storage error: {0}")]
    SecureStorage(String),
}

impl ApiError {
    /// Human-readable message suitable for a reject modal.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api(message) => message.clone(),
            Self::Unauthorized => "Your session has expired. Please sign in again.".to_string(),
            Self::Http(_) => "Could not reach the server. Please try again.".to_string(),
            _ => self.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct BackendErrorBody {
    error: Option<String>,
    error_description: Option<String>,
    message: Option<String>,
    msg: Option<String>,
}

/// Extract a readable message from an error response body.
#[must_use]
pub fn parse_api_error(status: StatusCode, body: &str) -> String {
    if let Ok(payload) = serde_json::from_str::<BackendErrorBody>(body) {
        if let Some(message) = payload
            .message
            .or(payload.msg)
            .or(payload.error_description)
            .or(payload.error)
        {
            return format!("{} ({})", message.trim(), status.as_u16());
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        format!("{} ({})", trimmed, status.as_u16())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_api_error_prefers_message_field() {
        let body = r#"{"message":"Nickname is already in use","error":"conflict"}"#;
        assert_eq!(
            parse_api_error(StatusCode::CONFLICT, body),
            "Nickname is already in use (409)"
        );
    }

    #[test]
    fn parse_api_error_falls_back_to_raw_body() {
        assert_eq!(
            parse_api_error(StatusCode::BAD_REQUEST, "bad window"),
            "bad window (400)"
        );
    }

    #[test]
    fn parse_api_error_handles_empty_body() {
        assert_eq!(
            parse_api_error(StatusCode::INTERNAL_SERVER_ERROR, "  "),
            "HTTP 500"
        );
    }
}
