use std::fmt;

use groupmeet_core::ValidationErrors;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when using the GroupMeet API client
#[derive(Debug, Error)]
pub enum GroupmeetError {
    /// HTTP request error
    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// API error returned by the server
    #[error("API error: {0}")]
    Api(ApiErrorObject),

    /// The session is missing or expired (HTTP 401)
    #[error("Not authenticated: log in again and refresh GROUPMEET_SESSION")]
    Unauthorized,

    /// Configuration error (e.g., missing session)
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(String),

    /// Request rejected locally before being sent
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
}

/// Error body returned by the GroupMeet server
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorObject {
    /// HTTP status code
    #[serde(default)]
    pub status_code: Option<u16>,
    /// Human-readable error message
    #[serde(default)]
    pub error: String,
    /// Individual validation failures, when the server lists them
    #[serde(default)]
    pub errors: Vec<String>,
}

impl fmt::Display for ApiErrorObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(code) = self.status_code {
            write!(f, "[{code}] ")?;
        }
        f.write_str(&self.error)?;
        if !self.errors.is_empty() {
            write!(f, ": {}", self.errors.join(", "))?;
        }
        Ok(())
    }
}

impl GroupmeetError {
    /// Determines if this error is retryable
    ///
    /// Retryable errors include rate limits (429), timeouts (408),
    /// and server errors (5xx).
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Api(obj) => obj
                .status_code
                .is_some_and(crate::retry::is_transient_status),
            Self::Reqwest(e) => e.is_timeout() || e.is_connect(),
            Self::Unauthorized | Self::Config(_) | Self::Serde(_) | Self::Validation(_) => false,
        }
    }

    /// HTTP status of an API error, if any
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(obj) => obj.status_code,
            Self::Unauthorized => Some(StatusCode::UNAUTHORIZED.as_u16()),
            Self::Reqwest(e) => e.status().map(|s| s.as_u16()),
            Self::Config(_) | Self::Serde(_) | Self::Validation(_) => None,
        }
    }
}

/// Maps a serde deserialization error to a `GroupmeetError` with context
#[must_use]
pub fn map_deser(e: &serde_json::Error, body: &[u8]) -> GroupmeetError {
    let snippet = String::from_utf8_lossy(&body[..body.len().min(400)]).to_string();
    GroupmeetError::Serde(format!("{e}: {snippet}"))
}

/// Deserializes an API error from the response body
///
/// A 401 always maps to [`GroupmeetError::Unauthorized`]. Otherwise the body
/// is parsed as JSON, falling back to plain text on failure.
#[must_use]
pub fn deserialize_api_error(status: StatusCode, body: &[u8]) -> GroupmeetError {
    if status == StatusCode::UNAUTHORIZED {
        return GroupmeetError::Unauthorized;
    }

    let status_code = Some(status.as_u16());

    if let Ok(mut obj) = serde_json::from_slice::<ApiErrorObject>(body) {
        obj.status_code = status_code;
        if obj.error.is_empty() {
            obj.error = status.canonical_reason().unwrap_or("request failed").to_string();
        }
        return GroupmeetError::Api(obj);
    }

    // Server may return HTML or plain text on 5xx; cap body to avoid log/memory bloat
    let text = String::from_utf8_lossy(&body[..body.len().min(400)]).into_owned();
    GroupmeetError::Api(ApiErrorObject {
        status_code,
        error: if text.trim().is_empty() {
            format!("http_{}", status.as_u16())
        } else {
            text
        },
        errors: vec![],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_is_special_cased() {
        let err = deserialize_api_error(StatusCode::UNAUTHORIZED, br#"{"error":"Not authenticated"}"#);
        assert!(matches!(err, GroupmeetError::Unauthorized));
        assert!(!err.is_retryable());
        assert_eq!(err.status_code(), Some(401));
    }

    #[test]
    fn json_error_body_is_parsed() {
        let err = deserialize_api_error(
            StatusCode::BAD_REQUEST,
            br#"{"error":"Validation failed","errors":["Invalid email format"]}"#,
        );
        let GroupmeetError::Api(obj) = &err else {
            panic!("expected api error, got {err:?}");
        };
        assert_eq!(obj.status_code, Some(400));
        assert_eq!(obj.errors, vec!["Invalid email format"]);
        assert_eq!(
            err.to_string(),
            "API error: [400] Validation failed: Invalid email format"
        );
        assert!(!err.is_retryable());
    }

    #[test]
    fn plain_text_body_falls_back() {
        let err = deserialize_api_error(StatusCode::BAD_GATEWAY, b"<html>bad gateway</html>");
        let GroupmeetError::Api(obj) = &err else {
            panic!("expected api error");
        };
        assert_eq!(obj.error, "<html>bad gateway</html>");
        assert!(err.is_retryable());
    }

    #[test]
    fn empty_body_gets_status_label() {
        let err = deserialize_api_error(StatusCode::SERVICE_UNAVAILABLE, b"");
        let GroupmeetError::Api(obj) = err else {
            panic!("expected api error");
        };
        assert_eq!(obj.error, "http_503");
    }

    #[test]
    fn long_bodies_are_capped() {
        let body = vec![b'x'; 1000];
        let GroupmeetError::Api(obj) = deserialize_api_error(StatusCode::INTERNAL_SERVER_ERROR, &body)
        else {
            panic!("expected api error");
        };
        assert_eq!(obj.error.len(), 400);
    }
}
