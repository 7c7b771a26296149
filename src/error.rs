//! Error types for the KuCoin client library.

use std::time::Duration;

use thiserror::Error;

/// The main error type for all KuCoin client operations.
#[derive(Error, Debug)]
pub enum KucoinError {
    /// Authentication is required but the API key or secret is absent.
    ///
    /// Raised before any network activity.
    #[error("Missing credentials: API key and secret required for private endpoints")]
    CredentialsMissing,

    /// DNS, connection, TLS or body read failure.
    #[error("HTTP transport failed: {0}")]
    Transport(#[from] reqwest_middleware::Error),

    /// The call did not complete in time.
    ///
    /// Holds the client's configured timeout, or the time spent when a
    /// custom `http_client` timed out first.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// The server answered with a status other than 200.
    #[error("HTTP {status}: {}", String::from_utf8_lossy(.body))]
    Http {
        /// HTTP status code
        status: u16,
        /// Raw response body, unmodified
        body: Vec<u8>,
    },

    /// KuCoin reported a failure inside a 200 response envelope
    #[error("KuCoin API error: {0}")]
    Api(ApiError),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// A required request argument was missing or malformed
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Invalid response from the API
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for KucoinError {
    fn from(err: reqwest::Error) -> Self {
        KucoinError::Transport(reqwest_middleware::Error::Reqwest(err))
    }
}

impl KucoinError {
    /// HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            KucoinError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this is a timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, KucoinError::Timeout(_))
    }

    /// Try to decode the exchange's error envelope from a non-200 body.
    ///
    /// KuCoin sometimes embeds `{"code": ..., "msg": ...}` or
    /// `{"error": {"message": ...}}` in error responses.
    pub fn embedded_api_error(&self) -> Option<ApiError> {
        let KucoinError::Http { body, .. } = self else {
            return None;
        };
        let value: serde_json::Value = serde_json::from_slice(body).ok()?;
        ApiError::from_json(&value)
    }
}

/// KuCoin API error codes and messages.
///
/// These are errors returned by the KuCoin API itself in the response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// The error code from KuCoin (e.g., "UNAUTH")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl ApiError {
    /// Create a new API error from code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Extract an API error from an arbitrary JSON body.
    ///
    /// Recognises an `error` object or string, and the `success: false`
    /// envelope with `code`/`msg`.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        if let Some(error) = value.get("error").filter(|e| !e.is_null()) {
            return Some(Self::from_error_value(error));
        }

        let code = value.get("code").and_then(|c| c.as_str());
        let msg = value.get("msg").and_then(|m| m.as_str());
        let failed = value.get("success").and_then(|s| s.as_bool()) == Some(false);
        if failed || code.is_some_and(|c| c != error_codes::OK) {
            return Some(Self::new(
                code.unwrap_or(error_codes::ERROR),
                msg.unwrap_or_default(),
            ));
        }
        None
    }

    /// Interpret the value of an `error` field.
    pub fn from_error_value(error: &serde_json::Value) -> Self {
        match error {
            serde_json::Value::Object(obj) => {
                let message = obj
                    .get("message")
                    .or_else(|| obj.get("msg"))
                    .and_then(|m| m.as_str())
                    .unwrap_or_default();
                let code = obj
                    .get("code")
                    .and_then(|c| c.as_str())
                    .unwrap_or(error_codes::ERROR);
                Self::new(code, message)
            }
            serde_json::Value::String(message) => Self::new(error_codes::ERROR, message.clone()),
            other => Self::new(error_codes::ERROR, other.to_string()),
        }
    }

    /// Check if the request was rejected for authentication reasons.
    pub fn is_unauthorized(&self) -> bool {
        self.code == error_codes::UNAUTH
    }

    /// Check if the signature was rejected.
    pub fn is_invalid_signature(&self) -> bool {
        self.is_unauthorized() && self.message.to_ascii_lowercase().contains("signature")
    }
}

/// Known KuCoin envelope codes.
pub mod error_codes {
    /// Successful call.
    pub const OK: &str = "OK";
    /// Generic failure.
    pub const ERROR: &str = "ERROR";
    /// Authentication failed (bad key, nonce or signature).
    pub const UNAUTH: &str = "UNAUTH";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let error = ApiError::new("UNAUTH", "Signature verification failed");
        assert_eq!(error.to_string(), "UNAUTH: Signature verification failed");
        assert!(error.is_invalid_signature());
    }

    #[test]
    fn test_api_error_from_error_object() {
        let body = serde_json::json!({ "error": { "message": "Invalid symbol" } });
        let error = ApiError::from_json(&body).unwrap();
        assert_eq!(error.code, "ERROR");
        assert_eq!(error.message, "Invalid symbol");
    }

    #[test]
    fn test_api_error_from_failed_envelope() {
        let body = serde_json::json!({ "success": false, "code": "UNAUTH", "msg": "Invalid nonce" });
        let error = ApiError::from_json(&body).unwrap();
        assert!(error.is_unauthorized());
        assert!(!error.is_invalid_signature());
    }

    #[test]
    fn test_api_error_absent_on_success() {
        let body = serde_json::json!({ "success": true, "code": "OK", "data": [] });
        assert!(ApiError::from_json(&body).is_none());
    }

    #[test]
    fn test_embedded_api_error_from_http_body() {
        let err = KucoinError::Http {
            status: 429,
            body: br#"{"error":"rate limited"}"#.to_vec(),
        };
        assert_eq!(err.status(), Some(429));
        let api = err.embedded_api_error().unwrap();
        assert_eq!(api.message, "rate limited");
        assert_eq!(err.to_string(), r#"HTTP 429: {"error":"rate limited"}"#);
    }

    #[test]
    fn test_embedded_api_error_ignores_non_json() {
        let err = KucoinError::Http {
            status: 502,
            body: b"<html>Bad Gateway</html>".to_vec(),
        };
        assert!(err.embedded_api_error().is_none());
        assert!(!err.is_timeout());
    }
}
