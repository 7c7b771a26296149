//! Raw HTTP responses and the KuCoin JSON envelope.

use serde::Deserialize;
use serde::de::{DeserializeOwned, IgnoredAny};

use crate::error::{ApiError, KucoinError, error_codes};

/// Status and body of a completed 200 call, as returned by
/// [`KucoinRestClient::send`](crate::rest::KucoinRestClient::send).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    status: u16,
    body: Vec<u8>,
}

impl RawResponse {
    pub(crate) fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Response body, unmodified.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Take ownership of the body.
    pub fn into_body(self) -> Vec<u8> {
        self.body
    }

    /// Decode the envelope and return its `data` payload.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, KucoinError> {
        self.envelope::<T>()?.into_result()
    }

    /// Decode the envelope, checking only the success indicators.
    pub fn acknowledge(&self) -> Result<(), KucoinError> {
        self.envelope::<IgnoredAny>()?.check().map(|_| ())
    }

    /// Decode the full envelope without interpreting it.
    pub fn envelope<T: DeserializeOwned>(&self) -> Result<ApiResponse<T>, KucoinError> {
        serde_json::from_slice(&self.body).map_err(|e| {
            KucoinError::InvalidResponse(format!(
                "Failed to parse response: {}. Body: {}",
                e,
                String::from_utf8_lossy(&self.body)
            ))
        })
    }
}

/// KuCoin response envelope.
///
/// Successful calls look like
/// `{"success": true, "code": "OK", "msg": "...", "timestamp": 1, "data": ...}`.
/// Failures set `success` to false or carry an `error` object instead.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    /// Application-level success flag.
    pub success: Option<bool>,
    /// Status code such as `"OK"` or `"UNAUTH"`.
    pub code: Option<String>,
    /// Human-readable status message.
    pub msg: Option<String>,
    /// Server time in milliseconds.
    pub timestamp: Option<i64>,
    /// Operation-specific payload.
    pub data: Option<T>,
    /// Embedded error description.
    pub error: Option<serde_json::Value>,
}

impl<T> ApiResponse<T> {
    /// The application-level failure described by this envelope, if any.
    pub fn api_error(&self) -> Option<ApiError> {
        if let Some(error) = self.error.as_ref().filter(|e| !e.is_null()) {
            return Some(ApiError::from_error_value(error));
        }
        if self.success == Some(false) {
            return Some(ApiError::new(
                self.code.as_deref().unwrap_or(error_codes::ERROR),
                self.msg.as_deref().unwrap_or_default(),
            ));
        }
        None
    }

    fn check(self) -> Result<Self, KucoinError> {
        match self.api_error() {
            Some(error) => Err(KucoinError::Api(error)),
            None => Ok(self),
        }
    }

    /// Return `data`, or the classified failure.
    pub fn into_result(self) -> Result<T, KucoinError> {
        self.check()?
            .data
            .ok_or_else(|| KucoinError::InvalidResponse("Response missing 'data' field".to_string()))
    }
}
