//! Response envelope
//!
//! Every endpoint answers with the same JSON object:
//! - success: `{"result": <number>}`
//! - failure: `{"error": "<message>"}`
//!
//! Exactly one field is present. A zero result is still written out.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::ArithError;

/// Body written when the envelope itself cannot be serialized.
pub const ENCODING_FAILURE_BODY: &str = r#"{"error":"Failed to encode response"}"#;

const APPLICATION_JSON: &str = "application/json";

/// Result/error envelope shared by all endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct ArithResponse<T> {
    /// Computed value (absent on error)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = 6)]
    pub result: Option<T>,
    /// Error message (absent on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Division by zero is not allowed")]
    pub error: Option<String>,
}

impl<T> ArithResponse<T> {
    /// Create success response
    pub fn success(result: T) -> Self {
        Self {
            result: Some(result),
            error: None,
        }
    }
}

impl ArithResponse<()> {
    /// Create error response
    pub fn error(err: ArithError) -> Self {
        Self {
            result: None,
            error: Some(err.to_string()),
        }
    }
}

impl<T: Serialize> ArithResponse<T> {
    /// Serialize with an explicit status.
    ///
    /// Falls back to a fixed 500 body if serialization fails.
    pub fn into_response_with(self, status: StatusCode) -> Response {
        match serde_json::to_vec(&self) {
            Ok(body) => (status, [(header::CONTENT_TYPE, APPLICATION_JSON)], body).into_response(),
            Err(e) => {
                tracing::error!("[ENCODE] Failed to encode response: {}", e);
                encoding_failure()
            }
        }
    }
}

impl<T: Serialize> IntoResponse for ArithResponse<T> {
    fn into_response(self) -> Response {
        self.into_response_with(StatusCode::OK)
    }
}

/// Last-resort 500 response, built without going through serde.
pub fn encoding_failure() -> Response {
    (
        ArithError::EncodingFailure.http_status(),
        [(header::CONTENT_TYPE, APPLICATION_JSON)],
        ENCODING_FAILURE_BODY,
    )
        .into_response()
}
