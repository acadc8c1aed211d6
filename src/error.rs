//! Request-level error types.
//!
//! Every failure a handler can hit maps to exactly one HTTP status and one
//! fixed message. The message is what ends up in the `error` field of the
//! response envelope, so the `Display` strings below are part of the wire
//! contract.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::gateway::types::ArithResponse;

/// Failures surfaced to HTTP callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ArithError {
    /// Endpoint exists but was called with something other than POST.
    #[error("Method not allowed")]
    MethodNotAllowed,
    /// No route matches the request path.
    #[error("Not found")]
    NotFound,
    /// Body could not be read or decoded into the expected shape.
    #[error("Invalid JSON payload")]
    InvalidPayload,
    /// Integer mode only: an operand has a fractional part or does not fit i64.
    #[error("Operands must be whole numbers")]
    InvalidOperand,
    /// Divisor is exactly zero.
    #[error("Division by zero is not allowed")]
    DivisionByZero,
    /// Result does not fit the numeric mode (i64 overflow, non-finite f64).
    #[error("Result is out of range")]
    Overflow,
    /// Response body could not be serialized.
    #[error("Failed to encode response")]
    EncodingFailure,
}

impl ArithError {
    /// Stable name used in log lines.
    pub fn name(self) -> &'static str {
        match self {
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::NotFound => "NOT_FOUND",
            Self::InvalidPayload => "INVALID_PAYLOAD",
            Self::InvalidOperand => "INVALID_OPERAND",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::Overflow => "OVERFLOW",
            Self::EncodingFailure => "ENCODING_FAILURE",
        }
    }

    /// HTTP status for this error.
    pub fn http_status(self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::EncodingFailure => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InvalidPayload
            | Self::InvalidOperand
            | Self::DivisionByZero
            | Self::Overflow => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ArithError {
    fn into_response(self) -> Response {
        ArithResponse::<()>::error(self).into_response_with(self.http_status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_wire_strings() {
        assert_eq!(ArithError::MethodNotAllowed.to_string(), "Method not allowed");
        assert_eq!(ArithError::InvalidPayload.to_string(), "Invalid JSON payload");
        assert_eq!(
            ArithError::InvalidOperand.to_string(),
            "Operands must be whole numbers"
        );
        assert_eq!(
            ArithError::DivisionByZero.to_string(),
            "Division by zero is not allowed"
        );
    }

    #[test]
    fn test_http_status() {
        assert_eq!(
            ArithError::MethodNotAllowed.http_status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            ArithError::DivisionByZero.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ArithError::NotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ArithError::EncodingFailure.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_names() {
        assert_eq!(ArithError::InvalidOperand.name(), "INVALID_OPERAND");
        assert_eq!(ArithError::Overflow.name(), "OVERFLOW");
    }
}
