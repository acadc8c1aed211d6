//! JSON body extraction.
//!
//! `axum::Json` insists on a `Content-Type` header and reports shape errors as
//! 422. Callers of this service send bare bodies, and every decode failure is
//! a 400 with the same message, so handlers take [`JsonPayload`] instead.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::ArithError;

/// Body decoded as JSON regardless of `Content-Type`.
#[derive(Debug)]
pub struct JsonPayload<T>(pub T);

impl<S, T> FromRequest<S> for JsonPayload<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ArithError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::warn!("[DECODE] Failed to read request body: {}", e);
            ArithError::InvalidPayload
        })?;

        serde_json::from_slice(&bytes).map(JsonPayload).map_err(|e| {
            tracing::warn!("[DECODE] Invalid JSON payload: {}", e);
            ArithError::InvalidPayload
        })
    }
}
