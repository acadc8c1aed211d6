//! HTTP handlers
//!
//! - [`integer`]: integer-strict endpoints
//! - [`float`]: float-permissive endpoints
//! - [`health`]: liveness probe
//!
//! Both arithmetic modules are thin wrappers around [`evaluate`] and
//! [`evaluate_sum`], instantiated with their [`NumericMode`].

pub mod float;
pub mod health;
pub mod integer;

pub use health::{HealthResponse, health_check};

use crate::arith::{BinaryOp, NumericMode};
use crate::error::ArithError;

use super::types::ArithResponse;

/// Validate operands and apply `op`.
pub fn evaluate<M: NumericMode>(
    op: BinaryOp,
    operands: M::Operands,
) -> Result<ArithResponse<M::Value>, ArithError> {
    M::operands(operands)
        .and_then(|(lhs, rhs)| M::apply(op, lhs, rhs))
        .map(ArithResponse::success)
        .inspect_err(|e| {
            tracing::debug!("[{}] {} rejected: {}", M::VARIANT, op.name(), e.name());
        })
}

/// Fold a number list with addition.
pub fn evaluate_sum<M: NumericMode>(
    values: &[M::Value],
) -> Result<ArithResponse<M::Value>, ArithError> {
    M::sum(values)
        .map(ArithResponse::success)
        .inspect_err(|e| {
            tracing::debug!("[{}] sum of {} values rejected: {}", M::VARIANT, values.len(), e.name());
        })
}

/// Known path, wrong method.
pub async fn method_not_allowed() -> ArithError {
    ArithError::MethodNotAllowed
}

/// Unknown path.
pub async fn not_found() -> ArithError {
    ArithError::NotFound
}
