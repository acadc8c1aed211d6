//! Float-permissive endpoints (`a`/`b`, `f64` results)

use crate::arith::{BinaryOp, Floating};
use crate::error::ArithError;

use super::super::extract::JsonPayload;
use super::super::types::{ArithResponse, FloatOperands};
use super::{evaluate, evaluate_sum};

type FloatResult = Result<ArithResponse<f64>, ArithError>;

#[utoipa::path(
    post,
    path = "/add",
    request_body = FloatOperands,
    responses(
        (status = 200, description = "a + b", body = ArithResponse<f64>, content_type = "application/json"),
        (status = 400, description = "Invalid JSON payload or non-finite result", body = ArithResponse<f64>),
        (status = 405, description = "Method not allowed", body = ArithResponse<f64>)
    ),
    tag = "Float"
)]
pub async fn add(JsonPayload(operands): JsonPayload<FloatOperands>) -> FloatResult {
    evaluate::<Floating>(BinaryOp::Add, operands)
}

#[utoipa::path(
    post,
    path = "/subtract",
    request_body = FloatOperands,
    responses(
        (status = 200, description = "a - b", body = ArithResponse<f64>, content_type = "application/json"),
        (status = 400, description = "Invalid JSON payload or non-finite result", body = ArithResponse<f64>),
        (status = 405, description = "Method not allowed", body = ArithResponse<f64>)
    ),
    tag = "Float"
)]
pub async fn subtract(JsonPayload(operands): JsonPayload<FloatOperands>) -> FloatResult {
    evaluate::<Floating>(BinaryOp::Subtract, operands)
}

#[utoipa::path(
    post,
    path = "/multiply",
    request_body = FloatOperands,
    responses(
        (status = 200, description = "a * b", body = ArithResponse<f64>, content_type = "application/json"),
        (status = 400, description = "Invalid JSON payload or non-finite result", body = ArithResponse<f64>),
        (status = 405, description = "Method not allowed", body = ArithResponse<f64>)
    ),
    tag = "Float"
)]
pub async fn multiply(JsonPayload(operands): JsonPayload<FloatOperands>) -> FloatResult {
    evaluate::<Floating>(BinaryOp::Multiply, operands)
}

/// `b == 0` (either sign) is rejected before dividing.
#[utoipa::path(
    post,
    path = "/divide",
    request_body = FloatOperands,
    responses(
        (status = 200, description = "a / b", body = ArithResponse<f64>, content_type = "application/json"),
        (status = 400, description = "Invalid JSON payload, division by zero, or non-finite result", body = ArithResponse<f64>),
        (status = 405, description = "Method not allowed", body = ArithResponse<f64>)
    ),
    tag = "Float"
)]
pub async fn divide(JsonPayload(operands): JsonPayload<FloatOperands>) -> FloatResult {
    evaluate::<Floating>(BinaryOp::Divide, operands)
}

#[utoipa::path(
    post,
    path = "/sum",
    request_body = Vec<f64>,
    responses(
        (status = 200, description = "Sum of all elements (0 for an empty list)", body = ArithResponse<f64>, content_type = "application/json"),
        (status = 400, description = "Invalid JSON payload or non-finite result", body = ArithResponse<f64>),
        (status = 405, description = "Method not allowed", body = ArithResponse<f64>)
    ),
    tag = "Float"
)]
pub async fn sum(JsonPayload(values): JsonPayload<Vec<f64>>) -> FloatResult {
    evaluate_sum::<Floating>(&values)
}
