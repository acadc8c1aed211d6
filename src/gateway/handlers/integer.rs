//! Integer-strict endpoints
//!
//! Operands are `number1`/`number2`; both must be whole numbers that fit
//! `i64`. Results are `i64`.

use crate::arith::{BinaryOp, WholeNumbers};
use crate::error::ArithError;

use super::super::extract::JsonPayload;
use super::super::types::{ArithResponse, IntegerOperands};
use super::{evaluate, evaluate_sum};

type IntResult = Result<ArithResponse<i64>, ArithError>;

/// Add two whole numbers
#[utoipa::path(
    post,
    path = "/add",
    request_body = IntegerOperands,
    responses(
        (status = 200, description = "number1 + number2", body = ArithResponse<i64>, content_type = "application/json"),
        (status = 400, description = "Invalid JSON payload, non-integral operand, or result out of range", body = ArithResponse<i64>),
        (status = 405, description = "Method not allowed", body = ArithResponse<i64>)
    ),
    tag = "Integer"
)]
pub async fn add(JsonPayload(operands): JsonPayload<IntegerOperands>) -> IntResult {
    evaluate::<WholeNumbers>(BinaryOp::Add, operands)
}

/// Subtract number2 from number1
#[utoipa::path(
    post,
    path = "/subtract",
    request_body = IntegerOperands,
    responses(
        (status = 200, description = "number1 - number2", body = ArithResponse<i64>, content_type = "application/json"),
        (status = 400, description = "Invalid JSON payload, non-integral operand, or result out of range", body = ArithResponse<i64>),
        (status = 405, description = "Method not allowed", body = ArithResponse<i64>)
    ),
    tag = "Integer"
)]
pub async fn subtract(JsonPayload(operands): JsonPayload<IntegerOperands>) -> IntResult {
    evaluate::<WholeNumbers>(BinaryOp::Subtract, operands)
}

/// Multiply two whole numbers
#[utoipa::path(
    post,
    path = "/multiply",
    request_body = IntegerOperands,
    responses(
        (status = 200, description = "number1 * number2", body = ArithResponse<i64>, content_type = "application/json"),
        (status = 400, description = "Invalid JSON payload, non-integral operand, or result out of range", body = ArithResponse<i64>),
        (status = 405, description = "Method not allowed", body = ArithResponse<i64>)
    ),
    tag = "Integer"
)]
pub async fn multiply(JsonPayload(operands): JsonPayload<IntegerOperands>) -> IntResult {
    evaluate::<WholeNumbers>(BinaryOp::Multiply, operands)
}

/// Integer division, truncated toward zero
///
/// - `number2 == 0`: 400 "Division by zero is not allowed"
#[utoipa::path(
    post,
    path = "/divide",
    request_body = IntegerOperands,
    responses(
        (status = 200, description = "number1 / number2", body = ArithResponse<i64>, content_type = "application/json"),
        (status = 400, description = "Invalid JSON payload, non-integral operand, or division by zero", body = ArithResponse<i64>),
        (status = 405, description = "Method not allowed", body = ArithResponse<i64>)
    ),
    tag = "Integer"
)]
pub async fn divide(JsonPayload(operands): JsonPayload<IntegerOperands>) -> IntResult {
    evaluate::<WholeNumbers>(BinaryOp::Divide, operands)
}

/// Sum a list of whole numbers
///
/// Empty list sums to 0. A fractional element is a decode failure.
#[utoipa::path(
    post,
    path = "/sum",
    request_body = Vec<i64>,
    responses(
        (status = 200, description = "Sum of all elements", body = ArithResponse<i64>, content_type = "application/json"),
        (status = 400, description = "Invalid JSON payload or result out of range", body = ArithResponse<i64>),
        (status = 405, description = "Method not allowed", body = ArithResponse<i64>)
    ),
    tag = "Integer"
)]
pub async fn sum(JsonPayload(values): JsonPayload<Vec<i64>>) -> IntResult {
    evaluate_sum::<WholeNumbers>(&values)
}
