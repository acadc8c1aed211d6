//! Numeric modes and the four binary operations.
//!
//! The gateway runs in one of two modes:
//!
//! - [`WholeNumbers`]: operands arrive as JSON numbers, must be integral and
//!   fit `i64`, and all arithmetic is checked `i64` arithmetic.
//! - [`Floating`]: plain `f64` arithmetic, results must stay finite.
//!
//! Handlers are written once against [`NumericMode`] and instantiated per
//! mode.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ArithError;
use crate::gateway::types::{FloatOperands, IntegerOperands};

/// 2^63: first f64 above `i64::MAX`. `-2^63` is exactly `i64::MIN`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Which deployable flavor of the service is running.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum, utoipa::ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Integer-strict: `number1`/`number2`, whole numbers only.
    Integer,
    /// Float-permissive: `a`/`b`, any finite number.
    Float,
}

impl Variant {
    /// Port used when the config does not set one.
    pub fn default_port(self) -> u16 {
        match self {
            Self::Integer => 3000,
            Self::Float => 8080,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Float => "float",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Binary operation selected by the endpoint path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }
}

/// Arithmetic over one numeric representation.
pub trait NumericMode {
    /// Value reported in the `result` field.
    type Value: Copy + fmt::Debug + Serialize + DeserializeOwned + Send + 'static;
    /// Request body for binary operations.
    type Operands: DeserializeOwned + Send + 'static;

    const VARIANT: Variant;

    /// Validate a decoded operand pair.
    fn operands(operands: Self::Operands) -> Result<(Self::Value, Self::Value), ArithError>;

    /// Apply `op` to already validated operands.
    fn apply(op: BinaryOp, lhs: Self::Value, rhs: Self::Value) -> Result<Self::Value, ArithError>;

    /// Fold with addition, seeded at zero.
    fn sum(values: &[Self::Value]) -> Result<Self::Value, ArithError>;
}

/// Integer-strict mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct WholeNumbers;

/// Float-permissive mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct Floating;

/// Convert a JSON number to `i64` if it is integral and in range.
pub fn whole_number(value: f64) -> Result<i64, ArithError> {
    if value.trunc() != value || !(-I64_BOUND..I64_BOUND).contains(&value) {
        return Err(ArithError::InvalidOperand);
    }
    Ok(value as i64)
}

impl NumericMode for WholeNumbers {
    type Value = i64;
    type Operands = IntegerOperands;

    const VARIANT: Variant = Variant::Integer;

    fn operands(operands: IntegerOperands) -> Result<(i64, i64), ArithError> {
        Ok((
            whole_number(operands.number1)?,
            whole_number(operands.number2)?,
        ))
    }

    fn apply(op: BinaryOp, lhs: i64, rhs: i64) -> Result<i64, ArithError> {
        let result = match op {
            BinaryOp::Add => lhs.checked_add(rhs),
            BinaryOp::Subtract => lhs.checked_sub(rhs),
            BinaryOp::Multiply => lhs.checked_mul(rhs),
            BinaryOp::Divide => {
                if rhs == 0 {
                    return Err(ArithError::DivisionByZero);
                }
                // Truncates toward zero; only i64::MIN / -1 overflows
                lhs.checked_div(rhs)
            }
        };
        result.ok_or(ArithError::Overflow)
    }

    fn sum(values: &[i64]) -> Result<i64, ArithError> {
        values
            .iter()
            .try_fold(0_i64, |acc, v| acc.checked_add(*v))
            .ok_or(ArithError::Overflow)
    }
}

impl NumericMode for Floating {
    type Value = f64;
    type Operands = FloatOperands;

    const VARIANT: Variant = Variant::Float;

    fn operands(operands: FloatOperands) -> Result<(f64, f64), ArithError> {
        Ok((operands.a, operands.b))
    }

    fn apply(op: BinaryOp, lhs: f64, rhs: f64) -> Result<f64, ArithError> {
        let result = match op {
            BinaryOp::Add => lhs + rhs,
            BinaryOp::Subtract => lhs - rhs,
            BinaryOp::Multiply => lhs * rhs,
            BinaryOp::Divide => {
                // -0.0 == 0.0
                if rhs == 0.0 {
                    return Err(ArithError::DivisionByZero);
                }
                lhs / rhs
            }
        };
        finite(result)
    }

    fn sum(values: &[f64]) -> Result<f64, ArithError> {
        finite(values.iter().fold(0.0, |acc, v| acc + v))
    }
}

fn finite(value: f64) -> Result<f64, ArithError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ArithError::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_number_accepts_integral_values() {
        assert_eq!(whole_number(4.0), Ok(4));
        assert_eq!(whole_number(-7.0), Ok(-7));
        assert_eq!(whole_number(-0.0), Ok(0));
        assert_eq!(whole_number(-I64_BOUND), Ok(i64::MIN));
    }

    #[test]
    fn test_whole_number_rejects_fractions_and_out_of_range() {
        assert_eq!(whole_number(2.5), Err(ArithError::InvalidOperand));
        assert_eq!(whole_number(-0.1), Err(ArithError::InvalidOperand));
        assert_eq!(whole_number(I64_BOUND), Err(ArithError::InvalidOperand));
        assert_eq!(whole_number(1e300), Err(ArithError::InvalidOperand));
    }

    #[test]
    fn test_integer_ops() {
        assert_eq!(WholeNumbers::apply(BinaryOp::Add, 2, 3), Ok(5));
        assert_eq!(WholeNumbers::apply(BinaryOp::Subtract, 2, 3), Ok(-1));
        assert_eq!(WholeNumbers::apply(BinaryOp::Multiply, -4, 3), Ok(-12));
        assert_eq!(WholeNumbers::apply(BinaryOp::Divide, 7, 2), Ok(3));
        assert_eq!(WholeNumbers::apply(BinaryOp::Divide, -7, 2), Ok(-3));
    }

    #[test]
    fn test_integer_divide_by_zero() {
        assert_eq!(
            WholeNumbers::apply(BinaryOp::Divide, 10, 0),
            Err(ArithError::DivisionByZero)
        );
        assert_eq!(
            WholeNumbers::apply(BinaryOp::Divide, 0, 0),
            Err(ArithError::DivisionByZero)
        );
    }

    #[test]
    fn test_integer_overflow() {
        assert_eq!(
            WholeNumbers::apply(BinaryOp::Add, i64::MAX, 1),
            Err(ArithError::Overflow)
        );
        assert_eq!(
            WholeNumbers::apply(BinaryOp::Divide, i64::MIN, -1),
            Err(ArithError::Overflow)
        );
        assert_eq!(
            WholeNumbers::sum(&[i64::MAX, 1]),
            Err(ArithError::Overflow)
        );
    }

    #[test]
    fn test_integer_sum() {
        assert_eq!(WholeNumbers::sum(&[1, 2, 3]), Ok(6));
        assert_eq!(WholeNumbers::sum(&[]), Ok(0));
        assert_eq!(WholeNumbers::sum(&[5, -5]), Ok(0));
    }

    #[test]
    fn test_integer_operands_validation() {
        let ok = IntegerOperands {
            number1: 10.0,
            number2: -3.0,
        };
        assert_eq!(WholeNumbers::operands(ok), Ok((10, -3)));

        let bad = IntegerOperands {
            number1: 2.5,
            number2: 1.0,
        };
        assert_eq!(WholeNumbers::operands(bad), Err(ArithError::InvalidOperand));
    }

    #[test]
    fn test_float_ops() {
        assert_eq!(Floating::apply(BinaryOp::Divide, 5.0, 2.0), Ok(2.5));
        assert_eq!(Floating::apply(BinaryOp::Add, 0.5, 0.25), Ok(0.75));
        assert_eq!(Floating::apply(BinaryOp::Multiply, 1.5, -2.0), Ok(-3.0));
    }

    #[test]
    fn test_float_divide_by_zero() {
        assert_eq!(
            Floating::apply(BinaryOp::Divide, 1.0, 0.0),
            Err(ArithError::DivisionByZero)
        );
        assert_eq!(
            Floating::apply(BinaryOp::Divide, 1.0, -0.0),
            Err(ArithError::DivisionByZero)
        );
    }

    #[test]
    fn test_float_non_finite_is_overflow() {
        assert_eq!(
            Floating::apply(BinaryOp::Multiply, f64::MAX, 2.0),
            Err(ArithError::Overflow)
        );
        assert_eq!(Floating::sum(&[f64::MAX, f64::MAX]), Err(ArithError::Overflow));
    }

    #[test]
    fn test_float_sum() {
        assert_eq!(Floating::sum(&[]), Ok(0.0));
        assert_eq!(Floating::sum(&[1.5, 2.5]), Ok(4.0));
    }

    #[test]
    fn test_variant_defaults() {
        assert_eq!(Variant::Integer.default_port(), 3000);
        assert_eq!(Variant::Float.default_port(), 8080);
        assert_eq!(Variant::Float.to_string(), "float");
    }
}
