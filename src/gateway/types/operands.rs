//! Request bodies.
//!
//! Missing fields decode as zero and unknown fields are ignored, so `{}` is
//! a valid operand pair.

use serde::Deserialize;
use utoipa::ToSchema;

/// Integer-mode operand pair.
///
/// Fields are decoded as general JSON numbers so that a fractional operand
/// is reported as a whole-number violation rather than a decode failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, ToSchema)]
#[serde(default)]
pub struct IntegerOperands {
    /// First operand (whole number)
    #[schema(example = 6)]
    pub number1: f64,
    /// Second operand (whole number)
    #[schema(example = 3)]
    pub number2: f64,
}

/// Float-mode operand pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, ToSchema)]
#[serde(default)]
pub struct FloatOperands {
    #[schema(example = 5)]
    pub a: f64,
    #[schema(example = 2)]
    pub b: f64,
}
