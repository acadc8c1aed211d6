//! Gateway types module
//!
//! ## Input Types
//! - [`IntegerOperands`]: `{"number1", "number2"}` for integer mode
//! - [`FloatOperands`]: `{"a", "b"}` for float mode
//!
//! ## Output Types
//! - [`ArithResponse<T>`]: result/error envelope

pub mod operands;
pub mod response;

pub use operands::{FloatOperands, IntegerOperands};
pub use response::{ArithResponse, ENCODING_FAILURE_BODY, encoding_failure};
