//! Arithmetic Gateway
//!
//! Basic arithmetic exposed as JSON-over-HTTP endpoints.
//!
//! # Modules
//!
//! - [`arith`] - Numeric modes (integer / float) and operations
//! - [`error`] - Request errors and their HTTP mapping
//! - [`gateway`] - Axum router, handlers, envelope, OpenAPI docs
//! - [`config`] - YAML configuration
//! - [`logging`] - tracing subscriber setup

pub mod arith;
pub mod config;
pub mod error;
pub mod gateway;
pub mod logging;

// Convenient re-exports at crate root
pub use arith::{BinaryOp, Floating, NumericMode, Variant, WholeNumbers};
pub use config::{AppConfig, ConfigError, GatewayConfig};
pub use error::ArithError;
pub use gateway::router;
