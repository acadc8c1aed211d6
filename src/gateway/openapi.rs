//! OpenAPI / Swagger UI Documentation
//!
//! One document per variant, since both serve the same paths with different
//! bodies. The running variant's document is mounted at:
//!
//! - Swagger UI: `http://localhost:3000/docs`
//! - OpenAPI JSON: `http://localhost:3000/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::arith::Variant;
use crate::gateway::handlers::{HealthResponse, float, integer};
use crate::gateway::types::{FloatOperands, IntegerOperands};

/// Integer-strict API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Arithmetic Gateway API (integer)",
        version = "1.0.0",
        description = "Whole-number arithmetic over JSON. Operands are `number1`/`number2`."
    ),
    servers(
        (url = "http://localhost:3000", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health::health_check,
        integer::add,
        integer::subtract,
        integer::multiply,
        integer::divide,
        integer::sum,
    ),
    components(schemas(HealthResponse, IntegerOperands)),
    tags(
        (name = "Integer", description = "Whole-number arithmetic"),
        (name = "System", description = "Health checks")
    )
)]
pub struct IntegerApiDoc;

/// Float-permissive API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Arithmetic Gateway API (float)",
        version = "1.0.0",
        description = "Floating-point arithmetic over JSON. Operands are `a`/`b`."
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health::health_check,
        float::add,
        float::subtract,
        float::multiply,
        float::divide,
        float::sum,
    ),
    components(schemas(HealthResponse, FloatOperands)),
    tags(
        (name = "Float", description = "Floating-point arithmetic"),
        (name = "System", description = "Health checks")
    )
)]
pub struct FloatApiDoc;

/// Document for the given variant.
pub fn api_doc(variant: Variant) -> utoipa::openapi::OpenApi {
    match variant {
        Variant::Integer => IntegerApiDoc::openapi(),
        Variant::Float => FloatApiDoc::openapi(),
    }
}
