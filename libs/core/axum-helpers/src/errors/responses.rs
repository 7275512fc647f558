//! Reusable OpenAPI response types for problem bodies.

use super::problem::Problem;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Constraint Violation",
    content_type = "application/problem+json",
    example = json!({
        "type": "https://zalando.github.io/problem/constraint-violation",
        "title": "Constraint Violation",
        "status": 400,
        "violations": [{ "field": "text", "message": "Text cannot be empty" }]
    })
)]
pub struct ConstraintViolationResponse(pub Problem);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Malformed body or identifier",
    content_type = "application/problem+json",
    example = json!({
        "type": "about:blank",
        "title": "Bad Request",
        "status": 400,
        "detail": "Invalid identifier format"
    })
)]
pub struct BadRequestResponse(pub Problem);

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/problem+json",
    example = json!({
        "type": "about:blank",
        "title": "Internal Server Error",
        "status": 500,
        "detail": "An internal server error occurred"
    })
)]
pub struct InternalServerErrorResponse(pub Problem);
