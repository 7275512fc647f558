use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_helpers::{AppError, Problem, Violation};
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(i64),

    #[error("Invalid product: {}", format_violations(.0))]
    Validation(Vec<Violation>),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

fn format_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join(", ")
}

pub type ProductResult<T> = Result<T, ProductError>;

impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(id) => AppError::NotFound(format!("Product {} not found", id)),
            ProductError::Validation(violations) => {
                AppError::BadRequest(format_violations(&violations))
            }
            ProductError::Database(msg) => AppError::InternalServerError(msg),
            ProductError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

/// Missing products answer with a bare 404; validation failures with a
/// constraint-violation problem; everything else goes through [`AppError`].
impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        match self {
            ProductError::NotFound(id) => {
                tracing::info!(product_id = id, "Product not found");
                StatusCode::NOT_FOUND.into_response()
            }
            ProductError::Validation(violations) => {
                tracing::info!(violations = violations.len(), "Product failed validation");
                Problem::constraint_violation(violations).into_response()
            }
            other => AppError::from(other).into_response(),
        }
    }
}

impl From<DbErr> for ProductError {
    fn from(err: DbErr) -> Self {
        ProductError::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;
    use axum_helpers::APPLICATION_PROBLEM_JSON;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn not_found_has_empty_body() {
        let response = ProductError::NotFound(7).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }

    #[test]
    fn validation_is_constraint_problem() {
        let response =
            ProductError::Validation(vec![Violation::new("text", "Text cannot be empty")])
                .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            APPLICATION_PROBLEM_JSON
        );
    }

    #[test]
    fn database_error_is_opaque_500() {
        let err = ProductError::from(DbErr::Custom("relation \"products\" does not exist".into()));
        let problem = AppError::from(err).to_problem();

        assert_eq!(problem.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!problem.detail.unwrap_or_default().contains("products"));
    }
}
