pub mod codes;
pub mod handlers;
pub mod problem;
pub mod responses;

pub use codes::ErrorCode;
pub use problem::{
    ABOUT_BLANK, APPLICATION_PROBLEM_JSON, CONSTRAINT_VIOLATION_TITLE, CONSTRAINT_VIOLATION_TYPE,
    Problem, Violation,
};

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use thiserror::Error;
use validator::ValidationErrors;

/// Application error type rendered as an `application/problem+json` response.
///
/// Every variant logs with an `error_code` field before rendering. Server-side
/// variants never leak their source error into the response body.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON parsing error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl AppError {
    /// Build the problem body for this error, logging it on the way.
    pub fn to_problem(&self) -> Problem {
        match self {
            AppError::SerdeJson(e) => {
                tracing::error!(
                    error_code = ErrorCode::SerdeJsonError.code(),
                    "JSON parsing error: {:?}",
                    e
                );
                server_problem(StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::SerdeJsonError)
            }
            AppError::Database(e) => map_db_error(e),
            AppError::Io(e) => {
                tracing::error!(error_code = ErrorCode::IoError.code(), "I/O error: {:?}", e);
                server_problem(StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::IoError)
            }
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(
                    error_code = ErrorCode::JsonExtraction.code(),
                    "JSON extraction error: {:?}",
                    e
                );
                Problem::new(e.status()).with_detail(e.body_text())
            }
            AppError::ValidationError(e) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    "Validation error: {:?}",
                    e
                );
                Problem::from(e)
            }
            AppError::InvalidId(raw) => {
                tracing::warn!(
                    error_code = ErrorCode::InvalidId.code(),
                    "Invalid identifier: {}",
                    raw
                );
                Problem::new(StatusCode::BAD_REQUEST)
                    .with_detail(ErrorCode::InvalidId.default_message())
            }
            AppError::BadRequest(msg) => {
                tracing::info!(error_code = ErrorCode::BadRequest.code(), "Bad request: {}", msg);
                Problem::new(StatusCode::BAD_REQUEST).with_detail(msg.clone())
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = ErrorCode::NotFound.code(), "Not found: {}", msg);
                Problem::new(StatusCode::NOT_FOUND).with_detail(msg.clone())
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(
                    error_code = ErrorCode::InternalError.code(),
                    "Internal server error: {}",
                    msg
                );
                server_problem(StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::InternalError)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.to_problem().into_response()
    }
}

fn server_problem(status: StatusCode, code: ErrorCode) -> Problem {
    Problem::new(status).with_detail(code.default_message())
}

/// Maps a sea-orm error onto a problem, logging at a level matching its severity.
fn map_db_error(error: &DbErr) -> Problem {
    match error {
        DbErr::RecordNotFound(what) => {
            tracing::info!(
                error_code = ErrorCode::DatabaseNotFound.code(),
                "Database record not found: {}",
                what
            );
            Problem::new(StatusCode::NOT_FOUND)
                .with_detail(ErrorCode::DatabaseNotFound.default_message())
        }
        DbErr::ConnectionAcquire(e) => {
            tracing::error!(
                error_code = ErrorCode::DatabaseUnavailable.code(),
                "Database connection could not be acquired: {:?}",
                e
            );
            server_problem(StatusCode::SERVICE_UNAVAILABLE, ErrorCode::DatabaseUnavailable)
        }
        DbErr::Conn(e) => {
            tracing::error!(
                error_code = ErrorCode::DatabaseUnavailable.code(),
                "Database connection error: {:?}",
                e
            );
            server_problem(StatusCode::SERVICE_UNAVAILABLE, ErrorCode::DatabaseUnavailable)
        }
        other => {
            tracing::error!(
                error_code = ErrorCode::DatabaseError.code(),
                "Database error: {:?}",
                other
            );
            server_problem(StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::DatabaseError)
        }
    }
}
