use axum::{
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};

use super::problem::Problem;

/// Fallback for unmatched routes.
pub async fn not_found(method: Method, uri: Uri) -> Response {
    Problem::new(StatusCode::NOT_FOUND)
        .with_detail(format!("No route for {} {}", method, uri.path()))
        .into_response()
}

/// Fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed(method: Method, uri: Uri) -> Response {
    Problem::new(StatusCode::METHOD_NOT_ALLOWED)
        .with_detail(format!("{} is not allowed on {}", method, uri.path()))
        .into_response()
}
