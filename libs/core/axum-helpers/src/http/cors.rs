use axum::http::{HeaderValue, Method, header, header::InvalidHeaderValue};
use std::time::Duration;
use tower_http::cors::CorsLayer;

/// Creates a CORS layer for the given origins.
///
/// - GET, POST, PUT, DELETE, OPTIONS
/// - Content-Type and Accept request headers
/// - 1 hour max age
///
/// Fails if any origin is not a valid header value.
pub fn create_cors_layer<S: AsRef<str>>(origins: &[S]) -> Result<CorsLayer, InvalidHeaderValue> {
    let origins = origins
        .iter()
        .map(|origin| HeaderValue::from_str(origin.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600)))
}
