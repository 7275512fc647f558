//! # Axum Helpers
//!
//! Shared building blocks for the catalog HTTP service.
//!
//! ## Modules
//!
//! - **[`server`]**: Router assembly with API docs, health checks, graceful shutdown
//! - **[`http`]**: HTTP middleware (CORS, security headers)
//! - **[`errors`]**: `application/problem+json` error responses with logged error codes
//! - **[`extractors`]**: Numeric path ids and validated JSON bodies
//! - **[`audit`]**: Audit logging for data modifications
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use core_config::{app_info, server::ServerConfig};
//! use std::time::Duration;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let config = ServerConfig::default();
//!     let router = create_router::<ApiDoc>(Router::new(), health_router(app_info!()), &config)?;
//!
//!     create_production_app(router, &config, Duration::from_secs(30), async {}).await
//! }
//! ```

pub mod audit;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks,
};

pub use http::{create_cors_layer, security_headers};

pub use errors::{
    APPLICATION_PROBLEM_JSON, AppError, CONSTRAINT_VIOLATION_TYPE, ErrorCode, Problem, Violation,
};

pub use extractors::{IdPath, ValidatedJson};

pub use audit::{AuditEvent, AuditOutcome, extract_ip_from_headers, extract_user_agent};
