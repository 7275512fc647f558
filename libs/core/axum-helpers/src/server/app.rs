use super::shutdown::{ShutdownCoordinator, coordinated_shutdown};
use crate::errors::handlers::{method_not_allowed, not_found};
use crate::http::{cors::create_cors_layer, security::security_headers};
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::io;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;

/// Creates the application router with documentation and cross-cutting middleware.
///
/// - OpenAPI document at `/api-docs/openapi.json`, served by Swagger UI
///   (`/swagger-ui`), ReDoc (`/redoc`), RapiDoc (`/rapidoc`) and Scalar (`/scalar`)
/// - `apis` nested under `/api`, `probes` (health/readiness) at the root
/// - problem+json fallbacks for unknown routes and unsupported methods
/// - tracing, security headers and response compression
/// - CORS, only when `server_config.cors_allowed_origins` is non-empty
///
/// Every route, probes included, gets the same middleware stack.
///
/// # Errors
/// Returns `InvalidInput` if a configured CORS origin is not a valid header value.
///
/// ```ignore
/// let api_routes = Router::new().nest("/products", products::router(service));
/// let probes = health_router(app_info!()).merge(ready_router(state.clone()));
/// let router = create_router::<ApiDoc>(api_routes, probes, &config.server)?;
/// ```
pub fn create_router<T>(
    apis: Router,
    probes: Router,
    server_config: &ServerConfig,
) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    use utoipa_rapidoc::RapiDoc;
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};
    use utoipa_swagger_ui::SwaggerUi;

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .nest("/api", apis)
        .merge(probes)
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers));

    let origins = server_config.cors_allowed_origins.as_slice();
    let router = if origins.is_empty() {
        info!("CORS disabled: no allowed origins configured");
        router
    } else {
        let cors_layer = create_cors_layer(origins).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
            )
        })?;
        info!("CORS configured with allowed origins: {}", origins.join(","));
        router.layer(cors_layer)
    };

    Ok(router.layer(CompressionLayer::new()))
}

/// Serves `router` until SIGINT/SIGTERM, then runs `cleanup` within `shutdown_timeout`.
///
/// In-flight requests are drained before this returns.
///
/// ```ignore
/// let cleanup = async move {
///     db.close().await.ok();
/// };
/// create_production_app(router, &config.server, Duration::from_secs(30), cleanup).await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let (coordinator, mut shutdown_rx) = ShutdownCoordinator::new();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let cleanup_handle = tokio::spawn(async move {
        // Err only if every sender is gone, which also means shutdown.
        let _ = shutdown_rx.recv().await;

        info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
        match tokio::time::timeout(shutdown_timeout, cleanup).await {
            Ok(()) => info!("Cleanup completed successfully"),
            Err(_) => tracing::warn!(
                "Cleanup exceeded timeout of {:?}, forcing shutdown",
                shutdown_timeout
            ),
        }
    });

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(coordinated_shutdown(coordinator.clone()))
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    // Covers the server exiting on its own, without a signal.
    coordinator.shutdown();
    cleanup_handle.await.ok();

    serve_result
}
