//! Catalog Service
//!
//! HTTP service exposing CRUD over the product catalog.
//!
//! ## Architecture
//!
//! ```text
//! Client
//!   ↓ JSON over HTTP (/api/products)
//! domain_products::handlers
//!   ↓
//! CatalogService (domain layer)
//!   ↓
//! PgProductRepository (DATABASE_URL set) | InMemoryProductRepository
//! ```

pub mod api;
pub mod config;
pub mod openapi;
pub mod state;

use axum::Router;
use axum_helpers::server::{create_router, health_router};

pub use config::Config;
pub use state::AppState;

/// Full application router: `/api/*`, docs, `/health` and `/ready`.
pub fn build_router(state: &AppState) -> std::io::Result<Router> {
    let probes = health_router(state.config.app).merge(api::ready_router(state.clone()));
    create_router::<openapi::ApiDoc>(api::routes(state), probes, &state.config.server)
}
