//! Products API routes

use axum::Router;
use domain_products::{CatalogService, InMemoryProductRepository, PgProductRepository, handlers};

use crate::state::AppState;

/// Products router over PostgreSQL when connected, memory otherwise
pub fn router(state: &AppState) -> Router {
    match &state.db {
        Some(db) => {
            let repository = PgProductRepository::new(db.clone());
            handlers::router(CatalogService::new(repository))
        }
        None => handlers::router(CatalogService::new(InMemoryProductRepository::new())),
    }
}
