//! Products Domain
//!
//! Catalog of products (`id`, `text`) exposed over HTTP.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, audit events
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← ProductService trait + CatalogService
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← In-memory or PostgreSQL (SeaORM)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Product, ProductRequest
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use axum::Router;
//! use domain_products::{CatalogService, InMemoryProductRepository, handlers};
//!
//! let service = CatalogService::new(InMemoryProductRepository::new());
//! let api: Router = Router::new().nest("/products", handlers::router(service));
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{Product, ProductRequest};
pub use postgres::PgProductRepository;
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::{CatalogService, ProductService};
