//! Application state management

use database::postgres::DatabaseConnection;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// Present when the PostgreSQL backend is configured
    pub db: Option<DatabaseConnection>,
}
