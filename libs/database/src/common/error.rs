/// Failures from connecting to, migrating or probing the database.
///
/// Query errors are not wrapped here; repositories handle `DbErr` themselves.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Every connection attempt failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    #[error("Migration error: {0}")]
    MigrationError(String),
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;
