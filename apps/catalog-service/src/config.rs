//! Configuration for the catalog service

use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};
use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    /// `None` keeps products in memory
    pub database: Option<PostgresConfig>,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;

        let database = match std::env::var("DATABASE_URL") {
            Ok(url) if !url.trim().is_empty() => Some(PostgresConfig::from_env()?),
            _ => None,
        };

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            database,
        })
    }

    /// In-memory configuration with default server settings.
    pub fn in_memory() -> Self {
        Self {
            app: app_info!(),
            server: ServerConfig::default(),
            environment: Environment::Development,
            database: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_without_database_url_uses_memory() {
        temp_env::with_vars(
            [("DATABASE_URL", None::<&str>), ("APP_ENV", None::<&str>)],
            || {
                let config = Config::from_env().unwrap();
                assert!(config.database.is_none());
                assert_eq!(config.environment, Environment::Development);
                assert_eq!(config.app.name, "catalog_service");
            },
        );
    }

    #[test]
    fn test_blank_database_url_uses_memory() {
        temp_env::with_var("DATABASE_URL", Some("  "), || {
            assert!(Config::from_env().unwrap().database.is_none());
        });
    }

    #[test]
    fn test_database_url_enables_postgres() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgres://catalog@localhost/catalog")),
                ("DB_MAX_CONNECTIONS", Some("5")),
            ],
            || {
                let config = Config::from_env().unwrap();
                let database = config.database.unwrap();
                assert_eq!(database.url(), "postgres://catalog@localhost/catalog");
                assert_eq!(database.max_connections, 5);
            },
        );
    }

    #[test]
    fn test_invalid_pool_setting_fails() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgres://localhost/catalog")),
                ("DB_MAX_CONNECTIONS", Some("lots")),
            ],
            || {
                assert!(Config::from_env().is_err());
            },
        );
    }
}
