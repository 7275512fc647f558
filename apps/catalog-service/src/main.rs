use axum_helpers::server::create_production_app;
use catalog_service::{AppState, Config, build_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres::{connect_from_config_with_retry, run_migrations};
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let db = match config.database.clone() {
        Some(db_config) => {
            info!("Connecting to PostgreSQL");
            let db = connect_from_config_with_retry(db_config, None).await?;
            run_migrations::<migration::Migrator>(&db, config.app.name).await?;
            Some(db)
        }
        None => {
            info!("DATABASE_URL not set, storing products in memory");
            None
        }
    };

    let state = AppState {
        config: config.clone(),
        db,
    };

    let router = build_router(&state)?;

    info!(
        "Starting {} v{} on port {}",
        config.app.name, config.app.version, config.server.port
    );

    create_production_app(
        router,
        &config.server,
        Duration::from_secs(30),
        async move {
            if let Some(db) = state.db {
                info!("Shutting down: closing database connections");
                if let Err(e) = db.close().await {
                    tracing::warn!("Error closing database: {}", e);
                }
            }
        },
    )
    .await?;

    info!("Catalog service shutdown complete");
    Ok(())
}
