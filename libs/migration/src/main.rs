//! Catalog schema migrations CLI (`migration up`, `migration down`, `migration status`).
//!
//! Reads `DATABASE_URL` from the environment.

use migration::Migrator;
use sea_orm_migration::cli;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
