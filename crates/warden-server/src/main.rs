//! WARDEN Server — application entry point.
//!
//! Owns the store lifecycle: structured logging, configuration from
//! the environment, database connection, and schema migrations. The
//! request-handling surface that consumes the authorization layer
//! lives outside this repository.

use tracing_subscriber::EnvFilter;
use warden_db::{DbConfig, DbManager};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("warden=info".parse().unwrap()),
        )
        .json()
        .init();

    tracing::info!("Starting WARDEN server...");

    let config = DbConfig::from_env();
    let manager = match DbManager::connect(&config).await {
        Ok(manager) => manager,
        Err(e) => {
            tracing::error!(error = %e, "Error connecting to database");
            std::process::exit(1);
        }
    };

    if let Err(e) = warden_db::run_migrations(manager.client()).await {
        tracing::error!(error = %e, "Schema migration failed");
        std::process::exit(1);
    }

    tracing::info!("Connected to database, schema up to date.");
}
