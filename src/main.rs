//! Phone Contacts - Main entry point
//!
//! Starts the contacts REST API on the configured address.

use anyhow::Result;
use phone_contacts::{build_router, run_server, AppState, Config, SqliteStore};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let store = if config.is_in_memory() {
        SqliteStore::open_in_memory()?
    } else {
        SqliteStore::open(&config.database_path)?
    };
    info!(database = %config.database_path, "Database opened");

    let state = AppState::from_store(&store, config.upload_dir.clone());
    info!(upload_dir = %config.upload_dir.display(), "Image directory configured");

    let router = build_router(state, config.max_upload_bytes);
    run_server(router, config.bind_addr).await?;

    info!("Phone Contacts shutdown complete");
    Ok(())
}
