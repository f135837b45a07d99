//! # Data Provider
//!
//! Serves `/api/hello`, `/api/user` and `/api/products` with artificial delays,
//! and in production mode the prebuilt front-end as well.
//!
//! ```bash
//! PORT=3001 APP_MODE=development RUST_LOG=info cargo run
//! ```

use tabbed_demo::config::ProviderConfig;
use tabbed_demo::lifecycle::setup_tracing;
use tabbed_demo::provider::ProviderServer;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), String> {
    dotenvy::dotenv().ok();
    setup_tracing();

    let config = ProviderConfig::from_env().map_err(|e| e.to_string())?;
    info!(port = config.port, mode = %config.mode, "Starting data provider");

    let server = ProviderServer::spawn(config).map_err(|e| e.to_string())?;

    tokio::signal::ctrl_c().await.map_err(|e| e.to_string())?;
    info!("Interrupt received");

    server.shutdown().await.map_err(|e| e.to_string())?;
    Ok(())
}
