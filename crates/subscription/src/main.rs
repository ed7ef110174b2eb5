use anyhow::{Context, Result};
use dotenv::dotenv;
use shared::{
    config::{Config, ConnectionManager},
    utils::Logger,
};
use std::time::Duration;
use subscription::{handler::AppRouter, state::AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let _logger = Logger::new("subscription", config.is_dev);

    let pool = ConnectionManager::new_pool(
        &config.database_url,
        config.database_max_connections,
        config.run_migrations,
    )
    .await
    .context("Failed to connect to database")?;

    let state = AppState::new(pool.clone());

    info!("🚀 Subscription service starting on port {}", config.port);

    AppRouter::serve(
        config.port,
        state,
        Duration::from_secs(config.request_timeout_secs),
    )
    .await
    .context("Failed to start server")?;

    info!("Shutting down, closing database pool...");
    pool.close().await;

    Ok(())
}
