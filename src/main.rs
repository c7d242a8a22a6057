use dotenv::dotenv;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wander_hub_server::{
    config::{Config, LoggingConfig},
    error::{AppError, Result},
    server::start_server,
    storage::init_storage,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Build configuration; a missing signing secret aborts startup here.
    let config = Config::load()?;

    // Initialize structured logging
    init_tracing(&config.logging)?;

    // Initialize the storage layer
    let storage = init_storage().await?;

    info!("Starting wander-hub-server v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded: listen={}:{}, workers={}, token_expiry={}h",
        config.server.host,
        config.server.port,
        config.server.worker_threads,
        config.auth.token_expiry_hours
    );

    match start_server(config, storage).await {
        Ok(_) => {
            info!("Server shutdown completed successfully");
            Ok(())
        }
        Err(e) => {
            error!("Server failed: {}", e);
            Err(e)
        }
    }
}

/// Initialize structured logging. `RUST_LOG` wins when set; otherwise the
/// filter comes from `LOG_LEVEL` via the loaded configuration.
fn init_tracing(config: &LoggingConfig) -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.level)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .compact(),
        )
        .try_init()
        .map_err(|e| AppError::internal(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracing_initializes_from_config() {
        let config = LoggingConfig {
            level: "debug".to_string(),
        };
        assert!(init_tracing(&config).is_ok());
    }
}
