use actix_web::{web, App, HttpServer};
use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::server::app_state::AppState;
use crate::server::http::configure_routes;
use crate::storage::Storage;

/// Start the HTTP server and run until shutdown
pub async fn start_server(config: Config, storage: Arc<dyn Storage>) -> Result<()> {
    let address = config.server.address()?;
    let workers = config.server.worker_threads;
    let app_state = Arc::new(AppState::new(config, storage));

    info!("Starting wander-hub-server on {}", address);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .configure(configure_routes)
    })
    .workers(workers)
    .bind(address)
    .map_err(|e| AppError::config(format!("Failed to bind {}: {}", address, e)))?
    .run()
    .await
    .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    info!("Server shutdown completed");
    Ok(())
}
