use std::sync::Arc;

use crate::auth::TokenIssuer;
use crate::config::{AuthConfig, Config};
use crate::services::{AuthService, TripService};
use crate::storage::Storage;

/// Application state shared across all request handlers
pub struct AppState {
    /// Server configuration
    pub config: Config,
    /// Backing document store
    pub storage: Arc<dyn Storage>,
    /// Bearer token signer/verifier
    pub token_issuer: TokenIssuer,
    /// Credential issuer (login/registration)
    pub auth: AuthService,
    /// Trip booking and history service
    pub trips: TripService,
}

impl AppState {
    /// Build application state over an already-initialized storage backend
    pub fn new(config: Config, storage: Arc<dyn Storage>) -> Self {
        let token_issuer = TokenIssuer::new(&config.auth);
        let auth = AuthService::new(storage.clone(), token_issuer.clone());
        let trips = TripService::new(storage.clone());

        Self {
            config,
            storage,
            token_issuer,
            auth,
            trips,
        }
    }

    /// Build state for tests: supplied storage, explicit auth config,
    /// defaults elsewhere
    pub fn with_storage(storage: Arc<dyn Storage>, auth_config: AuthConfig) -> Self {
        let config = Config {
            server: crate::config::ServerConfig::default(),
            auth: auth_config,
            database: crate::config::DatabaseConfig::default(),
            logging: crate::config::LoggingConfig::default(),
        };
        Self::new(config, storage)
    }
}
