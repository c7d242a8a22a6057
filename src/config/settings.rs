use serde::{Deserialize, Serialize};
use std::env;
use std::net::SocketAddr;

use crate::error::{AppError, Result};

/// Main configuration container for the application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration settings
    pub server: ServerConfig,
    /// Authentication configuration settings
    pub auth: AuthConfig,
    /// Document store configuration settings
    pub database: DatabaseConfig,
    /// Logging configuration settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from environment variables or use defaults.
    ///
    /// Fails when a required value (the signing secret) is absent; there is
    /// no insecure fallback.
    pub fn load() -> Result<Self> {
        Ok(Self {
            server: ServerConfig::load(),
            auth: AuthConfig::load()?,
            database: DatabaseConfig::load(),
            logging: LoggingConfig::load(),
        })
    }
}

/// Server configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to listen on
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Number of worker threads
    pub worker_threads: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3001,
            worker_threads: 4,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables or use defaults
    pub fn load() -> Self {
        let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3001);
        let worker_threads = env::var("WORKER_THREADS")
            .ok()
            .and_then(|t| t.parse::<usize>().ok())
            .unwrap_or(4);

        Self {
            host,
            port,
            worker_threads,
        }
    }

    /// Get socket address from host and port
    pub fn address(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse::<SocketAddr>()
            .map_err(|e| AppError::config(format!("Invalid listen address: {}", e)))
    }
}

/// Authentication configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret used to sign and verify bearer tokens
    pub jwt_secret: String,
    /// Bearer token lifetime in hours
    pub token_expiry_hours: i64,
}

impl AuthConfig {
    /// Load authentication configuration from environment variables.
    ///
    /// `JWT_SECRET` is mandatory: starting without one would silently issue
    /// forgeable tokens, so its absence is a startup-time fatal error.
    pub fn load() -> Result<Self> {
        let jwt_secret = env::var("JWT_SECRET")
            .map_err(|_| AppError::config("Required environment variable JWT_SECRET is not set"))?;
        if jwt_secret.trim().is_empty() {
            return Err(AppError::config("JWT_SECRET must not be empty"));
        }
        let token_expiry_hours = env::var("AUTH_TOKEN_EXPIRY_HOURS")
            .ok()
            .and_then(|h| h.parse::<i64>().ok())
            .unwrap_or(24);

        Ok(Self {
            jwt_secret,
            token_expiry_hours,
        })
    }

    /// Build an auth config directly; used by tests to run issuer and
    /// verifier with distinct secrets.
    pub fn with_secret(secret: impl Into<String>, token_expiry_hours: i64) -> Self {
        Self {
            jwt_secret: secret.into(),
            token_expiry_hours,
        }
    }
}

/// Document store configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Connection URL of the backing document store
    pub url: String,
    /// Database name
    pub name: String,
    /// Connection timeout in seconds
    pub connection_timeout: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "mongodb://localhost:27017".to_string(),
            name: "wander-hub".to_string(),
            connection_timeout: 30,
        }
    }
}

impl DatabaseConfig {
    /// Load database configuration from environment variables or use defaults
    pub fn load() -> Self {
        let url = env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let name = env::var("DB_NAME").unwrap_or_else(|_| "wander-hub".to_string());
        let connection_timeout = env::var("DATABASE_CONNECTION_TIMEOUT")
            .ok()
            .and_then(|t| t.parse::<u64>().ok())
            .unwrap_or(30);

        Self {
            url,
            name,
            connection_timeout,
        }
    }
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Load logging configuration from environment variables or use defaults
    pub fn load() -> Self {
        let level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        Self { level }
    }
}
