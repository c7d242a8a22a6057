pub mod memory;

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Booking, BookingStatus, Destination, Feedback, Hotel, TripBooking, User};

/// Storage Result type
pub type Result<T> = std::result::Result<T, StorageError>;

/// Error types for storage operations
#[derive(Debug, Error, Clone)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Uniqueness constraint violation. The store is the single source of
    /// truth for email uniqueness; callers surface this as a conflict
    /// instead of pre-checking.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl StorageError {
    /// Get error category for metrics and logging
    pub fn category(&self) -> &'static str {
        match self {
            StorageError::Database(_) => "database",
            StorageError::Connection(_) => "connection",
            StorageError::NotFound(_) => "not_found",
            StorageError::Conflict(_) => "conflict",
            StorageError::InvalidData(_) => "validation",
            StorageError::Internal(_) => "internal",
        }
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(msg) => AppError::NotFound(msg),
            StorageError::Conflict(_) => AppError::DuplicateEmail,
            StorageError::InvalidData(msg) => AppError::Validation(msg),
            _ => AppError::Storage(err.to_string()),
        }
    }
}

/// Boundary to the backing document store. The store's schema and
/// persistence guarantees live behind this trait; handlers and services
/// only ever see these operations.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Health check with connection validation
    async fn health_check(&self) -> Result<bool>;

    // User related methods
    /// Insert a new user. Must fail with [`StorageError::Conflict`] when the
    /// email is already registered; the check and the insert are a single
    /// atomic step.
    async fn create_user(&self, user: &User) -> Result<()>;
    async fn get_user_by_id(&self, id: Uuid) -> Result<Option<User>>;
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    async fn update_user(&self, user: &User) -> Result<()>;
    async fn delete_user(&self, id: Uuid) -> Result<()>;

    // Trip booking related methods
    async fn create_trip_booking(&self, booking: &TripBooking) -> Result<()>;
    async fn get_trip_booking(&self, id: Uuid) -> Result<Option<TripBooking>>;
    async fn list_trip_bookings(
        &self,
        user_id: Uuid,
        status: Option<BookingStatus>,
    ) -> Result<Vec<TripBooking>>;
    async fn set_trip_feedback(&self, id: Uuid, feedback: Feedback) -> Result<()>;

    // Generic booking related methods
    async fn create_booking(&self, booking: &Booking) -> Result<()>;
    async fn list_bookings(&self, user_id: Uuid) -> Result<Vec<Booking>>;

    // Catalogue methods
    async fn create_destination(&self, destination: &Destination) -> Result<()>;
    async fn get_destination(&self, id: Uuid) -> Result<Option<Destination>>;
    async fn list_destinations(&self) -> Result<Vec<Destination>>;
    async fn create_hotel(&self, hotel: &Hotel) -> Result<()>;
    async fn get_hotel(&self, id: Uuid) -> Result<Option<Hotel>>;
    async fn list_hotels(&self) -> Result<Vec<Hotel>>;
}

/// Initialize the storage layer.
///
/// The document database itself is an external collaborator; the in-memory
/// backend is the only one shipped with this crate and doubles as the test
/// double.
pub async fn init_storage() -> std::result::Result<Arc<dyn Storage>, AppError> {
    info!("Initializing storage layer");

    let storage = memory::MemoryStorage::new();
    storage
        .health_check()
        .await
        .map_err(|e| AppError::storage(format!("Storage health check failed: {}", e)))?;

    info!("Storage layer initialized successfully");
    Ok(Arc::new(storage))
}
