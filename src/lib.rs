// Core module definitions
pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod server;
pub mod services;
pub mod storage;
pub mod utils;

// Unified error handling
pub use error::{AppError, Result};

// Essential re-exports for convenience
pub use server::{app_state::AppState, startup::start_server};

pub use config::{AuthConfig, Config, ServerConfig};

// Storage abstractions
pub use storage::{init_storage, memory::MemoryStorage, Storage, StorageError};

// Model exports
pub use models::{
    Booking, BookingStatus, Destination, Feedback, Hotel, TripBooking, TripStats, User,
    UserProfile,
};

// Authentication core
pub use auth::{AuthenticatedUser, TokenIssuer};

// Version and build information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
