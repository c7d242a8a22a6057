pub mod auth_service;
pub mod trip_service;

pub use auth_service::AuthService;
pub use trip_service::TripService;
