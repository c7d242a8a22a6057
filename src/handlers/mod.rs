// Handler modules, one per API resource
pub mod auth_handler;
pub mod booking_handler;
pub mod destination_handler;
pub mod health;
pub mod hotel_handler;
pub mod trip_booking_handler;
pub mod user_handler;
