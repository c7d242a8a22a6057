pub mod booking;
pub mod destination;
pub mod history;
pub mod hotel;
pub mod user;

pub use booking::{Booking, BookingStatus, Feedback, PaymentDetails, TripBooking, TripDetails};
pub use destination::Destination;
pub use history::TripStats;
pub use hotel::Hotel;
pub use user::{User, UserProfile};
