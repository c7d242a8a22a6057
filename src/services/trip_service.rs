use chrono::Utc;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{
    BookingStatus, Feedback, PaymentDetails, TripBooking, TripDetails, TripStats,
};
use crate::storage::Storage;
use crate::utils::validator;

/// Trip booking service: owner-scoped booking access and travel history
pub struct TripService {
    /// Booking store backend
    storage: Arc<dyn Storage>,
}

impl TripService {
    /// Create a new trip service over the given booking store
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Create a booking owned by the given user
    pub async fn create(
        &self,
        user_id: Uuid,
        trip_details: TripDetails,
        payment_details: PaymentDetails,
    ) -> Result<TripBooking> {
        if trip_details.destination.trim().is_empty() {
            return Err(AppError::validation("Destination is required"));
        }
        if trip_details.end_date < trip_details.start_date {
            return Err(AppError::validation("Trip end date precedes start date"));
        }

        let booking = TripBooking {
            id: Uuid::new_v4(),
            user_id,
            trip_details,
            payment_details,
            feedback: None,
            status: BookingStatus::Pending,
            created_at: Utc::now(),
        };
        self.storage.create_trip_booking(&booking).await?;

        debug!("Created trip booking {} for user {}", booking.id, user_id);
        Ok(booking)
    }

    /// List the user's bookings, optionally filtered by status
    pub async fn list(
        &self,
        user_id: Uuid,
        status: Option<BookingStatus>,
    ) -> Result<Vec<TripBooking>> {
        Ok(self.storage.list_trip_bookings(user_id, status).await?)
    }

    /// Fetch one booking. A booking owned by someone else reads as absent
    /// so ids cannot be probed for existence.
    pub async fn get(&self, user_id: Uuid, booking_id: Uuid) -> Result<TripBooking> {
        let booking = self
            .storage
            .get_trip_booking(booking_id)
            .await?
            .filter(|b| b.user_id == user_id)
            .ok_or_else(|| AppError::not_found("Trip booking not found"))?;
        Ok(booking)
    }

    /// Attach post-trip feedback to a completed booking
    pub async fn leave_feedback(
        &self,
        user_id: Uuid,
        booking_id: Uuid,
        feedback: Feedback,
    ) -> Result<TripBooking> {
        validator::validate_rating(feedback.rating)?;

        let booking = self.get(user_id, booking_id).await?;
        if booking.status != BookingStatus::Completed {
            return Err(AppError::validation(
                "Feedback can only be left on completed trips",
            ));
        }

        self.storage.set_trip_feedback(booking.id, feedback).await?;
        self.get(user_id, booking_id).await
    }

    /// Completed bookings plus the derived summary statistics.
    ///
    /// The statistics are recomputed on every call, never cached.
    pub async fn history(&self, user_id: Uuid) -> Result<(Vec<TripBooking>, TripStats)> {
        let bookings = self
            .storage
            .list_trip_bookings(user_id, Some(BookingStatus::Completed))
            .await?;
        let stats = TripStats::from_bookings(&bookings);
        Ok((bookings, stats))
    }
}
