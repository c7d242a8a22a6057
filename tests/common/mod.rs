#![allow(dead_code)]

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use uuid::Uuid;
use wander_hub_server::config::AuthConfig;
use wander_hub_server::models::{
    BookingStatus, Feedback, PaymentDetails, TripBooking, TripDetails,
};
use wander_hub_server::{AppState, MemoryStorage};

pub const TEST_SECRET: &str = "integration-test-secret";

/// Fresh application state over an empty in-memory store
pub fn app_state() -> Arc<AppState> {
    let storage = Arc::new(MemoryStorage::new());
    Arc::new(AppState::with_storage(
        storage,
        AuthConfig::with_secret(TEST_SECRET, 24),
    ))
}

/// Build a trip booking record for seeding the store directly
pub fn trip_booking(
    user_id: Uuid,
    destination: &str,
    amount: Option<f64>,
    status: BookingStatus,
    rating: Option<u8>,
) -> TripBooking {
    TripBooking {
        id: Uuid::new_v4(),
        user_id,
        trip_details: TripDetails {
            destination: destination.to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
            travelers: 2,
        },
        payment_details: PaymentDetails {
            total_amount: amount,
        },
        feedback: rating.map(|rating| Feedback {
            rating,
            comment: None,
        }),
        status,
        created_at: Utc::now(),
    }
}
