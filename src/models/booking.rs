use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a trip booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl std::str::FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(BookingStatus::Pending),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "completed" => Ok(BookingStatus::Completed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            _ => Err(format!("Invalid booking status: {}", s)),
        }
    }
}

/// Core trip facts entered at booking time
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDetails {
    /// Destination name, matched case-sensitively when aggregating
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub travelers: u32,
}

/// Payment summary for a booking
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetails {
    /// Absent while the booking is not yet paid
    pub total_amount: Option<f64>,
}

/// Post-trip feedback left by the traveler
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    /// Rating on a 1-5 scale
    pub rating: u8,
    pub comment: Option<String>,
}

/// A booked trip, the unit the history aggregation consumes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripBooking {
    pub id: Uuid,
    pub user_id: Uuid,
    pub trip_details: TripDetails,
    pub payment_details: PaymentDetails,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<Feedback>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// Generic booking record (hotel or package reservations)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub user_id: Uuid,
    /// What was booked: a hotel or destination reference
    pub item: String,
    pub total_amount: Option<f64>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}
