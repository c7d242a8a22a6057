use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::booking::TripBooking;

/// Summary statistics derived from a traveler's completed bookings.
///
/// Recomputed on every fetch; never persisted. Every input, including the
/// empty list, produces a well-defined result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripStats {
    pub total_trips: usize,
    pub total_spent: f64,
    pub places_visited: usize,
    pub avg_rating: f64,
}

impl TripStats {
    /// Derive the summary from a set of bookings. Order of the input is
    /// irrelevant to the result.
    ///
    /// A missing payment amount counts as 0 (a legitimate "not yet paid"
    /// state). Only bookings that carry a feedback rating participate in
    /// the average; when none do, the average is 0 so the output stays
    /// renderable.
    pub fn from_bookings(bookings: &[TripBooking]) -> Self {
        let total_trips = bookings.len();
        let total_spent = bookings
            .iter()
            .map(|b| b.payment_details.total_amount.unwrap_or(0.0))
            .sum();

        // Case-sensitive exact match; no normalization of destination names.
        let places_visited = bookings
            .iter()
            .map(|b| b.trip_details.destination.as_str())
            .collect::<HashSet<_>>()
            .len();

        let ratings: Vec<f64> = bookings
            .iter()
            .filter_map(|b| b.feedback.as_ref())
            .map(|f| f64::from(f.rating))
            .collect();
        let avg_rating = if ratings.is_empty() {
            0.0
        } else {
            ratings.iter().sum::<f64>() / ratings.len() as f64
        };

        Self {
            total_trips,
            total_spent,
            places_visited,
            avg_rating,
        }
    }
}
