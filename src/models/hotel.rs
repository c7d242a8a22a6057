use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A hotel listed under a destination
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: Uuid,
    pub name: String,
    pub destination: String,
    /// Nightly price in the listing currency
    pub price_per_night: f64,
    /// Listing rating on a 1-5 scale
    pub rating: Option<f64>,
    pub created_at: DateTime<Utc>,
}
