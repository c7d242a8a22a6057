use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A destination listed in the catalogue
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Region or district the destination belongs to
    pub location: String,
    /// Best-season hint shown on listing cards
    pub best_season: Option<String>,
    pub created_at: DateTime<Utc>,
}
