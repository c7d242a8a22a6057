use serde::Serialize;

use crate::models::UserProfile;

/// Envelope used by listing endpoints: `{"success": true, "data": {...}}`
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

/// Wrap a payload in the success envelope
pub fn success<T: Serialize>(data: T) -> ApiResponse<T> {
    ApiResponse {
        success: true,
        data,
    }
}

/// Body returned by login and registration
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserProfile,
}
