use actix_web::{get, post, web, HttpResponse};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::AuthenticatedUser;
use crate::error::AppError;
use crate::models::{Booking, BookingStatus};
use crate::server::app_state::AppState;
use crate::utils::response;

/// Generic booking creation request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub item: String,
    #[serde(default)]
    pub total_amount: Option<f64>,
}

#[derive(Debug, Serialize)]
struct GenericBookingList {
    bookings: Vec<Booking>,
}

/// List the caller's bookings
#[get("")]
pub async fn list_bookings(
    state: web::Data<Arc<AppState>>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let bookings = state.storage.list_bookings(user.0.id).await?;
    Ok(HttpResponse::Ok().json(response::success(GenericBookingList { bookings })))
}

/// Create a booking for the caller
#[post("")]
pub async fn create_booking(
    state: web::Data<Arc<AppState>>,
    user: AuthenticatedUser,
    body: web::Json<CreateBookingRequest>,
) -> Result<HttpResponse, AppError> {
    if body.item.trim().is_empty() {
        return Err(AppError::validation("Booking item is required"));
    }

    let body = body.into_inner();
    let booking = Booking {
        id: Uuid::new_v4(),
        user_id: user.0.id,
        item: body.item.trim().to_string(),
        total_amount: body.total_amount,
        status: BookingStatus::Pending,
        created_at: Utc::now(),
    };
    state.storage.create_booking(&booking).await?;

    Ok(HttpResponse::Created().json(response::success(booking)))
}
