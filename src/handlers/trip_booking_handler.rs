use actix_web::{get, post, put, web, HttpResponse};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::AuthenticatedUser;
use crate::error::AppError;
use crate::models::{BookingStatus, Feedback, PaymentDetails, TripBooking, TripDetails, TripStats};
use crate::server::app_state::AppState;
use crate::utils::response;

/// Trip booking creation request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTripBookingRequest {
    pub trip_details: TripDetails,
    pub payment_details: PaymentDetails,
}

/// Booking list query parameters
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub status: Option<String>,
}

/// Feedback request body
#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
}

#[derive(Debug, Serialize)]
struct BookingList {
    bookings: Vec<TripBooking>,
}

#[derive(Debug, Serialize)]
struct HistoryData {
    bookings: Vec<TripBooking>,
    stats: TripStats,
}

/// Book a trip for the authenticated caller
#[post("")]
pub async fn create_trip_booking(
    state: web::Data<Arc<AppState>>,
    user: AuthenticatedUser,
    body: web::Json<CreateTripBookingRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let booking = state
        .trips
        .create(user.0.id, body.trip_details, body.payment_details)
        .await?;

    Ok(HttpResponse::Created().json(response::success(booking)))
}

/// List the caller's bookings, optionally filtered with `?status=`
#[get("")]
pub async fn list_trip_bookings(
    state: web::Data<Arc<AppState>>,
    user: AuthenticatedUser,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, AppError> {
    let status = match query.status.as_deref() {
        Some(raw) => Some(
            raw.parse::<BookingStatus>()
                .map_err(AppError::validation)?,
        ),
        None => None,
    };

    let bookings = state.trips.list(user.0.id, status).await?;
    Ok(HttpResponse::Ok().json(response::success(BookingList { bookings })))
}

/// Completed trips plus derived summary statistics
#[get("/history")]
pub async fn trip_history(
    state: web::Data<Arc<AppState>>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let (bookings, stats) = state.trips.history(user.0.id).await?;
    Ok(HttpResponse::Ok().json(response::success(HistoryData { bookings, stats })))
}

/// Fetch one of the caller's bookings
#[get("/{id}")]
pub async fn get_trip_booking(
    state: web::Data<Arc<AppState>>,
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let booking = state.trips.get(user.0.id, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response::success(booking)))
}

/// Leave feedback on a completed trip
#[put("/{id}/feedback")]
pub async fn leave_feedback(
    state: web::Data<Arc<AppState>>,
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    body: web::Json<FeedbackRequest>,
) -> Result<HttpResponse, AppError> {
    let feedback = Feedback {
        rating: body.rating,
        comment: body.comment.clone(),
    };
    let booking = state
        .trips
        .leave_feedback(user.0.id, path.into_inner(), feedback)
        .await?;

    Ok(HttpResponse::Ok().json(response::success(booking)))
}
