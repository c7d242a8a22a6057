use actix_web::{get, post, web, HttpResponse};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::AuthenticatedUser;
use crate::error::AppError;
use crate::models::Hotel;
use crate::server::app_state::AppState;
use crate::utils::response;

/// Hotel creation request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHotelRequest {
    pub name: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub price_per_night: f64,
    #[serde(default)]
    pub rating: Option<f64>,
}

#[derive(Debug, Serialize)]
struct HotelList {
    hotels: Vec<Hotel>,
}

/// List hotels
#[get("")]
pub async fn list_hotels(state: web::Data<Arc<AppState>>) -> Result<HttpResponse, AppError> {
    let hotels = state.storage.list_hotels().await?;
    Ok(HttpResponse::Ok().json(response::success(HotelList { hotels })))
}

/// Fetch one hotel
#[get("/{id}")]
pub async fn get_hotel(
    state: web::Data<Arc<AppState>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let hotel = state
        .storage
        .get_hotel(path.into_inner())
        .await?
        .ok_or_else(|| AppError::not_found("Hotel not found"))?;
    Ok(HttpResponse::Ok().json(response::success(hotel)))
}

/// Add a hotel listing
#[post("")]
pub async fn create_hotel(
    state: web::Data<Arc<AppState>>,
    _user: AuthenticatedUser,
    body: web::Json<CreateHotelRequest>,
) -> Result<HttpResponse, AppError> {
    if body.name.trim().is_empty() {
        return Err(AppError::validation("Name is required"));
    }

    let body = body.into_inner();
    let hotel = Hotel {
        id: Uuid::new_v4(),
        name: body.name.trim().to_string(),
        destination: body.destination,
        price_per_night: body.price_per_night,
        rating: body.rating,
        created_at: Utc::now(),
    };
    state.storage.create_hotel(&hotel).await?;

    Ok(HttpResponse::Created().json(response::success(hotel)))
}
