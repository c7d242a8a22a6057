use actix_web::{get, post, web, HttpResponse};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::AuthenticatedUser;
use crate::error::AppError;
use crate::models::Destination;
use crate::server::app_state::AppState;
use crate::utils::response;

/// Destination creation request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDestinationRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub best_season: Option<String>,
}

#[derive(Debug, Serialize)]
struct DestinationList {
    destinations: Vec<Destination>,
}

/// List the destination catalogue
#[get("")]
pub async fn list_destinations(
    state: web::Data<Arc<AppState>>,
) -> Result<HttpResponse, AppError> {
    let destinations = state.storage.list_destinations().await?;
    Ok(HttpResponse::Ok().json(response::success(DestinationList { destinations })))
}

/// Fetch one destination
#[get("/{id}")]
pub async fn get_destination(
    state: web::Data<Arc<AppState>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let destination = state
        .storage
        .get_destination(path.into_inner())
        .await?
        .ok_or_else(|| AppError::not_found("Destination not found"))?;
    Ok(HttpResponse::Ok().json(response::success(destination)))
}

/// Add a destination to the catalogue
#[post("")]
pub async fn create_destination(
    state: web::Data<Arc<AppState>>,
    _user: AuthenticatedUser,
    body: web::Json<CreateDestinationRequest>,
) -> Result<HttpResponse, AppError> {
    if body.name.trim().is_empty() {
        return Err(AppError::validation("Name is required"));
    }

    let body = body.into_inner();
    let destination = Destination {
        id: Uuid::new_v4(),
        name: body.name.trim().to_string(),
        description: body.description,
        location: body.location,
        best_season: body.best_season,
        created_at: Utc::now(),
    };
    state.storage.create_destination(&destination).await?;

    Ok(HttpResponse::Created().json(response::success(destination)))
}
