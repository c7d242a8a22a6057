use actix_web::{get, put, web, HttpResponse};
use serde::Deserialize;
use std::sync::Arc;

use crate::auth::AuthenticatedUser;
use crate::error::AppError;
use crate::server::app_state::AppState;

/// Profile update request body
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: String,
}

/// Return the authenticated caller's profile
#[get("/me")]
pub async fn get_me(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(user.0))
}

/// Update the authenticated caller's display name
#[put("/me")]
pub async fn update_me(
    state: web::Data<Arc<AppState>>,
    user: AuthenticatedUser,
    body: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, AppError> {
    if body.name.trim().is_empty() {
        return Err(AppError::validation("Name is required"));
    }

    let mut record = state
        .storage
        .get_user_by_id(user.0.id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;
    record.name = body.name.trim().to_string();
    state.storage.update_user(&record).await?;

    Ok(HttpResponse::Ok().json(record.profile()))
}
