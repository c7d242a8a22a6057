use actix_web::{post, web, HttpResponse};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

use crate::error::AppError;
use crate::server::app_state::AppState;
use crate::utils::response::AuthResponse;

/// Registration request body
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Login request body
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Register a new user and log them in
#[post("/register")]
pub async fn register(
    state: web::Data<Arc<AppState>>,
    body: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    debug!("Registration request for {}", body.email);

    let issued = state
        .auth
        .register(&body.name, &body.email, &body.password)
        .await?;

    Ok(HttpResponse::Created().json(AuthResponse {
        token: issued.token,
        user: issued.user,
    }))
}

/// Exchange credentials for a bearer token
#[post("/login")]
pub async fn login(
    state: web::Data<Arc<AppState>>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    debug!("Login request for {}", body.email);

    let issued = state.auth.login(&body.email, &body.password).await?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        token: issued.token,
        user: issued.user,
    }))
}
