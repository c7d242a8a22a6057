use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{web, FromRequest, HttpRequest};
use futures::future::LocalBoxFuture;
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::UserProfile;
use crate::server::app_state::AppState;

/// Resolved identity of the caller, extracted before a protected handler
/// runs. Handlers that take this argument are gatekept: the request never
/// reaches them unless verification succeeded.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub UserProfile);

/// Internal verification outcome. Kept discriminated for logging and tests;
/// the HTTP boundary collapses every variant into one 401 response so a
/// caller cannot probe which check failed.
#[derive(Debug)]
pub(crate) enum RejectReason {
    /// No `Bearer <token>` credential on the request
    MissingToken,
    /// Signature or expiry check failed
    BadToken(String),
    /// Token was sound but its subject no longer exists
    UnknownUser(Uuid),
    /// Identity store could not answer; treated as a rejection rather than
    /// a server fault
    StoreUnavailable(String),
}

impl RejectReason {
    fn detail(&self) -> String {
        match self {
            RejectReason::MissingToken => "no token presented".to_string(),
            RejectReason::BadToken(msg) => msg.clone(),
            RejectReason::UnknownUser(id) => format!("subject {} no longer exists", id),
            RejectReason::StoreUnavailable(msg) => msg.clone(),
        }
    }
}

/// Pull the token out of the `Authorization: Bearer <token>` header
pub(crate) fn bearer_token(req: &HttpRequest) -> Option<String> {
    let header = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}

/// Verify a presented token against the signing secret and the identity
/// store. Read-only and idempotent: concurrent verifications of the same
/// token are independent.
pub(crate) async fn verify_request_token(
    state: &AppState,
    token: Option<&str>,
) -> Result<UserProfile, RejectReason> {
    let token = token.ok_or(RejectReason::MissingToken)?;

    let claims = state
        .token_issuer
        .verify(token)
        .map_err(|e| RejectReason::BadToken(e.to_string()))?;

    // Token validity is contingent on the subject still existing, not just
    // on cryptographic soundness.
    let user = state
        .storage
        .get_user_by_id(claims.sub)
        .await
        .map_err(|e| RejectReason::StoreUnavailable(e.to_string()))?
        .ok_or(RejectReason::UnknownUser(claims.sub))?;

    Ok(user.profile())
}

impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token = bearer_token(req);
        let state = req.app_data::<web::Data<Arc<AppState>>>().cloned();
        let path = req.path().to_string();

        Box::pin(async move {
            let state = match state {
                Some(state) => state,
                None => {
                    warn!("AppState missing from request context");
                    return Err(AppError::unauthenticated("state unavailable").into());
                }
            };

            match verify_request_token(&state, token.as_deref()).await {
                Ok(profile) => Ok(AuthenticatedUser(profile)),
                Err(reason) => {
                    debug!(path = %path, reason = ?reason, "Rejected request");
                    Err(AppError::unauthenticated(reason.detail()).into())
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn well_formed_header_yields_token() {
        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Bearer abc.def.ghi"))
            .to_http_request();
        assert_eq!(bearer_token(&req).as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn absent_header_yields_none() {
        let req = TestRequest::default().to_http_request();
        assert!(bearer_token(&req).is_none());
    }

    #[test]
    fn prefix_without_token_yields_none() {
        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Bearer "))
            .to_http_request();
        assert!(bearer_token(&req).is_none());
    }

    #[test]
    fn non_bearer_scheme_yields_none() {
        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Basic dXNlcjpwYXNz"))
            .to_http_request();
        assert!(bearer_token(&req).is_none());
    }
}
