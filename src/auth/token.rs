use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::error::{AppError, Result};

/// Claims embedded in every bearer token issued by the server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id the token resolves to
    pub sub: Uuid,
    /// Issued at (unix timestamp, seconds)
    pub iat: i64,
    /// Expiry (unix timestamp, seconds)
    pub exp: i64,
}

/// Issues and verifies signed, time-bounded bearer tokens.
///
/// The signing secret is threaded in from configuration rather than read
/// from ambient process state, so issuer and verifier can be exercised with
/// distinct secrets in tests.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiry: Duration,
}

impl TokenIssuer {
    /// Create a token issuer from authentication configuration
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            expiry: Duration::hours(config.token_expiry_hours),
        }
    }

    /// Issue a signed token for the given user id
    pub fn issue(&self, user_id: Uuid) -> Result<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id,
            iat: now.timestamp(),
            exp: (now + self.expiry).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to sign token: {}", e)))
    }

    /// Verify signature and expiry, returning the embedded claims.
    ///
    /// Any cryptographic or expiry failure is reported the same way; the
    /// caller never learns which check failed.
    pub fn verify(&self, token: &str) -> Result<Claims> {
        // No clock tolerance: a token is invalid the moment `exp` passes.
        let mut validation = Validation::default();
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::unauthenticated(format!("Token verification failed: {}", e)))
    }
}
