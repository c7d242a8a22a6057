use base64::{engine::general_purpose, Engine as _};
use chrono::Utc;
use rand::Rng;
use sha2::{Digest, Sha256};
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::auth::TokenIssuer;
use crate::error::{AppError, Result};
use crate::models::{User, UserProfile};
use crate::storage::{Storage, StorageError};
use crate::utils::validator;

/// Outcome of a successful login or registration
#[derive(Debug, Clone)]
pub struct IssuedCredential {
    pub token: String,
    pub user: UserProfile,
}

/// Credential issuer: registers users and exchanges verified credentials
/// for signed bearer tokens.
pub struct AuthService {
    /// Identity store backend
    storage: Arc<dyn Storage>,
    /// Token signer, configured with the server secret
    issuer: TokenIssuer,
}

impl AuthService {
    /// Create a new authentication service over the given identity store
    pub fn new(storage: Arc<dyn Storage>, issuer: TokenIssuer) -> Self {
        Self { storage, issuer }
    }

    /// Generate a random salt for password hashing
    fn generate_salt(&self) -> String {
        let mut salt = [0u8; 16];
        rand::thread_rng().fill(&mut salt);
        general_purpose::STANDARD.encode(salt)
    }

    /// Hash a password with the given salt
    fn hash_password(&self, password: &str, salt: &str) -> String {
        let salted = format!("{}{}", password, salt);
        let mut hasher = Sha256::new();
        hasher.update(salted.as_bytes());
        let result = hasher.finalize();
        hex::encode(result)
    }

    /// Verify a password against a stored hash and salt
    fn verify_password(&self, password: &str, hash: &str, salt: &str) -> bool {
        let calculated_hash = self.hash_password(password, salt);
        calculated_hash == hash
    }

    /// Authenticate with email and password, issuing a bearer token.
    ///
    /// Unknown email and wrong password produce the same error so a caller
    /// cannot learn whether an email is registered.
    pub async fn login(&self, email: &str, password: &str) -> Result<IssuedCredential> {
        // Registration stores the trimmed email, so lookups trim too.
        let email = email.trim();
        debug!("Authenticating user {}", email);

        let user = match self.storage.get_user_by_email(email).await {
            Ok(Some(user)) => user,
            Ok(None) => return Err(AppError::InvalidCredentials),
            Err(e) => return Err(AppError::storage(e.to_string())),
        };

        if !self.verify_password(password, &user.password_hash, &user.salt) {
            return Err(AppError::InvalidCredentials);
        }

        let token = self.issuer.issue(user.id)?;
        Ok(IssuedCredential {
            token,
            user: user.profile(),
        })
    }

    /// Register a new user, then behave as login.
    ///
    /// Email uniqueness is enforced by the store's conflict signal, not by
    /// a check-then-insert here; a racing duplicate registration surfaces
    /// as `DuplicateEmail` either way.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<IssuedCredential> {
        validator::validate_registration(name, email, password)?;

        let salt = self.generate_salt();
        let user = User {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            password_hash: self.hash_password(password, &salt),
            salt,
            created_at: Utc::now(),
        };

        match self.storage.create_user(&user).await {
            Ok(()) => {}
            Err(StorageError::Conflict(_)) => return Err(AppError::DuplicateEmail),
            Err(e) => return Err(AppError::storage(e.to_string())),
        }

        info!("Registered new user {}", user.id);

        let token = self.issuer.issue(user.id)?;
        Ok(IssuedCredential {
            token,
            user: user.profile(),
        })
    }
}
