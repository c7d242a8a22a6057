use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User account record as held by the identity store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Email address (unique across the store)
    pub email: String,
    /// Salted password digest; never the plaintext
    pub password_hash: String,
    /// Per-user random salt
    pub salt: String,
    /// Account creation time
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Projection safe for client responses: no password hash, no salt.
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// Public user profile, the only user shape that crosses the HTTP boundary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_excludes_credential_material() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            password_hash: "deadbeef".to_string(),
            salt: "c2FsdA==".to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(user.profile()).unwrap();
        assert_eq!(json["email"], "asha@example.com");
        assert!(json.get("password_hash").is_none());
        assert!(json.get("salt").is_none());
    }
}
