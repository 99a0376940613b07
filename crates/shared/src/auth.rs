//! Authentication types for the admin panel.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims for admin access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (admin ID).
    pub sub: Uuid,
    /// Admin login name.
    pub username: String,
    /// Issued at timestamp.
    pub iat: i64,
    /// Expiration timestamp.
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for an admin.
    #[must_use]
    pub fn new(admin_id: Uuid, username: &str, expires_at: DateTime<Utc>) -> Self {
        let now = Utc::now();
        Self {
            sub: admin_id,
            username: username.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    /// Returns the admin ID from claims.
    #[must_use]
    pub const fn admin_id(&self) -> Uuid {
        self.sub
    }
}

/// Login request payload.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    /// Admin login name.
    pub username: String,
    /// Admin password.
    pub password: String,
}

/// Login response payload.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    /// Access token.
    pub access_token: String,
    /// Always `Bearer`.
    pub token_type: &'static str,
    /// Token expiration in seconds.
    pub expires_in: i64,
    /// Authenticated admin.
    pub admin: AdminInfo,
}

/// Admin info returned in auth responses.
#[derive(Debug, Clone, Serialize)]
pub struct AdminInfo {
    /// Admin ID.
    pub id: Uuid,
    /// Login name.
    pub username: String,
    /// Display name.
    pub full_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_claims_new_sets_correct_fields() {
        let admin_id = Uuid::new_v4();
        let expires_at = Utc::now() + Duration::hours(1);

        let claims = Claims::new(admin_id, "operator", expires_at);

        assert_eq!(claims.sub, admin_id);
        assert_eq!(claims.admin_id(), admin_id);
        assert_eq!(claims.username, "operator");
        assert!(claims.iat <= Utc::now().timestamp());
        assert_eq!(claims.exp, expires_at.timestamp());
    }

    #[test]
    fn test_login_response_serializes_token_type() {
        let response = LoginResponse {
            access_token: "abc".to_string(),
            token_type: "Bearer",
            expires_in: 3600,
            admin: AdminInfo {
                id: Uuid::nil(),
                username: "operator".to_string(),
                full_name: "Operator Sekolah".to_string(),
            },
        };

        let json = serde_json::to_value(&response).expect("serializable");
        assert_eq!(json["token_type"], "Bearer");
        assert_eq!(json["admin"]["username"], "operator");
    }
}
