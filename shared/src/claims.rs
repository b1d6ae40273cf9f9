use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::TokenError;

/// A token expiring within this many seconds is treated as already expired.
pub const EXPIRY_LEEWAY_SECONDS: i64 = 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleName {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRole {
    pub role: RoleName,
}

/// Payload of the JWT handed out by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    #[serde(rename = "UserRoles", default)]
    pub user_roles: Vec<UserRole>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Claims {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        self.iat.and_then(|iat| DateTime::from_timestamp(iat, 0))
    }

    pub fn is_expiring(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at() {
            Some(expires_at) => expires_at - now <= Duration::seconds(EXPIRY_LEEWAY_SECONDS),
            None => true,
        }
    }

    pub fn role_names(&self) -> Vec<String> {
        self.user_roles
            .iter()
            .map(|user_role| user_role.role.name.clone())
            .collect()
    }
}

/// Reads the claims out of a compact JWT. The signature is not checked here,
/// the backend does that on every call.
pub fn decode_token(token: &str) -> Result<Claims, TokenError> {
    let segments: Vec<&str> = token.trim().split('.').collect();
    if segments.len() != 3 {
        return Err(TokenError::Malformed {
            segments: segments.len(),
        });
    }
    let payload = segments[1].trim_end_matches('=');
    let bytes =
        base64_url::decode(payload).map_err(|error| TokenError::Encoding(error.to_string()))?;
    let claims = serde_json::from_slice::<Claims>(&bytes)?;
    Ok(claims)
}
