#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use serde_json::{json, Value};
use shared::{decode_token, Claims};

/// Builds an unsigned compact JWT around the given claims payload.
pub(crate) fn encode_token(payload: &Value) -> String {
    let header = base64_url::encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let body = base64_url::encode(&payload.to_string());
    format!("{header}.{body}.signature")
}

/// Claims payload in the shape the backend issues, expiring `expires_in` from `now`.
pub(crate) fn payload_with_roles(roles: &[&str], now: DateTime<Utc>, expires_in: Duration) -> Value {
    let user_roles: Vec<Value> = roles
        .iter()
        .map(|name| json!({ "role": { "name": name } }))
        .collect();
    json!({
        "id": 42,
        "email": "jane.doe@college.edu",
        "iat": now.timestamp(),
        "exp": (now + expires_in).timestamp(),
        "UserRoles": user_roles,
    })
}

pub(crate) fn token_with_roles(roles: &[&str], now: DateTime<Utc>) -> String {
    encode_token(&payload_with_roles(roles, now, Duration::hours(1)))
}

pub(crate) fn claims_with_roles(roles: &[&str], now: DateTime<Utc>) -> anyhow::Result<Claims> {
    Ok(decode_token(&token_with_roles(roles, now))?)
}
