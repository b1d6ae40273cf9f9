use serde::{Deserialize, Serialize};

pub mod claims;
pub mod error;
pub mod guard;
pub mod role;
pub mod session;
pub mod validation;

pub use claims::{decode_token, Claims, UserRole};
pub use error::TokenError;
pub use guard::{Access, GuardOutcome, RoleGuard};
pub use role::Role;
pub use session::{Roles, SessionAction, SessionState};
pub use validation::{Transition, TokenStorage, Verdict};

/// Key of the persisted token in the browser's local storage.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Key of the last visited path in the browser's session storage.
pub const PATH_STORAGE_KEY: &str = "path";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignInRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignInResponse {
    pub token: String,
}
