use chrono::{DateTime, Utc};

use crate::claims::{decode_token, Claims};
use crate::error::TokenError;
use crate::session::SessionAction;

/// How often a stored token is re-checked against the backend.
pub const VALIDATION_INTERVAL_MILLIS: u32 = 5 * 60 * 1000;

pub const NETWORK_ISSUE_NOTICE: &str =
    "Your session could not be validated. Please refresh the page.";
pub const REJECTED_NOTICE: &str = "Your session has expired!";
pub const EXPIRED_NOTICE: &str = "Your session has expired! Please login again.";
pub const UNDECODABLE_NOTICE: &str = "Your session is invalid! Please login again.";

/// Outcome of a token validation call that reached the backend. Network
/// failures never get this far.
#[derive(Debug)]
pub enum Verdict {
    Valid(Claims),
    Expired,
    Undecodable(TokenError),
    Rejected(u16),
    Inconclusive(u16),
}

/// What happens to the persisted token alongside a session transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenStorage {
    Keep,
    Remove,
}

/// A session change decided from a validation attempt, with the notice to
/// show the user, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub action: SessionAction,
    pub token_storage: TokenStorage,
    pub notice: Option<&'static str>,
}

impl Transition {
    fn logout(notice: &'static str) -> Self {
        Transition {
            action: SessionAction::Logout,
            token_storage: TokenStorage::Remove,
            notice: Some(notice),
        }
    }

    /// The backend could not be reached. The token stays so a later check can
    /// bring the session back.
    pub fn network_failure() -> Self {
        Transition {
            action: SessionAction::LogoutNetworkIssue,
            token_storage: TokenStorage::Keep,
            notice: Some(NETWORK_ISSUE_NOTICE),
        }
    }
}

impl Verdict {
    /// `None` leaves the session as it is.
    pub fn into_transition(self, token: String) -> Option<Transition> {
        match self {
            Verdict::Valid(claims) => Some(Transition {
                action: SessionAction::Login { token, claims },
                token_storage: TokenStorage::Keep,
                notice: None,
            }),
            Verdict::Expired => Some(Transition::logout(EXPIRED_NOTICE)),
            Verdict::Undecodable(_) => Some(Transition::logout(UNDECODABLE_NOTICE)),
            Verdict::Rejected(_) => Some(Transition::logout(REJECTED_NOTICE)),
            Verdict::Inconclusive(_) => None,
        }
    }
}

/// Checks a token the backend just vouched for, either by answering 200 on
/// validation or by handing it out at login.
pub fn check_issued(token: &str, now: DateTime<Utc>) -> Verdict {
    match decode_token(token) {
        Ok(claims) if claims.is_expiring(now) => Verdict::Expired,
        Ok(claims) => Verdict::Valid(claims),
        Err(error) => Verdict::Undecodable(error),
    }
}

pub fn verdict(status: u16, token: &str, now: DateTime<Utc>) -> Verdict {
    match status {
        200 => check_issued(token, now),
        400..=599 => Verdict::Rejected(status),
        _ => Verdict::Inconclusive(status),
    }
}
