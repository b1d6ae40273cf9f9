use std::rc::Rc;

use chrono::Utc;
use shared::validation::{verdict, VALIDATION_INTERVAL_MILLIS};
use shared::Transition;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::api::auth_api;
use crate::notification::{use_notifier, Notifier};
use crate::session_store::{self, use_session, SessionDispatcher};
use crate::token_storage;

async fn validate(token: String, dispatcher: SessionDispatcher, notifier: Notifier) {
    let transition = match auth_api::validate_token(&token).await {
        Ok(status) => {
            log::info!("Token validation answered, status={status}");
            verdict(status, &token, Utc::now()).into_transition(token)
        }
        Err(error) => {
            log::warn!("Fail to validate token, error={error}");
            Some(Transition::network_failure())
        }
    };

    if let Some(transition) = transition {
        if let Some(notice) = transition.notice {
            notifier.warn(notice);
        }
        session_store::apply(&dispatcher, transition);
    }
}

/// Keeps the in-memory session in line with the backend: the stored token is
/// checked once on mount and then every five minutes while it exists.
#[hook]
pub fn use_session_validator() {
    let session = use_session();
    let notifier = use_notifier();

    let check: Rc<dyn Fn()> = {
        let dispatcher = session.dispatcher();
        Rc::new(move || {
            if let Some(token) = token_storage::read_token() {
                spawn_local(validate(token, dispatcher.clone(), notifier.clone()));
            }
        })
    };

    {
        let check = check.clone();
        let is_logged = session.is_logged;
        use_mount(move || {
            if !is_logged && token_storage::has_token() {
                check();
            }
        });
    }

    use_interval(move || check(), VALIDATION_INTERVAL_MILLIS);
}
