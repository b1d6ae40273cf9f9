use chrono::Utc;
use shared::validation::{check_issued, EXPIRED_NOTICE};
use shared::{GuardOutcome, SessionState, Verdict};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    api::auth_api,
    components::composite::login_form::{LoginForm, LoginFormData},
    notification::use_notifier,
    router::Route,
    session_store::{self, use_session},
    token_storage,
};

/// Where a freshly logged-in user goes: back to the page shown before the
/// reload when the session may open it, or the dashboard.
fn landing_route(state: &SessionState) -> Route {
    token_storage::saved_path()
        .and_then(|path| Route::recognize(&path))
        .filter(|route| route.access().is_protected())
        .filter(|route| route.access().evaluate(state) == GuardOutcome::Render)
        .unwrap_or(Route::Dashboard)
}

#[function_component(Login)]
pub fn login() -> Html {
    let session = use_session();
    let notifier = use_notifier();
    let navigator = use_navigator();
    let busy = use_state(|| false);

    {
        let session = session.clone();
        use_effect_with(session.is_logged, move |is_logged| {
            if *is_logged {
                if let Some(navigator) = navigator {
                    navigator.push(&landing_route(&session.state));
                }
            }
        });
    }

    let on_login_event = {
        let dispatcher = session.dispatcher();
        let busy = busy.clone();
        Callback::from(move |event: LoginFormData| {
            let dispatcher = dispatcher.clone();
            let notifier = notifier.clone();
            let busy = busy.clone();
            busy.set(true);
            spawn_local(async move {
                match auth_api::login(event.username.clone(), event.password).await {
                    Ok(response) => match check_issued(&response.token, Utc::now()) {
                        Verdict::Valid(claims) => {
                            log::info!("User login successful, username={}", &event.username);
                            session_store::login(&dispatcher, response.token, claims);
                        }
                        Verdict::Expired => {
                            log::warn!("Login returned an expired token, username={}", &event.username);
                            notifier.warn(EXPIRED_NOTICE);
                        }
                        other => {
                            log::warn!("Login returned an unusable token, verdict={other:?}");
                            notifier.error("Login failed, please try again.");
                        }
                    },
                    Err(error) => {
                        log::warn!("Login failed, error: {error}");
                        notifier.error("Invalid user name or password.");
                    }
                }
                busy.set(false);
            });
        })
    };

    html! {
        <main>
            <LoginForm on_login={on_login_event} busy={*busy} />
        </main>
    }
}
