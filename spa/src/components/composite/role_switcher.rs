use shared::{Role, SessionAction};
use wasm_bindgen::JsCast;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::session_store::use_session;

fn role_label(name: &str) -> String {
    Role::from_name(name)
        .map(|role| role.label().to_string())
        .unwrap_or_else(|| name.to_string())
}

/// Lets a user holding several roles pick the one the portal acts as.
#[function_component(RoleSwitcher)]
pub fn role_switcher() -> Html {
    let session = use_session();

    if !session.roles.has_multi_roles {
        return html! {};
    }

    let on_change = {
        let dispatcher = session.dispatcher();
        Callback::from(move |event: Event| {
            if let Some(target) = event.target() {
                let role = target.unchecked_into::<HtmlSelectElement>().value();
                log::info!("Switching current role, role={role}");
                dispatcher.dispatch(SessionAction::SwitchRole(role));
            }
        })
    };

    let current = session.roles.current_role.clone().unwrap_or_default();

    html! {
        <select class="form-select form-select-sm" aria-label="Current role" onchange={on_change}>
            { for session.roles.all_roles.iter().map(|name| html! {
                <option value={name.clone()} selected={*name == current}>{role_label(name)}</option>
            })}
        </select>
    }
}
