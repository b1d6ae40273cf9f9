use serde_json::Value;
use shared::{GuardOutcome, Role};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::atoms::page_header::PageHeader;
use crate::components::composite::role_switcher::RoleSwitcher;
use crate::router::Route;
use crate::session_store::use_session;

fn current_role_label(current_role: Option<&str>) -> String {
    match current_role {
        Some(name) => Role::from_name(name)
            .map(|role| role.label().to_string())
            .unwrap_or_else(|| name.to_string()),
        None => "No role".to_string(),
    }
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let session = use_session();
    let role = current_role_label(session.roles.current_role.as_deref());

    let shortcuts = Route::NAVIGATION
        .iter()
        .filter(|route| **route != Route::Dashboard)
        .filter(|route| route.access().evaluate(&session.state) == GuardOutcome::Render)
        .map(|route| {
            html! {
                <div class="col">
                    <div class="card h-100">
                        <div class="card-body">
                            <h5 class="card-title">{route.title()}</h5>
                            <Link<Route> to={*route} classes={classes!("stretched-link")}>{"Open"}</Link<Route>>
                        </div>
                    </div>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <>
            <PageHeader title="Dashboard" subtitle={AttrValue::from(format!("Signed in as {role}"))} />
            <div class="row row-cols-1 row-cols-md-3 g-3">
                {shortcuts}
            </div>
        </>
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[function_component(Profile)]
pub fn profile() -> Html {
    let session = use_session();

    let Some(claims) = session.decoded_token.clone() else {
        return html! { <PageHeader title="Profile" /> };
    };

    let expires_at = claims
        .expires_at()
        .map(|at| at.to_rfc2822())
        .unwrap_or_else(|| "-".to_string());
    let issued_at = claims
        .issued_at()
        .map(|at| at.to_rfc2822())
        .unwrap_or_else(|| "-".to_string());

    html! {
        <>
            <PageHeader title="Profile" />
            <table class="table table-sm w-auto">
                <tbody>
                    { for claims.extra.iter().map(|(key, value)| html! {
                        <tr>
                            <th scope="row">{key.clone()}</th>
                            <td>{render_value(value)}</td>
                        </tr>
                    })}
                    <tr>
                        <th scope="row">{"Roles"}</th>
                        <td>{session.roles.all_roles.join(", ")}</td>
                    </tr>
                    <tr>
                        <th scope="row">{"Signed in"}</th>
                        <td>{issued_at}</td>
                    </tr>
                    <tr>
                        <th scope="row">{"Session expires"}</th>
                        <td>{expires_at}</td>
                    </tr>
                </tbody>
            </table>
        </>
    }
}

#[function_component(Settings)]
pub fn settings() -> Html {
    let session = use_session();
    let role = current_role_label(session.roles.current_role.as_deref());

    html! {
        <>
            <PageHeader title="Settings" />
            <div class="card" style="max-width: 28rem;">
                <div class="card-body">
                    <h5 class="card-title">{"Current role"}</h5>
                    if session.roles.has_multi_roles {
                        <p class="card-text">{"Pages and navigation follow the role selected here."}</p>
                        <RoleSwitcher />
                    } else {
                        <p class="card-text">{role}</p>
                    }
                </div>
            </div>
        </>
    }
}
