use shared::GuardOutcome;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::composite::role_switcher::RoleSwitcher;
use crate::notification::use_notifier;
use crate::router::Route;
use crate::session_store::{self, use_session};
use crate::token_storage;

#[derive(PartialEq, Properties)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
}

/// Layout of every signed-in page: side navigation limited to what the
/// current role may open, and the page content next to it.
#[function_component(ResponsiveDrawer)]
pub fn responsive_drawer(props: &Props) -> Html {
    let session = use_session();
    let notifier = use_notifier();
    let navigator = use_navigator();
    let route = use_route::<Route>();
    let open = use_state(|| false);

    {
        let path = route.map(|route| route.to_path());
        use_effect_with(path, |path| {
            if let Some(path) = path {
                token_storage::save_path(path);
            }
        });
    }

    let on_toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    let on_logout = {
        let dispatcher = session.dispatcher();
        Callback::from(move |_: MouseEvent| {
            session_store::logout(&dispatcher);
            notifier.info("You have been logged out.");
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Login);
            }
        })
    };

    let links = Route::NAVIGATION
        .iter()
        .filter(|target| target.access().evaluate(&session.state) == GuardOutcome::Render)
        .map(|target| {
            let classes = if Some(*target) == route {
                classes!("nav-link", "active")
            } else {
                classes!("nav-link", "link-body-emphasis")
            };
            html! {
                <li class="nav-item">
                    <Link<Route> to={*target} classes={classes}>{target.title()}</Link<Route>>
                </li>
            }
        })
        .collect::<Html>();

    let sidebar_classes = if *open {
        classes!("col-md-3", "col-lg-2", "bg-body-tertiary", "p-3", "d-block")
    } else {
        classes!("col-md-3", "col-lg-2", "bg-body-tertiary", "p-3", "d-none", "d-md-block")
    };

    html! {
        <>
            <nav class="navbar bg-body-tertiary border-bottom">
                <div class="container-fluid">
                    <button class="navbar-toggler d-md-none" type="button" aria-label="Toggle navigation" onclick={on_toggle}>
                        <span class="navbar-toggler-icon"></span>
                    </button>
                    <span class="navbar-brand">{"Marks Portal"}</span>
                    <div class="d-flex align-items-center gap-2">
                        <RoleSwitcher />
                        <button onclick={on_logout} class="btn btn-sm btn-outline-secondary">
                            {"Logout"}
                        </button>
                    </div>
                </div>
            </nav>
            <div class="container-fluid">
                <div class="row">
                    <aside class={sidebar_classes}>
                        <ul class="nav nav-pills flex-column">
                            {links}
                        </ul>
                    </aside>
                    <main class="col-md-9 col-lg-10 p-4">
                        {props.children.clone()}
                    </main>
                </div>
            </div>
        </>
    }
}
