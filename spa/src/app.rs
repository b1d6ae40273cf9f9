use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    notification::ToastProvider,
    router::{switch, Route},
    session_store::LoginProvider,
    validator::use_session_validator,
};

/// Runs the token validator inside the providers it dispatches to.
#[function_component(SessionShell)]
fn session_shell() -> Html {
    use_session_validator();

    html! {
        <Switch<Route> render={switch} />
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <LoginProvider>
                    <SessionShell />
                </LoginProvider>
            </ToastProvider>
        </BrowserRouter>
    }
}
