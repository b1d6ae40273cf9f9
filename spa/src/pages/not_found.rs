use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main class="container mt-5">
            <h1>{"You are lost!!"}</h1>
            <h3>
                <Link<Route> to={Route::Login}>{"Go to login page!"}</Link<Route>>
            </h3>
        </main>
    }
}
