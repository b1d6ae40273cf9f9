mod api;
mod app;
mod components;
mod notification;
mod pages;
mod router;
mod session_store;
mod token_storage;
mod validator;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<app::App>::new().render();
}
