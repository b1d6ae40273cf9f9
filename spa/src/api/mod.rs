pub mod auth_api;
pub mod courses_api;

/// Base URL of the backend, fixed at build time through `BACKEND_URL`.
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:8080",
};
