use gloo_net::http::Request;
use gloo_net::Error;
use shared::{SignInRequest, SignInResponse};

use crate::api::BACKEND_URL;

pub async fn login(username: String, password: String) -> Result<SignInResponse, Error> {
    let endpoint = format!("{BACKEND_URL}/auth/login");
    log::info!("Doing login, endpoint={endpoint}");
    let request = SignInRequest {
        username: username.clone(),
        password,
    };
    let response = Request::post(&endpoint).json(&request)?.send().await?;
    if !response.ok() {
        log::warn!(
            "Api auth login, username={username}, error = unexpected response, status={status}",
            status = response.status(),
        );
        return Err(Error::GlooError(format!(
            "Login failed with status: {}",
            response.status()
        )));
    }
    let sign_in = response.json::<SignInResponse>().await?;
    log::info!("Api auth login, username={username}");
    Ok(sign_in)
}

/// Asks the backend whether `token` is still good. Only transport failures
/// are errors; the caller interprets the status code.
pub async fn validate_token(token: &str) -> Result<u16, Error> {
    let endpoint = format!("{BACKEND_URL}/tokens/validate");
    let response = Request::post(&endpoint)
        .header("Authorization", &format!("Bearer {token}"))
        .send()
        .await?;
    log::info!(
        "Api validate token, status={status}",
        status = response.status()
    );
    Ok(response.status())
}
