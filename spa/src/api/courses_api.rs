use gloo_net::http::Request;
use gloo_net::Error;
use serde_json::Value;

use crate::api::BACKEND_URL;

pub async fn get_mark_weightage(token: &str) -> Result<Vec<Value>, Error> {
    let endpoint = format!("{BACKEND_URL}/admin/courses/markweightage");
    let response = Request::get(&endpoint)
        .header("Authorization", &format!("Bearer {token}"))
        .send()
        .await?;
    match response.status() {
        200 => {
            let rows = response.json::<Vec<Value>>().await?;
            log::info!("Api get mark weightage, rows={}", rows.len());
            Ok(rows)
        }
        status => {
            let response_body = response.text().await?;
            log::warn!(
                "Api get mark weightage, error = unexpected response, status={status}, response={response_body}"
            );
            Err(Error::GlooError("unexpected response".to_owned()))
        }
    }
}
