use common::config::ApiConfig;
use gloo_net::http::Request;

/// Fetches the generated endpoint configuration served next to the bundle.
pub async fn load(path: &str) -> Result<ApiConfig, String> {
    let response = Request::get(path).send().await.map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(format!("HTTP {} while fetching {}", response.status(), path));
    }

    let raw = response.text().await.map_err(|e| e.to_string())?;
    ApiConfig::from_json(&raw).map_err(|e| e.to_string())
}
