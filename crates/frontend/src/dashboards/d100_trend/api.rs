use crate::shared::api_utils::api_url;
use crate::shared::config::AppConfig;
use contracts::dashboards::d100_trend::{TrendRequest, TrendResponse};
use gloo_net::http::Request;

const TREND_PATH: &str = "/api/trend/";

/// Fetch the conversations and seeds series for a period
pub async fn get_trend(config: &AppConfig, period: &str) -> Result<TrendResponse, String> {
    let url = api_url(
        config,
        TREND_PATH,
        &TrendRequest {
            period: period.to_string(),
        },
    )?;

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: TrendResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}
