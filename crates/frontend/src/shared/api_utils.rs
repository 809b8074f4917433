//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use crate::shared::config::AppConfig;
use serde::Serialize;

/// Build a full API URL from a path and a serializable query
///
/// # Arguments
/// * `config` - supplies the API origin
/// * `path` - The API path (should start with "/api/")
/// * `query` - serialized with `serde_qs`
///
/// # Example
/// ```rust,ignore
/// let url = api_url(&config, "/api/trend/", &TrendRequest { period })?;
/// ```
pub fn api_url<Q: Serialize>(config: &AppConfig, path: &str, query: &Q) -> Result<String, String> {
    let qs = serde_qs::to_string(query).map_err(|e| format!("Invalid query: {}", e))?;
    if qs.is_empty() {
        Ok(format!("{}{}", config.api_base, path))
    } else {
        Ok(format!("{}{}?{}", config.api_base, path, qs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d100_trend::TrendRequest;

    #[test]
    fn test_same_origin_url() {
        let config = AppConfig::default();
        let url = api_url(
            &config,
            "/api/trend/",
            &TrendRequest {
                period: "week".to_string(),
            },
        )
        .unwrap();
        assert_eq!(url, "/api/trend/?period=week");
    }

    #[test]
    fn test_configured_origin() {
        let config = AppConfig {
            api_base: "https://rolodex.example".to_string(),
            ..AppConfig::default()
        };
        let url = api_url(
            &config,
            "/api/trend/",
            &TrendRequest {
                period: "month".to_string(),
            },
        )
        .unwrap();
        assert_eq!(url, "https://rolodex.example/api/trend/?period=month");
    }
}
