//! Runtime configuration of the page scripts
//!
//! Defaults match the server templates; the API origin can be overridden with
//! `data-api-base` on `<body>` when the API is served from another host.

const API_BASE_ATTR: &str = "data-api-base";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Origin prefix for API requests, empty for same-origin
    pub api_base: String,
    /// Delay between the last keystroke and the search request
    pub search_debounce_ms: u32,
    /// Minimum trimmed query length that triggers a search
    pub min_query_len: usize,
    /// Viewport width below which the chart legend moves to the bottom
    pub responsive_breakpoint: f64,
    pub chart_height: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            search_debounce_ms: 150,
            min_query_len: 1,
            responsive_breakpoint: 500.0,
            chart_height: 400,
        }
    }
}

impl AppConfig {
    /// Defaults plus overrides declared on the document body
    pub fn from_document() -> Self {
        let mut config = Self::default();
        let base = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .and_then(|body| body.get_attribute(API_BASE_ATTR));
        if let Some(base) = base {
            config.api_base = base.trim_end_matches('/').to_string();
        }
        config
    }
}
