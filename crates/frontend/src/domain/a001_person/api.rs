use crate::shared::api_utils::api_url;
use crate::shared::config::AppConfig;
use contracts::domain::a001_person::{PeopleSearchQuery, PeopleSearchResponse};
use gloo_net::http::Request;

const PEOPLE_SEARCH_PATH: &str = "/api/people/";

pub fn people_search_url(config: &AppConfig, term: &str, page: u32) -> Result<String, String> {
    let query = PeopleSearchQuery::first_page(term.trim()).with_page(page);
    api_url(config, PEOPLE_SEARCH_PATH, &query)
}

/// Search people by name prefix, one page at a time
pub async fn search_people(
    config: &AppConfig,
    term: &str,
    page: u32,
) -> Result<PeopleSearchResponse, String> {
    let url = people_search_url(config, term, page)?;

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: PeopleSearchResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_is_trimmed_and_page_defaults() {
        let config = AppConfig::default();
        assert_eq!(
            people_search_url(&config, "  ann ", 1).unwrap(),
            "/api/people/?q=ann&page=1"
        );
        assert_eq!(
            people_search_url(&config, "ann", 0).unwrap(),
            "/api/people/?q=ann&page=1"
        );
        assert_eq!(
            people_search_url(&config, "ann", 3).unwrap(),
            "/api/people/?q=ann&page=3"
        );
    }
}
