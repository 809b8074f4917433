use crate::serde_utils::null_as_default;
use serde::{Deserialize, Serialize};

/// A person as returned by the people search endpoint.
/// Extra fields sent by the server are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonHit {
    /// Slug used in `/people/{id}/`
    pub id: String,
    pub name: String,
}

/// Query for `GET /api/people/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeopleSearchQuery {
    pub q: String,
    pub page: u32,
}

impl PeopleSearchQuery {
    pub fn first_page(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            page: 1,
        }
    }

    /// Pages are 1-based; 0 means the first page
    pub fn with_page(self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self
        }
    }
}

/// Response for `GET /api/people/`
///
/// Missing or `null` fields mean "no results".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeopleSearchResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub people: Vec<PersonHit>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub more_results: bool,
    /// Page number echoed by the server (1-based)
    #[serde(default)]
    pub page: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let json = r#"{"page":2,"more_results":true,"people":[{"id":"ann-lee","name":"Ann Lee","city":"Chicago"}]}"#;
        let parsed: PeopleSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.page, Some(2));
        assert!(parsed.more_results);
        assert_eq!(parsed.people[0].id, "ann-lee");
        assert_eq!(parsed.people[0].name, "Ann Lee");
    }

    #[test]
    fn test_empty_body_means_no_results() {
        let parsed: PeopleSearchResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, PeopleSearchResponse::default());
    }

    #[test]
    fn test_null_fields_mean_no_results() {
        let json = r#"{"people":null,"more_results":null,"page":null}"#;
        let parsed: PeopleSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, PeopleSearchResponse::default());

        let json = r#"{"people":null,"more_results":false}"#;
        let parsed: PeopleSearchResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.people.is_empty());
    }

    #[test]
    fn test_query_pages() {
        assert_eq!(
            PeopleSearchQuery::first_page("ann"),
            PeopleSearchQuery {
                q: "ann".to_string(),
                page: 1
            }
        );
        assert_eq!(PeopleSearchQuery::first_page("ann").with_page(0).page, 1);
        assert_eq!(PeopleSearchQuery::first_page("ann").with_page(3).page, 3);
    }
}
