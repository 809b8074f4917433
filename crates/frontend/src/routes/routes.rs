//! Route classification of the current page path.
//!
//! The server renders every page; the front-end only needs to know which kind
//! of page it is running on to decide which behaviors to attach.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Any page under `/people/`
    People,
    PeopleList,
    PersonDetail,
    /// Person update form or person create form
    PersonEdit,
    /// Any page under `/conversations/`
    Conversations,
    ConversationList,
    /// Conversation update form or conversation create form
    ConversationEdit,
    ConversationCreate,
    Dashboard,
}

impl Route {
    pub const ALL: [Route; 9] = [
        Route::People,
        Route::PeopleList,
        Route::PersonDetail,
        Route::PersonEdit,
        Route::Conversations,
        Route::ConversationList,
        Route::ConversationEdit,
        Route::ConversationCreate,
        Route::Dashboard,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Route::People => "people",
            Route::PeopleList => "peopleList",
            Route::PersonDetail => "personDetail",
            Route::PersonEdit => "personEdit",
            Route::Conversations => "conversations",
            Route::ConversationList => "conversationList",
            Route::ConversationEdit => "conversationEdit",
            Route::ConversationCreate => "conversationCreate",
            Route::Dashboard => "dashboard",
        }
    }

    fn pattern(&self) -> &'static str {
        match self {
            Route::People => r"^/people/",
            Route::PeopleList => r"^/people/$",
            Route::PersonDetail => r"^/people/[\w-]+/",
            Route::PersonEdit => r"^/people/(add|[\w-]+/edit)/$",
            Route::Conversations => r"^/conversations/",
            Route::ConversationList => r"^/conversations/$",
            Route::ConversationEdit => r"^/conversations/(add|\w{3,}/edit)/$",
            Route::ConversationCreate => r"^/conversations/add/$",
            Route::Dashboard => r"^/dashboard/$",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("unknown route name '{0}'")]
    Unknown(String),
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::ALL
            .iter()
            .copied()
            .find(|route| route.name() == s)
            .ok_or_else(|| RouteError::Unknown(s.to_string()))
    }
}

/// Compiled route patterns, built once for the lifetime of the page
pub struct PathMatcher {
    patterns: Vec<(Route, Regex)>,
}

static MATCHER: Lazy<PathMatcher> = Lazy::new(PathMatcher::new);

impl PathMatcher {
    fn new() -> Self {
        let patterns = Route::ALL
            .iter()
            .filter_map(|route| match Regex::new(route.pattern()) {
                Ok(re) => Some((*route, re)),
                Err(e) => {
                    log::error!("route pattern for {} does not compile: {}", route, e);
                    None
                }
            })
            .collect();
        Self { patterns }
    }

    pub fn global() -> &'static PathMatcher {
        &MATCHER
    }

    pub fn is_path(&self, route: Route, path: &str) -> bool {
        self.patterns
            .iter()
            .find(|(r, _)| *r == route)
            .map(|(_, re)| re.is_match(path))
            .unwrap_or(false)
    }

    /// Lookup by string name. Unknown names are programmer errors.
    pub fn is_path_named(&self, name: &str, path: &str) -> Result<bool, RouteError> {
        let route = name.parse::<Route>().map_err(|e| {
            debug_assert!(false, "{}", e);
            e
        })?;
        Ok(self.is_path(route, path))
    }

    /// All routes the path belongs to, in declaration order
    pub fn classify(&self, path: &str) -> Vec<Route> {
        self.patterns
            .iter()
            .filter(|(_, re)| re.is_match(path))
            .map(|(route, _)| *route)
            .collect()
    }
}

/// Path of the page the module runs on
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is(route: Route, path: &str) -> bool {
        PathMatcher::global().is_path(route, path)
    }

    #[test]
    fn test_person_edit_is_not_conversation_edit() {
        assert!(is(Route::PersonEdit, "/people/123/edit/"));
        assert!(!is(Route::ConversationEdit, "/people/123/edit/"));
    }

    #[test]
    fn test_representative_paths() {
        let cases = [
            (Route::People, "/people/ann-lee/"),
            (Route::PeopleList, "/people/"),
            (Route::PersonDetail, "/people/ann-lee/"),
            (Route::PersonEdit, "/people/add/"),
            (Route::Conversations, "/conversations/abc123/"),
            (Route::ConversationList, "/conversations/"),
            (Route::ConversationEdit, "/conversations/abc123/edit/"),
            (Route::ConversationEdit, "/conversations/add/"),
            (Route::ConversationCreate, "/conversations/add/"),
            (Route::Dashboard, "/dashboard/"),
        ];
        for (route, path) in cases {
            assert!(is(route, path), "{} should match {}", route, path);
        }
    }

    #[test]
    fn test_non_matches() {
        assert!(!is(Route::PeopleList, "/people/ann-lee/"));
        assert!(!is(Route::ConversationCreate, "/conversations/abc123/edit/"));
        // pks shorter than three characters are not conversation pages
        assert!(!is(Route::ConversationEdit, "/conversations/ab/edit/"));
        assert!(!is(Route::Dashboard, "/"));
        assert!(!is(Route::People, "/conversations/"));
    }

    #[test]
    fn test_classify_collects_all_matches() {
        let routes = PathMatcher::global().classify("/conversations/add/");
        assert_eq!(
            routes,
            vec![
                Route::Conversations,
                Route::ConversationEdit,
                Route::ConversationCreate
            ]
        );
        assert!(PathMatcher::global().classify("/about/").is_empty());
    }

    #[test]
    fn test_named_lookup() {
        let matcher = PathMatcher::global();
        assert_eq!(matcher.is_path_named("personEdit", "/people/x/edit/"), Ok(true));
        assert_eq!("dashboard".parse::<Route>(), Ok(Route::Dashboard));
        assert_eq!(
            "nope".parse::<Route>(),
            Err(RouteError::Unknown("nope".to_string()))
        );
    }

    #[test]
    #[cfg_attr(debug_assertions, should_panic(expected = "unknown route name"))]
    fn test_unknown_name_fails_fast() {
        let result = PathMatcher::global().is_path_named("nope", "/people/");
        assert!(result.is_err());
    }
}
