//! Top navigation: highlight the section the page belongs to

use crate::routes::{PathMatcher, Route};
use crate::shared::dom;

const ACTIVE_CLASS: &str = "active";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTab {
    People,
    Conversations,
}

impl NavTab {
    pub fn selector(&self) -> &'static str {
        match self {
            NavTab::People => ".navbar-nav .people",
            NavTab::Conversations => ".navbar-nav .conversations",
        }
    }
}

pub fn active_tab(matcher: &PathMatcher, path: &str) -> Option<NavTab> {
    if matcher.is_path(Route::People, path) {
        Some(NavTab::People)
    } else if matcher.is_path(Route::Conversations, path) {
        Some(NavTab::Conversations)
    } else {
        None
    }
}

pub fn render_active_tab(matcher: &PathMatcher, path: &str) {
    let Some(tab) = active_tab(matcher, path) else {
        return;
    };
    for el in dom::query_document(tab.selector()) {
        dom::add_class(&el, ACTIVE_CLASS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_tab() {
        let matcher = PathMatcher::global();
        assert_eq!(active_tab(matcher, "/people/"), Some(NavTab::People));
        assert_eq!(active_tab(matcher, "/people/ann/edit/"), Some(NavTab::People));
        assert_eq!(
            active_tab(matcher, "/conversations/add/"),
            Some(NavTab::Conversations)
        );
        assert_eq!(active_tab(matcher, "/dashboard/"), None);
        assert_eq!(active_tab(matcher, "/"), None);
    }
}
