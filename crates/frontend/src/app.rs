//! Page bootstrap: classify the path once and attach the matching behaviors

use crate::dashboards::d100_trend;
use crate::domain::a001_person::ui::search_widget;
use crate::domain::a002_conversation::ConversationForm;
use crate::layout::nav;
use crate::routes::{PathMatcher, Route};
use crate::shared::button_group;
use crate::shared::config::AppConfig;
use crate::shared::enhanced_select::{self, EnhancedSelectRegistry};
use crate::shared::page::BrowserPage;

/// Which behaviors a page gets, decided from its path alone
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PagePlan {
    pub trend_chart: bool,
    pub enhanced_selects: bool,
    pub conversation_form: Option<ConversationMode>,
    pub button_groups: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationMode {
    Create,
    Update,
}

impl PagePlan {
    pub fn for_path(matcher: &PathMatcher, path: &str) -> Self {
        let mut plan = PagePlan {
            trend_chart: matcher.is_path(Route::Dashboard, path),
            ..PagePlan::default()
        };
        if matcher.is_path(Route::PersonEdit, path) {
            plan.enhanced_selects = true;
        } else if matcher.is_path(Route::ConversationEdit, path) {
            plan.enhanced_selects = true;
            plan.conversation_form = Some(if matcher.is_path(Route::ConversationCreate, path) {
                ConversationMode::Create
            } else {
                ConversationMode::Update
            });
        } else if matcher.is_path(Route::PeopleList, path)
            || matcher.is_path(Route::ConversationList, path)
        {
            plan.enhanced_selects = true;
            plan.button_groups = true;
        }
        plan
    }
}

pub struct HomeApp {
    config: AppConfig,
    matcher: &'static PathMatcher,
    selects: EnhancedSelectRegistry,
}

impl HomeApp {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            matcher: PathMatcher::global(),
            selects: EnhancedSelectRegistry::default(),
        }
    }

    pub fn is_path(&self, route: Route, path: &str) -> bool {
        self.matcher.is_path(route, path)
    }

    /// Runs once per page load, after the document is parsed
    pub fn init(&self, path: &str) {
        let plan = PagePlan::for_path(self.matcher, path);
        log::debug!("init '{}': {:?}", path, plan);

        nav::render_active_tab(self.matcher, path);
        search_widget::init(&self.config);

        if plan.trend_chart {
            d100_trend::ui::trend_chart::init(&self.config);
        }
        if plan.enhanced_selects {
            enhanced_select::init(&self.selects);
        }
        if let Some(mode) = plan.conversation_form {
            let form = ConversationForm::new(
                BrowserPage::new(self.selects.clone()),
                mode == ConversationMode::Create,
            );
            form.init();
            form.bind();
        }
        if plan.button_groups {
            button_group::init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(path: &str) -> PagePlan {
        PagePlan::for_path(PathMatcher::global(), path)
    }

    #[test]
    fn test_dashboard_gets_chart_only() {
        assert_eq!(
            plan("/dashboard/"),
            PagePlan {
                trend_chart: true,
                ..PagePlan::default()
            }
        );
    }

    #[test]
    fn test_person_forms_get_selects() {
        for path in ["/people/add/", "/people/ann-lee/edit/"] {
            let p = plan(path);
            assert!(p.enhanced_selects);
            assert!(!p.button_groups);
            assert_eq!(p.conversation_form, None);
        }
    }

    #[test]
    fn test_conversation_forms() {
        assert_eq!(
            plan("/conversations/add/").conversation_form,
            Some(ConversationMode::Create)
        );
        assert_eq!(
            plan("/conversations/abc123/edit/").conversation_form,
            Some(ConversationMode::Update)
        );
    }

    #[test]
    fn test_lists_get_button_groups() {
        for path in ["/people/", "/conversations/"] {
            let p = plan(path);
            assert!(p.enhanced_selects);
            assert!(p.button_groups);
        }
    }

    #[test]
    fn test_app_exposes_path_checks() {
        let app = HomeApp::new(AppConfig::default());
        assert!(app.is_path(Route::Dashboard, "/dashboard/"));
        assert!(!app.is_path(Route::Dashboard, "/dashboard/extra/"));
    }

    #[test]
    fn test_detail_pages_get_nothing() {
        assert_eq!(plan("/people/ann-lee/"), PagePlan::default());
        assert_eq!(plan("/"), PagePlan::default());
    }
}
