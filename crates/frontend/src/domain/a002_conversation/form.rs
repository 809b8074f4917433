//! Conversation create/update form behaviors

use crate::shared::dom;
use crate::shared::page::{FormEffect, FormPage};
use web_sys::Event;

pub const PEOPLE_FIELD: &str = "people";
pub const SUMMARY_FIELD: &str = "summary";
pub const MODE_FIELD: &str = "mode";
pub const LOCATION_FIELD: &str = "location";

/// Conversation modes that happen somewhere, so the location field is shown
pub const LOCATION_MODES: [&str; 2] = ["one on one", "in group"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialFocus {
    PeopleSelector,
    Summary,
}

/// A new conversation starts by picking people; otherwise the summary is edited
pub fn initial_focus(is_create: bool, selected_people: usize) -> InitialFocus {
    if is_create && selected_people == 0 {
        InitialFocus::PeopleSelector
    } else {
        InitialFocus::Summary
    }
}

pub fn location_applies(mode: &str) -> bool {
    LOCATION_MODES.contains(&mode)
}

fn focus_effects(focus: InitialFocus) -> Vec<FormEffect> {
    match focus {
        InitialFocus::PeopleSelector => vec![
            FormEffect::OpenSelect(PEOPLE_FIELD.to_string()),
            FormEffect::FocusSelect(PEOPLE_FIELD.to_string()),
        ],
        InitialFocus::Summary => vec![FormEffect::FocusInput(SUMMARY_FIELD.to_string())],
    }
}

/// Location field for the given mode. `on_load` only ever reveals the field:
/// a freshly rendered hidden field is left untouched.
pub fn location_effects(mode: &str, on_load: bool) -> Vec<FormEffect> {
    if location_applies(mode) {
        vec![FormEffect::ShowAsText {
            name: LOCATION_FIELD.to_string(),
            class: "form-control",
        }]
    } else if on_load {
        Vec::new()
    } else {
        vec![FormEffect::HideAndClear(LOCATION_FIELD.to_string())]
    }
}

pub struct ConversationForm<P: FormPage> {
    page: P,
    is_create: bool,
}

impl<P: FormPage> ConversationForm<P> {
    pub fn new(page: P, is_create: bool) -> Self {
        Self { page, is_create }
    }

    /// Initial focus plus location visibility for the rendered mode
    pub fn init(&self) {
        let focus = initial_focus(self.is_create, self.page.selected_count(PEOPLE_FIELD));
        log::debug!("conversation form: create={}, focus={:?}", self.is_create, focus);
        self.page.apply_all(&focus_effects(focus));

        let mode = self.page.value(MODE_FIELD).unwrap_or_default();
        self.page.apply_all(&location_effects(&mode, true));
    }

    pub fn on_mode_change(&self, mode: &str) {
        self.page.apply_all(&location_effects(mode, false));
    }
}

impl<P: FormPage + 'static> ConversationForm<P> {
    /// Re-evaluate the location field whenever the mode select changes
    pub fn bind(self) {
        let Some(select) = dom::query_one(&format!("select[name=\"{}\"]", MODE_FIELD)) else {
            log::warn!("conversation form has no mode select");
            return;
        };
        dom::listen::<Event, _>(&select, "change", move |_| {
            let mode = self.page.value(MODE_FIELD).unwrap_or_default();
            self.on_mode_change(&mode);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::page::testing::MemoryPage;

    #[test]
    fn test_create_without_people_opens_selector() {
        let form = ConversationForm::new(MemoryPage::default(), true);
        form.init();
        let applied = form.page.applied.borrow();
        assert_eq!(
            applied[..2],
            [
                FormEffect::OpenSelect("people".into()),
                FormEffect::FocusSelect("people".into()),
            ]
        );
        assert!(!applied.contains(&FormEffect::FocusInput("summary".into())));
    }

    #[test]
    fn test_create_with_person_focuses_summary() {
        let page = MemoryPage::default().with_selected(PEOPLE_FIELD, 1);
        let form = ConversationForm::new(page, true);
        form.init();
        let applied = form.page.applied.borrow();
        assert_eq!(applied[0], FormEffect::FocusInput("summary".into()));
        assert!(!applied.contains(&FormEffect::OpenSelect("people".into())));
    }

    #[test]
    fn test_update_always_focuses_summary() {
        assert_eq!(initial_focus(false, 0), InitialFocus::Summary);
        assert_eq!(initial_focus(false, 3), InitialFocus::Summary);
        assert_eq!(initial_focus(true, 0), InitialFocus::PeopleSelector);
    }

    #[test]
    fn test_init_reveals_location_for_located_mode() {
        let page = MemoryPage::default().with_value(MODE_FIELD, "in group");
        let form = ConversationForm::new(page, false);
        form.init();
        assert!(form.page.is_text(LOCATION_FIELD));
    }

    #[test]
    fn test_mode_change_toggles_location() {
        let page = MemoryPage::default().with_value(LOCATION_FIELD, "Cafe");
        let form = ConversationForm::new(page, false);

        form.on_mode_change("one on one");
        assert!(form.page.is_text(LOCATION_FIELD));

        form.on_mode_change("phone");
        assert!(!form.page.is_text(LOCATION_FIELD));
        assert_eq!(form.page.value(LOCATION_FIELD), Some(String::new()));
    }

    #[test]
    fn test_location_effects_on_load_never_hide() {
        assert!(location_effects("email", true).is_empty());
        assert_eq!(
            location_effects("email", false),
            vec![FormEffect::HideAndClear("location".into())]
        );
    }
}
