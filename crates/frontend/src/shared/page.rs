//! Form page abstraction
//!
//! Behaviors decide *what* should happen as a list of [`FormEffect`]s; a
//! [`FormPage`] applies them. The browser implementation touches the DOM, the
//! in-memory one in tests just records state.

use crate::shared::dom;
use crate::shared::enhanced_select::EnhancedSelectRegistry;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, HtmlSelectElement};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEffect {
    /// Open the dropdown of an enhanced select
    OpenSelect(String),
    /// Move keyboard focus into an enhanced select
    FocusSelect(String),
    /// Focus an input and select its text
    FocusInput(String),
    /// Turn an input into a visible text field styled with `class`
    ShowAsText { name: String, class: &'static str },
    /// Turn an input into a hidden field, clearing its value
    HideAndClear(String),
}

pub trait FormPage {
    /// Current value of the control named `name` (first selected option for selects)
    fn value(&self, name: &str) -> Option<String>;
    /// Number of selected options of the select named `name`
    fn selected_count(&self, name: &str) -> usize;
    fn apply(&self, effect: &FormEffect);

    fn apply_all(&self, effects: &[FormEffect]) {
        for effect in effects {
            self.apply(effect);
        }
    }
}

/// [`FormPage`] over the live document
#[derive(Clone)]
pub struct BrowserPage {
    selects: EnhancedSelectRegistry,
}

impl BrowserPage {
    pub fn new(selects: EnhancedSelectRegistry) -> Self {
        Self { selects }
    }

    fn named(&self, tag: &str, name: &str) -> Option<web_sys::Element> {
        dom::query_one(&format!("{}[name=\"{}\"]", tag, name))
    }

    fn input(&self, name: &str) -> Option<HtmlInputElement> {
        self.named("input", name)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    }

    fn select(&self, name: &str) -> Option<HtmlSelectElement> {
        self.named("select", name)
            .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
    }
}

impl FormPage for BrowserPage {
    fn value(&self, name: &str) -> Option<String> {
        if let Some(select) = self.select(name) {
            return Some(select.value());
        }
        self.input(name).map(|input| input.value())
    }

    fn selected_count(&self, name: &str) -> usize {
        let Some(select) = self.select(name) else {
            return 0;
        };
        (0..select.length())
            .filter_map(|i| select.item(i))
            .filter_map(|el| el.dyn_into::<web_sys::HtmlOptionElement>().ok())
            .filter(|opt| opt.selected())
            .count()
    }

    fn apply(&self, effect: &FormEffect) {
        match effect {
            FormEffect::OpenSelect(name) => match self.selects.get(name) {
                Some(handle) => handle.open(),
                None => log::warn!("no enhanced select named '{}'", name),
            },
            FormEffect::FocusSelect(name) => match self.selects.get(name) {
                Some(handle) => handle.focus(),
                None => {
                    if let Some(select) = self.select(name) {
                        let _ = select.focus();
                    }
                }
            },
            FormEffect::FocusInput(name) => {
                if let Some(input) = self.input(name) {
                    input.select();
                    let _ = input.focus();
                }
            }
            FormEffect::ShowAsText { name, class } => {
                if let Some(input) = self.input(name) {
                    input.set_type("text");
                    dom::add_class(&input, class);
                }
            }
            FormEffect::HideAndClear(name) => {
                if let Some(input) = self.input(name) {
                    input.set_type("hidden");
                    input.set_value("");
                }
            }
        }
    }
}

/// Focus helper shared with enhanced selects
pub fn focus_by_id(id: &str) {
    if let Some(el) = dom::document().and_then(|d| d.get_element_by_id(id)) {
        if let Ok(el) = el.dyn_into::<HtmlElement>() {
            let _ = el.focus();
        }
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory page: control values plus a log of applied effects
    #[derive(Default)]
    pub struct MemoryPage {
        pub values: RefCell<HashMap<String, String>>,
        pub selected: HashMap<String, usize>,
        pub applied: RefCell<Vec<FormEffect>>,
        pub text_inputs: RefCell<Vec<String>>,
    }

    impl MemoryPage {
        pub fn with_value(mut self, name: &str, value: &str) -> Self {
            self.values.get_mut().insert(name.to_string(), value.to_string());
            self
        }

        pub fn with_selected(mut self, name: &str, count: usize) -> Self {
            self.selected.insert(name.to_string(), count);
            self
        }

        pub fn is_text(&self, name: &str) -> bool {
            self.text_inputs.borrow().iter().any(|n| n == name)
        }
    }

    impl FormPage for MemoryPage {
        fn value(&self, name: &str) -> Option<String> {
            self.values.borrow().get(name).cloned()
        }

        fn selected_count(&self, name: &str) -> usize {
            self.selected.get(name).copied().unwrap_or(0)
        }

        fn apply(&self, effect: &FormEffect) {
            match effect {
                FormEffect::ShowAsText { name, .. } => {
                    let mut inputs = self.text_inputs.borrow_mut();
                    if !inputs.contains(name) {
                        inputs.push(name.clone());
                    }
                }
                FormEffect::HideAndClear(name) => {
                    self.text_inputs.borrow_mut().retain(|n| n != name);
                    self.values.borrow_mut().insert(name.clone(), String::new());
                }
                _ => {}
            }
            self.applied.borrow_mut().push(effect.clone());
        }
    }
}
