//! Button groups acting as radio inputs for list filters
//!
//! Markup:
//! ```html
//! <form>
//!   <input type="hidden" name="date">
//!   <div class="btn-group" data-input="date">
//!     <button type="button" class="btn btn-default" data-value="week">Week</button>
//!     ...
//!   </div>
//!   <button type="submit" class="btn btn-default">Filter</button>
//! </form>
//! ```
//! Clicking a button selects it, copies its `data-value` into the hidden
//! input and submits the form.

use crate::shared::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlFormElement, HtmlInputElement, MouseEvent};

pub const GROUP_SELECTOR: &str = ".btn-group[data-input]";
pub const BUTTON_SELECTOR: &str = "[data-value]";
pub const SELECTED_CLASS: &str = "btn-primary";
pub const UNSELECTED_CLASS: &str = "btn-default";
pub const SUBMIT_ACTIVE_CLASS: &str = "btn-primary";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonGroupState {
    /// `data-value` of each button, in document order
    pub values: Vec<String>,
    pub selected: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonGroupEffect {
    MarkButton { index: usize, selected: bool },
    SetHiddenValue(String),
    ActivateSubmit,
    SubmitForm,
}

impl ButtonGroupState {
    pub fn new(values: Vec<String>, selected: Option<usize>) -> Self {
        Self { values, selected }
    }

    /// Click on button `index`
    pub fn click(&self, index: usize) -> (ButtonGroupState, Vec<ButtonGroupEffect>) {
        let Some(value) = self.values.get(index) else {
            return (self.clone(), Vec::new());
        };
        let mut effects: Vec<ButtonGroupEffect> = (0..self.values.len())
            .map(|i| ButtonGroupEffect::MarkButton {
                index: i,
                selected: i == index,
            })
            .collect();
        effects.push(ButtonGroupEffect::SetHiddenValue(value.clone()));
        effects.push(ButtonGroupEffect::ActivateSubmit);
        effects.push(ButtonGroupEffect::SubmitForm);
        let next = ButtonGroupState {
            values: self.values.clone(),
            selected: Some(index),
        };
        (next, effects)
    }
}

struct GroupElements {
    buttons: Vec<Element>,
    hidden: Option<HtmlInputElement>,
    submit: Option<Element>,
    form: Option<HtmlFormElement>,
}

impl GroupElements {
    fn apply(&self, effect: &ButtonGroupEffect) {
        match effect {
            ButtonGroupEffect::MarkButton { index, selected } => {
                if let Some(button) = self.buttons.get(*index) {
                    if *selected {
                        dom::remove_class(button, UNSELECTED_CLASS);
                        dom::add_class(button, SELECTED_CLASS);
                    } else {
                        dom::remove_class(button, SELECTED_CLASS);
                        dom::add_class(button, UNSELECTED_CLASS);
                    }
                }
            }
            ButtonGroupEffect::SetHiddenValue(value) => match &self.hidden {
                Some(hidden) => hidden.set_value(value),
                None => log::warn!("button group has no hidden input"),
            },
            ButtonGroupEffect::ActivateSubmit => {
                if let Some(submit) = &self.submit {
                    dom::remove_class(submit, UNSELECTED_CLASS);
                    dom::add_class(submit, SUBMIT_ACTIVE_CLASS);
                }
            }
            ButtonGroupEffect::SubmitForm => {
                if let Some(form) = &self.form {
                    if let Err(e) = form.submit() {
                        log::error!("form submit failed: {:?}", e);
                    }
                }
            }
        }
    }
}

fn bind_group(group: &Element) {
    let Some(input_name) = group.get_attribute("data-input") else {
        return;
    };
    let buttons = dom::query_all(group, BUTTON_SELECTOR);
    let values = buttons
        .iter()
        .map(|b| b.get_attribute("data-value").unwrap_or_default())
        .collect();
    let selected = buttons
        .iter()
        .position(|b| b.class_list().contains(SELECTED_CLASS));

    let form = group
        .closest("form")
        .ok()
        .flatten()
        .and_then(|f| f.dyn_into::<HtmlFormElement>().ok());
    let hidden = form
        .as_ref()
        .and_then(|f| {
            f.query_selector(&format!("input[name=\"{}\"]", input_name))
                .ok()
                .flatten()
        })
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
    let submit = form
        .as_ref()
        .and_then(|f| f.query_selector("[type=\"submit\"]").ok().flatten());

    let elements = Rc::new(GroupElements {
        buttons: buttons.clone(),
        hidden,
        submit,
        form,
    });
    let state = Rc::new(RefCell::new(ButtonGroupState::new(values, selected)));

    for (index, button) in buttons.iter().enumerate() {
        let elements = Rc::clone(&elements);
        let state = Rc::clone(&state);
        dom::listen::<MouseEvent, _>(button, "click", move |ev| {
            ev.prevent_default();
            let (next, effects) = state.borrow().click(index);
            *state.borrow_mut() = next;
            for effect in &effects {
                elements.apply(effect);
            }
        });
    }
}

/// Bind every button group on the page
pub fn init() {
    let groups = dom::query_document(GROUP_SELECTOR);
    for group in &groups {
        bind_group(group);
    }
    log::debug!("bound {} button group(s)", groups.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modes() -> ButtonGroupState {
        ButtonGroupState::new(
            vec!["".into(), "one on one".into(), "in group".into()],
            Some(0),
        )
    }

    #[test]
    fn test_click_selects_exactly_one() {
        let (next, effects) = modes().click(1);
        assert_eq!(next.selected, Some(1));
        let marked: Vec<usize> = effects
            .iter()
            .filter_map(|e| match e {
                ButtonGroupEffect::MarkButton { index, selected: true } => Some(*index),
                _ => None,
            })
            .collect();
        assert_eq!(marked, vec![1]);
        let unmarked = effects
            .iter()
            .filter(|e| matches!(e, ButtonGroupEffect::MarkButton { selected: false, .. }))
            .count();
        assert_eq!(unmarked, 2);
    }

    #[test]
    fn test_click_copies_value_then_submits() {
        let (_, effects) = modes().click(2);
        let tail = &effects[effects.len() - 3..];
        assert_eq!(
            tail,
            &[
                ButtonGroupEffect::SetHiddenValue("in group".into()),
                ButtonGroupEffect::ActivateSubmit,
                ButtonGroupEffect::SubmitForm,
            ]
        );
    }

    #[test]
    fn test_click_out_of_range_is_ignored() {
        let (next, effects) = modes().click(7);
        assert_eq!(next, modes());
        assert!(effects.is_empty());
    }
}
