//! Searchable dropdowns for `select.select2-enable` elements
//!
//! The native select stays in the form, hidden, and receives every change the
//! widget makes. Behaviors address the widgets by the select's `name`.

pub mod component;
pub mod state;

pub use component::EnhancedSelect;
pub use state::{SelectOption, SelectState};

use crate::shared::dom;
use crate::shared::page::focus_by_id;
use leptos::prelude::*;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlOptionElement, HtmlSelectElement};

pub const ENHANCED_SELECTOR: &str = "select.select2-enable";

/// Control surface of one mounted widget
#[derive(Clone)]
pub struct EnhancedSelectHandle {
    open: RwSignal<bool>,
    input_id: String,
}

impl EnhancedSelectHandle {
    fn new(input_id: String) -> Self {
        Self {
            open: RwSignal::new(false),
            input_id,
        }
    }

    pub fn open(&self) {
        self.open.set(true);
    }

    pub fn focus(&self) {
        focus_by_id(&self.input_id);
    }

    pub fn open_signal(&self) -> RwSignal<bool> {
        self.open
    }

    pub fn input_id(&self) -> &str {
        &self.input_id
    }
}

/// Widgets mounted on the page, keyed by the native select's `name`
#[derive(Clone, Default)]
pub struct EnhancedSelectRegistry {
    inner: Rc<RefCell<HashMap<String, EnhancedSelectHandle>>>,
}

impl EnhancedSelectRegistry {
    pub fn get(&self, name: &str) -> Option<EnhancedSelectHandle> {
        self.inner.borrow().get(name).cloned()
    }

    fn insert(&self, name: String, handle: EnhancedSelectHandle) {
        self.inner.borrow_mut().insert(name, handle);
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}

fn read_options(select: &HtmlSelectElement) -> Vec<SelectOption> {
    (0..select.length())
        .filter_map(|i| select.item(i))
        .filter_map(|el| el.dyn_into::<HtmlOptionElement>().ok())
        .map(|opt| SelectOption {
            value: opt.value(),
            label: opt.text().trim().to_string(),
            selected: opt.selected(),
        })
        .collect()
}

fn enhance(select: HtmlSelectElement, index: usize, registry: &EnhancedSelectRegistry) -> Result<(), String> {
    let document = dom::document().ok_or("no document")?;
    let name = select.name();
    if select.id().is_empty() {
        select.set_id(&format!("enhanced-select-{}", index));
    }
    let native_id = select.id();

    let container: HtmlElement = document
        .create_element("div")
        .map_err(|e| format!("create_element failed: {:?}", e))?
        .unchecked_into();
    container.set_class_name("enhanced-select-container");
    let native: &Element = select.as_ref();
    native
        .after_with_node_1(&container)
        .map_err(|e| format!("insert failed: {:?}", e))?;
    let _ = HtmlElement::style(&select).set_property("display", "none");

    let initial = SelectState::new(read_options(&select), select.multiple());
    let handle = EnhancedSelectHandle::new(format!("{}-search", native_id));
    let mounted = handle.clone();
    leptos::mount::mount_to(container, move || {
        view! { <EnhancedSelect native_id=native_id initial=initial handle=mounted /> }
    })
    .forget();

    if name.is_empty() {
        log::warn!("enhanced select #{} has no name", select.id());
    } else {
        registry.insert(name, handle);
    }
    Ok(())
}

/// Upgrade every marked select on the page
pub fn init(registry: &EnhancedSelectRegistry) {
    let selects = dom::query_document(ENHANCED_SELECTOR)
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlSelectElement>().ok());
    for (index, select) in selects.enumerate() {
        if let Err(e) = enhance(select, index, registry) {
            log::error!("failed to enhance select: {}", e);
        }
    }
    log::debug!("enhanced {} select(s)", registry.len());
}
