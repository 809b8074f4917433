//! Thin helpers over `web_sys` for enhancing server-rendered markup

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget};

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// All elements matching `selector` under `root`, in document order
pub fn query_all(root: &impl AsRef<Element>, selector: &str) -> Vec<Element> {
    let Ok(list) = root.as_ref().query_selector_all(selector) else {
        log::warn!("invalid selector: {}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Same as [`query_all`], rooted at the document
pub fn query_document(selector: &str) -> Vec<Element> {
    match document().and_then(|d| d.document_element()) {
        Some(root) => query_all(&root, selector),
        None => Vec::new(),
    }
}

pub fn query_one(selector: &str) -> Option<Element> {
    document().and_then(|d| d.query_selector(selector).ok().flatten())
}

pub fn add_class(el: &Element, class: &str) {
    let _ = el.class_list().add_1(class);
}

pub fn remove_class(el: &Element, class: &str) {
    let _ = el.class_list().remove_1(class);
}

/// Attach a listener that lives as long as the page
pub fn listen<E, F>(target: &EventTarget, event: &str, handler: F)
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let mut handler = handler;
    let closure = Closure::wrap(Box::new(move |ev: Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(Event)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::error!("failed to attach '{}' listener: {:?}", event, e);
    }
    closure.forget();
}

/// Fire a bubbling DOM event so listeners on native controls see
/// changes made by enhanced widgets
pub fn dispatch(target: &EventTarget, event: &str) {
    let init = web_sys::EventInit::new();
    init.set_bubbles(true);
    if let Ok(ev) = Event::new_with_event_init_dict(event, &init) {
        let _ = target.dispatch_event(&ev);
    }
}

/// Run `f` once the document has been parsed
pub fn on_ready<F: FnOnce() + 'static>(f: F) {
    let Some(doc) = document() else {
        return;
    };
    if doc.ready_state() != "loading" {
        f();
        return;
    }
    let mut f = Some(f);
    listen::<Event, _>(doc.as_ref(), "DOMContentLoaded", move |_| {
        if let Some(f) = f.take() {
            f();
        }
    });
}
