use super::state::{key_opens_dropdown, SelectState};
use super::EnhancedSelectHandle;
use crate::shared::dom;
use leptos::ev::KeyboardEvent;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlOptionElement, HtmlSelectElement};

/// Mirror the widget selection back into the hidden native select so the form
/// posts it, then notify listeners bound to the native control.
fn sync_native(native_id: &str, values: &[String]) {
    let Some(select) = dom::document()
        .and_then(|d| d.get_element_by_id(native_id))
        .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
    else {
        log::warn!("native select #{} disappeared", native_id);
        return;
    };
    for i in 0..select.length() {
        if let Some(opt) = select
            .item(i)
            .and_then(|el| el.dyn_into::<HtmlOptionElement>().ok())
        {
            opt.set_selected(values.contains(&opt.value()));
        }
    }
    dom::dispatch(&select, "change");
}

/// Searchable dropdown replacing a native `<select>`
#[component]
pub fn EnhancedSelect(
    /// Id of the hidden native select kept in sync
    native_id: String,
    initial: SelectState,
    handle: EnhancedSelectHandle,
) -> impl IntoView {
    let multiple = initial.multiple;
    let state = RwSignal::new(initial);
    let open = handle.open_signal();
    let native_id = StoredValue::new(native_id);
    let highlighted = RwSignal::new(0usize);

    let pick = move |index: usize| {
        let close = state.try_update(|s| s.pick(index)).unwrap_or(false);
        let values = state.with_untracked(|s| s.selected_values());
        native_id.with_value(|id| sync_native(id, &values));
        highlighted.set(0);
        if close {
            open.set(false);
        }
    };

    let deselect = move |index: usize| {
        state.update(|s| s.deselect(index));
        let values = state.with_untracked(|s| s.selected_values());
        native_id.with_value(|id| sync_native(id, &values));
    };

    let on_keydown = move |ev: KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            // never submit the surrounding form from the search box
            ev.prevent_default();
            if open.get_untracked() {
                let visible = state.with_untracked(|s| s.visible());
                if let Some(index) = visible.get(highlighted.get_untracked()) {
                    pick(*index);
                }
            }
        }
        "ArrowDown" => {
            let count = state.with_untracked(|s| s.visible().len());
            open.set(true);
            if count > 0 {
                highlighted.update(|h| *h = (*h + 1).min(count - 1));
            }
        }
        "ArrowUp" => highlighted.update(|h| *h = h.saturating_sub(1)),
        "Escape" => open.set(false),
        _ => {}
    };

    let on_keyup = move |ev: KeyboardEvent| {
        if key_opens_dropdown(multiple, &ev.key()) {
            open.set(true);
        }
    };

    let placeholder = if multiple { "Type to search…" } else { "" };

    view! {
        <div
            class="enhanced-select"
            class:enhanced-select--open=move || open.get()
            class:enhanced-select--multiple=multiple
            style="width: 100%;"
        >
            <div class="enhanced-select__selection">
                {move || {
                    if multiple {
                        state.with(|s| {
                            s.selected()
                                .into_iter()
                                .map(|index| {
                                    let label = s.options[index].label.clone();
                                    view! {
                                        <span class="enhanced-select__chip">
                                            {label}
                                            <span
                                                class="enhanced-select__chip-remove"
                                                on:mousedown=move |ev| {
                                                    ev.prevent_default();
                                                    deselect(index);
                                                }
                                            >
                                                "×"
                                            </span>
                                        </span>
                                    }
                                })
                                .collect_view()
                        })
                        .into_any()
                    } else {
                        let label = state.with(|s| s.display_label());
                        view! {
                            <span
                                class="enhanced-select__label"
                                on:mousedown=move |_| open.update(|o| *o = !*o)
                            >
                                {label}
                            </span>
                        }
                        .into_any()
                    }
                }}
            </div>
            <input
                id=handle.input_id().to_string()
                class="enhanced-select__search form-control"
                type="text"
                autocomplete="off"
                placeholder=placeholder
                prop:value=move || state.with(|s| s.query.clone())
                on:input=move |ev| {
                    let query = event_target_value(&ev);
                    state.update(|s| s.query = query);
                    highlighted.set(0);
                    open.set(true);
                }
                on:click=move |_| open.set(true)
                on:keydown=on_keydown
                on:keyup=on_keyup
                on:blur=move |_| open.set(false)
            />
            <Show when=move || open.get()>
                <ul class="enhanced-select__results">
                    {move || {
                        let visible = state.with(|s| s.visible());
                        if visible.is_empty() {
                            return view! {
                                <li class="enhanced-select__result enhanced-select__result--empty">
                                    "No results found"
                                </li>
                            }
                            .into_any();
                        }
                        visible
                            .into_iter()
                            .enumerate()
                            .map(|(pos, index)| {
                                let (label, selected) = state
                                    .with(|s| (s.options[index].label.clone(), s.options[index].selected));
                                view! {
                                    <li
                                        class="enhanced-select__result"
                                        class:enhanced-select__result--selected=selected
                                        class:enhanced-select__result--highlighted=move || highlighted.get() == pos
                                        on:mousedown=move |ev| {
                                            // keep focus in the search box
                                            ev.prevent_default();
                                            pick(index);
                                        }
                                    >
                                        {label}
                                    </li>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </ul>
            </Show>
        </div>
    }
}
