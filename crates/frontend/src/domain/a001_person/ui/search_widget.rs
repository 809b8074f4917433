use crate::domain::a001_person::api;
use crate::domain::a001_person::search::{
    navigate, open_mode, ClickModifiers, OpenMode, PageRequest, SearchResultItem, SearchSession,
    SearchStatus,
};
use crate::shared::config::AppConfig;
use crate::shared::dom;
use gloo_timers::future::TimeoutFuture;
use leptos::ev::KeyboardEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::Spinner;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

pub const MOUNT_SELECTOR: &str = "[data-people-search]";
const DEFAULT_PLACEHOLDER: &str = "Search people…";

/// Reactive state of one search box
#[derive(Clone, Copy)]
struct SearchState {
    config: StoredValue<AppConfig>,
    session: RwSignal<SearchSession>,
    open: RwSignal<bool>,
    highlighted: RwSignal<usize>,
    disabled: RwSignal<bool>,
}

impl SearchState {
    fn new(config: AppConfig) -> Self {
        Self {
            config: StoredValue::new(config),
            session: RwSignal::new(SearchSession::default()),
            open: RwSignal::new(false),
            highlighted: RwSignal::new(0),
            disabled: RwSignal::new(false),
        }
    }

    fn is_current(&self, generation: u64) -> bool {
        self.session.with_untracked(|s| s.is_current(generation))
    }

    fn on_input(self, raw: String) {
        let (min_len, debounce) = self
            .config
            .with_value(|c| (c.min_query_len, c.search_debounce_ms));
        let Some(request) = self
            .session
            .try_update(|s| s.input(&raw, min_len))
            .flatten()
        else {
            self.open.set(false);
            return;
        };
        self.open.set(true);
        spawn_local(async move {
            TimeoutFuture::new(debounce).await;
            if self.is_current(request.generation) {
                self.load(request).await;
            }
        });
    }

    fn load_more(self) {
        if let Some(request) = self.session.try_update(|s| s.more_request()).flatten() {
            spawn_local(self.load(request));
        }
    }

    async fn load(self, request: PageRequest) {
        let config = self.config.get_value();
        let result = api::search_people(&config, &request.term, request.page).await;
        if !self.is_current(request.generation) {
            log::debug!("dropping stale results for '{}'", request.term);
            return;
        }
        if let Err(e) = &result {
            log::error!("people search for '{}' failed: {}", request.term, e);
        }
        self.session.update(|s| {
            s.apply(&request, result);
        });
        if !request.append {
            self.highlighted.set(0);
        }
    }

    fn select(self, item: &SearchResultItem, mode: OpenMode) {
        navigate(&item.url, mode);
        self.open.set(false);
        self.disabled.set(true);
    }

    fn on_keydown(self, ev: KeyboardEvent) {
        let count = self.session.with_untracked(|s| s.items.len());
        match ev.key().as_str() {
            "ArrowDown" if count > 0 => {
                self.open.set(true);
                self.highlighted.update(|h| *h = (*h + 1).min(count - 1));
            }
            "ArrowUp" => self.highlighted.update(|h| *h = h.saturating_sub(1)),
            "Enter" => {
                ev.prevent_default();
                let chosen = self
                    .session
                    .with_untracked(|s| s.items.get(self.highlighted.get_untracked()).cloned());
                if let Some(item) = chosen {
                    self.select(&item, OpenMode::SameTab);
                }
            }
            "Escape" => self.open.set(false),
            _ => {}
        }
    }
}

/// Typeahead search over people that navigates to the chosen person
#[component]
pub fn PeopleSearch(config: AppConfig, #[prop(into)] placeholder: String) -> impl IntoView {
    let state = SearchState::new(config);

    view! {
        <div class="people-search" class:people-search--open=move || state.open.get()>
            <input
                class="people-search__input form-control"
                type="search"
                autocomplete="off"
                placeholder=placeholder
                prop:disabled=move || state.disabled.get()
                on:input=move |ev| state.on_input(event_target_value(&ev))
                on:keydown=move |ev| state.on_keydown(ev)
                on:focus=move |_| {
                    if !state.session.with_untracked(|s| s.items.is_empty()) {
                        state.open.set(true);
                    }
                }
                on:blur=move |_| state.open.set(false)
            />
            <Show when=move || state.open.get()>
                <ul class="people-search__results">
                    {move || {
                        state
                            .session
                            .with(|s| s.items.clone())
                            .into_iter()
                            .enumerate()
                            .map(|(pos, item)| {
                                let text = item.text.clone();
                                view! {
                                    <li
                                        class="people-search__result"
                                        class:people-search__result--highlighted=move || {
                                            state.highlighted.get() == pos
                                        }
                                        on:mousedown=move |ev| {
                                            let Some(mode) = open_mode(ClickModifiers::from(&ev))
                                            else {
                                                return;
                                            };
                                            // keep focus so blur does not close the list first
                                            ev.prevent_default();
                                            state.select(&item, mode);
                                        }
                                    >
                                        {text}
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                    {move || match state.session.with(|s| s.status.clone()) {
                        SearchStatus::Loading => view! {
                            <li class="people-search__status people-search__status--loading">
                                <Spinner />
                                {SearchStatus::Loading.message()}
                            </li>
                        }
                        .into_any(),
                        other => match other.message() {
                            Some(message) => view! {
                                <li
                                    class="people-search__status"
                                    class:people-search__status--error=matches!(other, SearchStatus::Failed(_))
                                >
                                    {message}
                                </li>
                            }
                            .into_any(),
                            None => view! { <></> }.into_any(),
                        },
                    }}
                    <Show when=move || {
                        state.session.with(|s| s.more && s.status == SearchStatus::Results)
                    }>
                        <li
                            class="people-search__more"
                            on:mousedown=move |ev| {
                                if ev.button() != 0 {
                                    return;
                                }
                                ev.prevent_default();
                                state.load_more();
                            }
                        >
                            "Load more results"
                        </li>
                    </Show>
                </ul>
            </Show>
        </div>
    }
}

/// Mount a search box into every `[data-people-search]` element
pub fn init(config: &AppConfig) {
    let mounts = dom::query_document(MOUNT_SELECTOR);
    for el in &mounts {
        let Ok(target) = el.clone().dyn_into::<HtmlElement>() else {
            continue;
        };
        let placeholder = el
            .get_attribute("data-placeholder")
            .unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string());
        let config = config.clone();
        leptos::mount::mount_to(target, move || {
            view! { <PeopleSearch config=config placeholder=placeholder /> }
        })
        .forget();
    }
    log::debug!("mounted {} people search box(es)", mounts.len());
}
