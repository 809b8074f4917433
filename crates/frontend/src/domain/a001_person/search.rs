//! Typeahead people search: result shaping and selection rules

use contracts::domain::a001_person::{PeopleSearchResponse, PersonHit};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResultItem {
    pub id: String,
    pub name: String,
    /// Page the result navigates to
    pub url: String,
    /// Label rendered in the dropdown
    pub text: String,
}

impl From<PersonHit> for SearchResultItem {
    fn from(hit: PersonHit) -> Self {
        Self {
            url: person_url(&hit.id),
            text: hit.name.clone(),
            id: hit.id,
            name: hit.name,
        }
    }
}

pub fn person_url(id: &str) -> String {
    format!("/people/{}", id)
}

/// One page of results plus whether another page can be requested
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPage {
    pub items: Vec<SearchResultItem>,
    pub more: bool,
    pub page: u32,
}

pub fn map_response(response: PeopleSearchResponse, requested_page: u32) -> SearchPage {
    SearchPage {
        page: response.page.unwrap_or(requested_page),
        more: response.more_results,
        items: response.people.into_iter().map(SearchResultItem::from).collect(),
    }
}

/// Trimmed term, or None when it is too short to search
pub fn normalize_query(raw: &str, min_len: usize) -> Option<String> {
    let term = raw.trim();
    if term.chars().count() >= min_len.max(1) {
        Some(term.to_string())
    } else {
        None
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchStatus {
    #[default]
    Idle,
    Loading,
    Results,
    Empty,
    Failed(String),
}

impl SearchStatus {
    pub fn after_page(page: &SearchPage, accumulated: usize) -> Self {
        if page.items.is_empty() && accumulated == 0 {
            SearchStatus::Empty
        } else {
            SearchStatus::Results
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            SearchStatus::Loading => Some("Searching…"),
            SearchStatus::Empty => Some("No results found"),
            SearchStatus::Failed(_) => Some("Search failed. Please try again."),
            SearchStatus::Idle | SearchStatus::Results => None,
        }
    }
}

/// Fetch the widget should issue next
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub generation: u64,
    pub term: String,
    pub page: u32,
    pub append: bool,
}

/// Results of one search box across keystrokes and "load more" pages.
///
/// Every input bumps the generation; responses carrying an older generation
/// are dropped so a slow reply never overwrites a newer term's results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchSession {
    generation: u64,
    term: String,
    pub items: Vec<SearchResultItem>,
    pub status: SearchStatus,
    pub more: bool,
    pub page: u32,
}

impl SearchSession {
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// New text in the box. A term below `min_len` clears the results.
    pub fn input(&mut self, raw: &str, min_len: usize) -> Option<PageRequest> {
        self.generation += 1;
        self.more = false;
        let Some(term) = normalize_query(raw, min_len) else {
            self.term.clear();
            self.items.clear();
            self.status = SearchStatus::Idle;
            self.page = 0;
            return None;
        };
        self.term = term.clone();
        self.status = SearchStatus::Loading;
        Some(PageRequest {
            generation: self.generation,
            term,
            page: 1,
            append: false,
        })
    }

    /// Next page of the current term, if the server said there is one
    pub fn more_request(&mut self) -> Option<PageRequest> {
        if !self.more || self.status == SearchStatus::Loading {
            return None;
        }
        self.status = SearchStatus::Loading;
        Some(PageRequest {
            generation: self.generation,
            term: self.term.clone(),
            page: self.page + 1,
            append: true,
        })
    }

    /// Fold a response in. Returns false when it belongs to an older input.
    pub fn apply(
        &mut self,
        request: &PageRequest,
        result: Result<PeopleSearchResponse, String>,
    ) -> bool {
        if !self.is_current(request.generation) {
            return false;
        }
        match result {
            Ok(response) => {
                let mapped = map_response(response, request.page);
                let accumulated = if request.append { self.items.len() } else { 0 };
                self.status = SearchStatus::after_page(&mapped, accumulated);
                self.more = mapped.more;
                self.page = mapped.page;
                if request.append {
                    self.items.extend(mapped.items);
                } else {
                    self.items = mapped.items;
                }
            }
            Err(e) => {
                self.more = false;
                self.status = SearchStatus::Failed(e);
            }
        }
        true
    }
}

/// Modifier state of the click that selected a result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickModifiers {
    pub ctrl: bool,
    pub meta: bool,
    /// `MouseEvent.button`: 0 primary, 1 middle
    pub button: i16,
}

impl From<&web_sys::MouseEvent> for ClickModifiers {
    fn from(ev: &web_sys::MouseEvent) -> Self {
        Self {
            ctrl: ev.ctrl_key(),
            meta: ev.meta_key(),
            button: ev.button(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    SameTab,
    NewTab,
}

/// Primary click navigates in place, ctrl-/meta-primary and middle click open
/// a new tab. Any other button (the context menu one) selects nothing.
pub fn open_mode(modifiers: ClickModifiers) -> Option<OpenMode> {
    match modifiers.button {
        0 if modifiers.ctrl || modifiers.meta => Some(OpenMode::NewTab),
        0 => Some(OpenMode::SameTab),
        1 => Some(OpenMode::NewTab),
        _ => None,
    }
}

pub fn navigate(url: &str, mode: OpenMode) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let result = match mode {
        OpenMode::NewTab => window.open_with_url_and_target(url, "_blank").map(|_| ()),
        OpenMode::SameTab => window.location().set_href(url),
    };
    if let Err(e) = result {
        log::error!("navigation to {} failed: {:?}", url, e);
    }
}
