pub mod api;
pub mod search;
pub mod ui;

pub use ui::search_widget::PeopleSearch;
