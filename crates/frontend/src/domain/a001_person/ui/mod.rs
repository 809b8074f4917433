pub mod search_widget;
