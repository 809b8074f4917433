pub mod api_utils;
pub mod button_group;
pub mod config;
pub mod dom;
pub mod enhanced_select;
pub mod page;
