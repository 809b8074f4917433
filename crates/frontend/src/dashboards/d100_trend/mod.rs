pub mod api;
pub mod chart;
pub mod ui;

pub use ui::trend_chart::{make_chart, TrendChart};
