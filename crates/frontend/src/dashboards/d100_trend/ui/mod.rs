pub mod trend_chart;
