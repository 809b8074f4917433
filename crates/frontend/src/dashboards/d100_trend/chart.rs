//! Trend chart model: everything about the chart except drawing it
//!
//! `ChartConfig::trend` shapes the API response into series, title and legend
//! layout. The geometry helpers turn a config into SVG path data.

use contracts::dashboards::d100_trend::TrendResponse;

pub const SERIES_COLORS: [&str; 2] = ["#7cb5ec", "#434348"];
const DEFAULT_PERIOD: &str = "month";

/// Period from the container's `data-period`, falling back to a month
pub fn chart_period(attr: Option<&str>) -> String {
    match attr.map(str::trim) {
        Some(period) if !period.is_empty() => period.to_string(),
        _ => DEFAULT_PERIOD.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendLayout {
    /// Vertical list, right of the plot, vertically centered
    VerticalRight,
    /// Horizontal row, centered below the plot
    HorizontalBottom,
}

/// Narrow viewports stack the legend under the plot
pub fn legend_layout(viewport_width: f64, breakpoint: f64) -> LegendLayout {
    if viewport_width <= breakpoint {
        LegendLayout::HorizontalBottom
    } else {
        LegendLayout::VerticalRight
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub data: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub title: String,
    pub y_axis_title: String,
    pub height: u32,
    pub categories: Vec<String>,
    pub series: Vec<Series>,
    pub legend: LegendLayout,
}

pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn chart_title(period: &str) -> String {
    format!("Conversations by {}", capitalize(period))
}

/// Pad with zeros or truncate so every series has one value per category
fn fit(mut data: Vec<f64>, len: usize) -> Vec<f64> {
    data.resize(len, 0.0);
    data
}

impl ChartConfig {
    pub fn trend(data: TrendResponse, period: &str, height: u32, legend: LegendLayout) -> Self {
        let len = data.dates.len();
        Self {
            title: chart_title(period),
            y_axis_title: "Conversations".to_string(),
            height,
            series: vec![
                Series {
                    name: "Conversations".to_string(),
                    data: fit(data.conversations, len),
                },
                Series {
                    name: "Seeds".to_string(),
                    data: fit(data.seeds, len),
                },
            ],
            categories: data.dates,
            legend,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// (lower, upper) edge of every series at every category with normal stacking
    pub fn stacked_bands(&self) -> Vec<Vec<(f64, f64)>> {
        let mut base = vec![0.0; self.categories.len()];
        self.series
            .iter()
            .map(|series| {
                series
                    .data
                    .iter()
                    .zip(base.iter_mut())
                    .map(|(value, floor)| {
                        let lower = *floor;
                        *floor += value.max(0.0);
                        (lower, *floor)
                    })
                    .collect()
            })
            .collect()
    }

    /// Top of the y axis: the tallest stack rounded up to a readable value
    pub fn y_max(&self) -> f64 {
        let tallest = self
            .stacked_bands()
            .last()
            .map(|band| band.iter().map(|(_, upper)| *upper).fold(0.0, f64::max))
            .unwrap_or(0.0);
        nice_ceiling(tallest)
    }
}

pub fn nice_ceiling(value: f64) -> f64 {
    if value <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(value.log10().floor());
    [1.0, 2.0, 2.5, 5.0, 10.0]
        .iter()
        .map(|step| step * magnitude)
        .find(|candidate| *candidate >= value)
        .unwrap_or(10.0 * magnitude)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    /// Categories sit on tick marks, so the first and last touch the edges
    pub fn x_at(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.left + self.width / 2.0;
        }
        self.left + self.width * index as f64 / (count - 1) as f64
    }

    pub fn y_at(&self, value: f64, max: f64) -> f64 {
        let max = if max > 0.0 { max } else { 1.0 };
        self.top + self.height * (1.0 - value / max)
    }
}

/// Closed SVG path along the upper edge and back along the lower edge
pub fn area_path(band: &[(f64, f64)], plot: &PlotArea, max: f64) -> String {
    if band.is_empty() {
        return String::new();
    }
    let n = band.len();
    let mut d = String::new();
    for (i, (_, upper)) in band.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        d.push_str(&format!("{}{:.1},{:.1} ", cmd, plot.x_at(i, n), plot.y_at(*upper, max)));
    }
    for (i, (lower, _)) in band.iter().enumerate().rev() {
        d.push_str(&format!("L{:.1},{:.1} ", plot.x_at(i, n), plot.y_at(*lower, max)));
    }
    d.push('Z');
    d
}
