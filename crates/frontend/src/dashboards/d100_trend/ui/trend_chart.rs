use crate::dashboards::d100_trend::api;
use crate::dashboards::d100_trend::chart::{
    area_path, chart_period, legend_layout, ChartConfig, LegendLayout, PlotArea, SERIES_COLORS,
};
use crate::shared::config::AppConfig;
use crate::shared::dom;
use contracts::dashboards::d100_trend::{is_known_period, TrendResponse};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::Spinner;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement};

pub const CHART_CONTAINER_ID: &str = "trend-chart";

const VIEW_WIDTH: f64 = 800.0;
const TITLE_SPACE: f64 = 48.0;
const AXIS_SPACE: f64 = 56.0;
const LEGEND_SIDE_WIDTH: f64 = 150.0;
const LEGEND_BOTTOM_HEIGHT: f64 = 36.0;
const Y_TICKS: usize = 5;

/// SVG coordinate attribute
fn px(value: f64) -> String {
    format!("{:.1}", value)
}

fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(VIEW_WIDTH)
}

fn plot_area(config: &ChartConfig) -> PlotArea {
    let height = config.height as f64;
    match config.legend {
        LegendLayout::VerticalRight => PlotArea {
            left: AXIS_SPACE,
            top: TITLE_SPACE,
            width: VIEW_WIDTH - AXIS_SPACE - LEGEND_SIDE_WIDTH,
            height: height - TITLE_SPACE - AXIS_SPACE,
        },
        LegendLayout::HorizontalBottom => PlotArea {
            left: AXIS_SPACE,
            top: TITLE_SPACE,
            width: VIEW_WIDTH - AXIS_SPACE - 16.0,
            height: height - TITLE_SPACE - AXIS_SPACE - LEGEND_BOTTOM_HEIGHT,
        },
    }
}

fn legend_view(config: &ChartConfig, plot: &PlotArea) -> impl IntoView {
    let count = config.series.len().max(1) as f64;
    config
        .series
        .iter()
        .enumerate()
        .map(|(i, series)| {
            let (x, y) = match config.legend {
                LegendLayout::VerticalRight => (
                    plot.left + plot.width + 24.0,
                    plot.top + plot.height / 2.0 + (i as f64 - (count - 1.0) / 2.0) * 22.0,
                ),
                LegendLayout::HorizontalBottom => (
                    VIEW_WIDTH / 2.0 + (i as f64 - count / 2.0) * 140.0,
                    config.height as f64 - LEGEND_BOTTOM_HEIGHT / 2.0,
                ),
            };
            let color = SERIES_COLORS[i % SERIES_COLORS.len()];
            view! {
                <g class="trend-chart__legend-item">
                    <rect x=px(x) y=px(y - 6.0) width="12" height="12" rx="2" fill=color></rect>
                    <text x=px(x + 18.0) y=px(y + 5.0) font-size="13">{series.name.clone()}</text>
                </g>
            }
        })
        .collect_view()
}

fn chart_svg(config: ChartConfig) -> impl IntoView {
    let plot = plot_area(&config);
    let max = config.y_max();
    let bands = config.stacked_bands();
    let count = config.categories.len();
    // keep category labels readable on long ranges
    let label_every = (count / 12).max(1);

    let areas = bands
        .iter()
        .enumerate()
        .map(|(i, band)| {
            let color = SERIES_COLORS[i % SERIES_COLORS.len()];
            view! {
                <path d=area_path(band, &plot, max) fill=color fill-opacity="0.75" stroke=color stroke-width="1.5"></path>
            }
        })
        .collect_view();

    let y_ticks = (0..=Y_TICKS)
        .map(|step| {
            let value = max * step as f64 / Y_TICKS as f64;
            let y = plot.y_at(value, max);
            view! {
                <g class="trend-chart__y-tick">
                    <line x1=px(plot.left) x2=px(plot.left + plot.width) y1=px(y) y2=px(y) stroke="#e6e6e6"></line>
                    <text x=px(plot.left - 8.0) y=px(y + 4.0) text-anchor="end" font-size="11">
                        {format!("{}", value.round())}
                    </text>
                </g>
            }
        })
        .collect_view();

    let x_labels = config
        .categories
        .iter()
        .enumerate()
        .filter(|(i, _)| i % label_every == 0)
        .map(|(i, label)| {
            let x = plot.x_at(i, count);
            view! {
                <text x=px(x) y=px(plot.top + plot.height + 18.0) text-anchor="middle" font-size="11">
                    {label.clone()}
                </text>
            }
        })
        .collect_view();

    let legend = legend_view(&config, &plot);
    let height = config.height;
    let axis_title_y = plot.top + plot.height / 2.0;

    view! {
        <svg
            class="trend-chart__svg"
            viewBox=format!("0 0 {} {}", VIEW_WIDTH, height)
            width="100%"
            height=height.to_string()
            role="img"
        >
            <text x=px(VIEW_WIDTH / 2.0) y="28" text-anchor="middle" font-size="18">
                {config.title.clone()}
            </text>
            <text
                x="14"
                y=px(axis_title_y)
                text-anchor="middle"
                font-size="12"
                transform=format!("rotate(-90 14 {})", axis_title_y)
            >
                {config.y_axis_title.clone()}
            </text>
            {y_ticks}
            {areas}
            {x_labels}
            {legend}
        </svg>
    }
}

/// Stacked area chart of conversations and seeds per period bucket
#[component]
pub fn TrendChart(period: String, config: AppConfig) -> impl IntoView {
    let (data, set_data) = signal(None::<TrendResponse>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (width, set_width) = signal(viewport_width());

    let height = config.chart_height;
    let breakpoint = config.responsive_breakpoint;
    let period = StoredValue::new(period);
    let config = StoredValue::new(config);

    // Load data on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let period = period.get_value();
            let config = config.get_value();
            match api::get_trend(&config, &period).await {
                Ok(response) => {
                    set_data.set(Some(response));
                    set_loading.set(false);
                }
                Err(e) => {
                    log::error!("Failed to load trend for '{}': {}", period, e);
                    set_error.set(Some(e));
                    set_loading.set(false);
                }
            }
        });
    });

    // Legend placement follows the viewport
    Effect::new(move |_| {
        if let Some(window) = web_sys::window() {
            dom::listen::<Event, _>(&window, "resize", move |_| set_width.set(viewport_width()));
        }
    });

    view! {
        <div class="trend-chart" style=format!("min-height: {}px;", height)>
            {move || {
                if loading.get() {
                    view! {
                        <div class="trend-chart__loading">
                            <Spinner />
                        </div>
                    }
                    .into_any()
                } else if error.get().is_some() {
                    view! {
                        <div class="trend-chart__error alert alert-warning">
                            "Could not load chart data."
                        </div>
                    }
                    .into_any()
                } else {
                    let response = data.get().unwrap_or_default();
                    let layout = legend_layout(width.get(), breakpoint);
                    let chart = ChartConfig::trend(
                        response,
                        &period.get_value(),
                        height,
                        layout,
                    );
                    if chart.is_empty() {
                        view! {
                            <div class="trend-chart__empty">
                                <h4>{chart.title.clone()}</h4>
                                <p>"No conversations in this period yet."</p>
                            </div>
                        }
                        .into_any()
                    } else {
                        chart_svg(chart).into_any()
                    }
                }
            }}
        </div>
    }
}

/// Render the trend chart into `container`
pub fn make_chart(container: HtmlElement, period: String, config: AppConfig) {
    log::debug!("rendering trend chart for period '{}'", period);
    leptos::mount::mount_to(container, move || {
        view! { <TrendChart period=period config=config /> }
    })
    .forget();
}

/// Dashboard entry point: chart into `#trend-chart`, period from `data-period`
pub fn init(config: &AppConfig) {
    let Some(container) = dom::document().and_then(|d| d.get_element_by_id(CHART_CONTAINER_ID))
    else {
        log::warn!("dashboard has no #{} container", CHART_CONTAINER_ID);
        return;
    };
    let period = chart_period(container.get_attribute("data-period").as_deref());
    if !is_known_period(&period) {
        log::warn!("unknown chart period '{}', requesting it anyway", period);
    }
    match container.dyn_into::<HtmlElement>() {
        Ok(container) => make_chart(container, period, config.clone()),
        Err(_) => log::warn!("#{} is not an HTML element", CHART_CONTAINER_ID),
    }
}
