//! SVG line chart for a date-keyed series.
//!
//! Points are ordered by date key. Each point carries a `<title>` so hovering
//! shows the date and value.

use leptos::prelude::*;

use crate::util::chart::{VIEW_HEIGHT, VIEW_WIDTH, grid_lines, plot_points, polyline_points, value_bounds};

const GRID_DIVISIONS: u32 = 4;

#[component]
pub fn TrendChart(
    title: &'static str,
    /// `(date, value)` pairs in display order.
    series: Vec<(String, f64)>,
    /// Stroke color of the line.
    color: &'static str,
) -> impl IntoView {
    let values: Vec<f64> = series.iter().map(|(_, v)| *v).collect();
    let (_, max) = value_bounds(&values);
    let points = polyline_points(&values);
    let markers = plot_points(&values)
        .into_iter()
        .zip(series)
        .map(|((x, y), (date, value))| {
            view! {
                <circle class="trend-chart__point" cx={format!("{x:.1}")} cy={format!("{y:.1}")} r="3" fill=color>
                    <title>{format!("{date}: {value}")}</title>
                </circle>
            }
        })
        .collect_view();
    let empty = values.is_empty();
    let view_box = format!("0 0 {VIEW_WIDTH} {VIEW_HEIGHT}");

    view! {
        <div class="trend-chart">
            <h3 class="trend-chart__title">{title}</h3>
            <Show when=move || !empty fallback=|| view! { <p class="trend-chart__empty">"No data available"</p> }>
                <span class="trend-chart__max">{format!("{max}")}</span>
            </Show>
            <svg class="trend-chart__svg" viewBox=view_box preserveAspectRatio="none" role="img" aria-label=title>
                {grid_lines(GRID_DIVISIONS)
                    .into_iter()
                    .map(|y| {
                        let y = format!("{y:.1}");
                        view! {
                            <line class="trend-chart__grid" x1="0" x2={VIEW_WIDTH.to_string()} y1={y.clone()} y2=y stroke-dasharray="3 3"></line>
                        }
                    })
                    .collect_view()}
                <polyline class="trend-chart__line" points=points fill="none" stroke=color stroke-width="2"></polyline>
                {markers}
            </svg>
        </div>
    }
}
