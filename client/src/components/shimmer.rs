//! Loading placeholders shaped like the dashboard and tenant list.

use leptos::prelude::*;

/// Bar heights (px) for the chart placeholders.
const CHART_BARS: [u32; 7] = [28, 44, 18, 36, 50, 24, 40];
const TENANT_PLACEHOLDERS: usize = 6;

#[component]
fn ShimmerBlock(#[prop(into)] class: String, #[prop(optional)] height_px: Option<u32>) -> impl IntoView {
    let style = height_px.map(|h| format!("height: {h}px"));
    view! { <div class={format!("shimmer {class}")} style=style></div> }
}

fn chart_placeholder(bars: usize) -> impl IntoView {
    view! {
        <div class="kpi-card shimmer-chart">
            <ShimmerBlock class="shimmer--title"/>
            <div class="shimmer-chart__bars">
                {CHART_BARS
                    .iter()
                    .take(bars)
                    .map(|h| view! { <ShimmerBlock class="shimmer--bar" height_px={*h}/> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn DashboardShimmer() -> impl IntoView {
    view! {
        <div class="dashboard dashboard--loading" aria-busy="true">
            <div class="dashboard__kpis">
                {(0..4)
                    .map(|_| {
                        view! {
                            <div class="kpi-card">
                                <ShimmerBlock class="shimmer--label"/>
                                <ShimmerBlock class="shimmer--value"/>
                                <ShimmerBlock class="shimmer--label"/>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="dashboard__charts">
                {chart_placeholder(6)}
                {chart_placeholder(7)}
            </div>
            <div class="dashboard__lists">
                {(0..2)
                    .map(|_| {
                        view! {
                            <div class="kpi-card">
                                <ShimmerBlock class="shimmer--title"/>
                                {(0..5).map(|_| view! { <ShimmerBlock class="shimmer--row"/> }).collect_view()}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn TenantsShimmer() -> impl IntoView {
    view! {
        <section class="tenants tenants--loading" aria-busy="true">
            <ShimmerBlock class="shimmer--heading"/>
            <div class="tenants__grid">
                {(0..TENANT_PLACEHOLDERS)
                    .map(|_| {
                        view! {
                            <div class="tenant-card">
                                <ShimmerBlock class="shimmer--title"/>
                                <ShimmerBlock class="shimmer--row"/>
                                <ShimmerBlock class="shimmer--row"/>
                                <ShimmerBlock class="shimmer--button"/>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
