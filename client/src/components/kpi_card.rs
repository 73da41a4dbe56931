//! Single headline metric on the dashboard.

use leptos::prelude::*;

#[component]
pub fn KpiCard(
    title: &'static str,
    icon: &'static str,
    value: String,
    /// Change label such as `↑ 4.2%`; omitted for metrics without a trend.
    #[prop(optional)]
    change: Option<String>,
) -> impl IntoView {
    view! {
        <div class="kpi-card">
            <div class="kpi-card__header">
                <p class="kpi-card__title">{title}</p>
                <span class="kpi-card__icon" aria-hidden="true">{icon}</span>
            </div>
            <h2 class="kpi-card__value">{value}</h2>
            {change.map(|label| view! { <p class="kpi-card__change">{label}</p> })}
        </div>
    }
}
