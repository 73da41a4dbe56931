//! Tenant dashboard: KPIs, trend charts, top customers and top products.
//!
//! SYSTEM CONTEXT
//! ==============
//! The summary reloads whenever the date range changes. "Apply" reloads
//! with the current range, "Clear" restores the default 30-day window, and
//! "Sync & Refresh" asks the backend to pull fresh Shopify data first.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::kpi_card::KpiCard;
use crate::components::shimmer::DashboardShimmer;
use crate::components::toaster::notify_error;
#[cfg(feature = "hydrate")]
use crate::components::toaster::notify_success;
use crate::components::trend_chart::TrendChart;
use crate::net::types::{DashboardSummary, TopCustomer, TopProduct};
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::format::{DateRange, change_percent, money, stock_label};

const REVENUE_COLOR: &str = "#4ade80";
const ORDERS_COLOR: &str = "#60a5fa";
const NO_TENANT: &str = "No tenant data found. Please login again.";

/// Chart series in date order.
pub fn series(points: &std::collections::BTreeMap<String, f64>) -> Vec<(String, f64)> {
    points.iter().map(|(date, value)| (date.clone(), *value)).collect()
}

pub fn price_and_stock(product: &TopProduct) -> String {
    format!("${} | {}", product.unit_price, stock_label(product.stock))
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let range = RwSignal::new(DateRange::default_for_today());
    let data = RwSignal::new(None::<DashboardSummary>);
    let loading = RwSignal::new(true);
    let syncing = RwSignal::new(false);

    let fetch = move || {
        let session = auth.with_untracked(|a| a.session.clone());
        let Some((session, tenant_id)) = session.and_then(|s| s.tenant_id().map(|id| (s, id))) else {
            notify_error(toasts, NO_TENANT);
            loading.set(false);
            return;
        };
        let window = range.get_untracked();
        loading.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_dashboard(&session, &tenant_id, &window).await {
                Ok(summary) => data.set(Some(summary)),
                Err(e) => {
                    leptos::logging::warn!("dashboard load failed: {e}");
                    notify_error(toasts, "Failed to load dashboard data");
                }
            }
            loading.set(false);
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, tenant_id, window, data);
            loading.set(false);
        }
    };

    Effect::new(move || {
        range.track();
        fetch();
    });

    let on_sync = move |_| {
        if syncing.get() {
            return;
        }
        let Some(session) = auth.with_untracked(|a| a.session.clone()) else {
            return;
        };
        syncing.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::sync_tenant(&session).await {
                Ok(()) => {
                    notify_success(toasts, "Data synced successfully!");
                    fetch();
                }
                Err(e) => {
                    leptos::logging::warn!("tenant sync failed: {e}");
                    notify_error(toasts, "Failed to sync data");
                }
            }
            syncing.set(false);
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session;
            syncing.set(false);
        }
    };

    view! {
        <div class="dashboard">
            <div class="dashboard__toolbar">
                <div class="dashboard__filters">
                    <label class="dashboard__field">
                        <span>"From"</span>
                        <input
                            type="date"
                            prop:value=move || range.get().from_param()
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                range.update(|r| {
                                    r.set_from(&value);
                                });
                            }
                        />
                    </label>
                    <label class="dashboard__field">
                        <span>"To"</span>
                        <input
                            type="date"
                            prop:value=move || range.get().to_param()
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                range.update(|r| {
                                    r.set_to(&value);
                                });
                            }
                        />
                    </label>
                    <div class="dashboard__filter-actions">
                        <button class="btn btn--primary" on:click=move |_| fetch()>"Apply"</button>
                        <button class="btn btn--muted" on:click=move |_| range.set(DateRange::default_for_today())>
                            "Clear"
                        </button>
                    </div>
                </div>
                <button class="btn btn--secondary" disabled=move || syncing.get() on:click=on_sync>
                    {move || if syncing.get() { "Syncing..." } else { "Sync & Refresh" }}
                </button>
            </div>

            {move || {
                if loading.get() {
                    return view! { <DashboardShimmer/> }.into_any();
                }
                match data.get() {
                    Some(summary) => summary_view(summary).into_any(),
                    None => view! { <div class="dashboard__empty">"No data available"</div> }.into_any(),
                }
            }}
        </div>
    }
}

fn summary_view(summary: DashboardSummary) -> impl IntoView {
    let revenue = series(&summary.revenue_trend);
    let orders = series(&summary.orders_by_day);

    view! {
        <div class="dashboard__kpis">
            <KpiCard
                title="Total Revenue"
                icon="$"
                value=money(summary.total_revenue)
                change=change_percent(summary.total_revenue_change_percent)
            />
            <KpiCard
                title="Total Orders"
                icon="🛒"
                value=summary.total_orders.to_string()
                change=change_percent(summary.total_orders_change_percent)
            />
            <KpiCard
                title="Total Customers"
                icon="👥"
                value=summary.total_customers.to_string()
                change=change_percent(summary.total_customers_change_percent)
            />
            <KpiCard title="Products" icon="📦" value=summary.total_products.to_string()/>
        </div>
        <div class="dashboard__charts">
            <TrendChart title="Revenue Trend" series=revenue color=REVENUE_COLOR/>
            <TrendChart title="Orders by Day" series=orders color=ORDERS_COLOR/>
        </div>
        <div class="dashboard__lists">
            <div class="kpi-card">
                <h3 class="dashboard__list-title">"Top Customers"</h3>
                <ul class="dashboard__list">
                    {summary.top_customers.into_iter().map(customer_row).collect_view()}
                </ul>
            </div>
            <div class="kpi-card">
                <h3 class="dashboard__list-title">"Top Products"</h3>
                <ul class="dashboard__list">
                    {summary.top_products.into_iter().map(product_row).collect_view()}
                </ul>
            </div>
        </div>
    }
}

fn customer_row(customer: TopCustomer) -> impl IntoView {
    view! {
        <li class="dashboard__row">
            <div class="dashboard__row-main">
                <p class="dashboard__row-title">{customer.name}</p>
                <p class="dashboard__row-sub">{customer.email}</p>
            </div>
            <div class="dashboard__row-side">
                <p class="dashboard__row-title">{money(customer.total_spent)}</p>
                <p class="dashboard__row-sub">{format!("{} orders", customer.orders_count)}</p>
            </div>
        </li>
    }
}

fn product_row(product: TopProduct) -> impl IntoView {
    let detail = price_and_stock(&product);
    view! {
        <li class="dashboard__row">
            <div class="dashboard__row-main">
                {product
                    .image_src
                    .clone()
                    .map(|src| view! { <img class="dashboard__thumb" src=src alt=product.title.clone()/> })}
                <div>
                    <p class="dashboard__row-title">{product.title.clone()}</p>
                    <p class="dashboard__row-sub">{detail}</p>
                </div>
            </div>
            <div class="dashboard__row-side">
                <p class="dashboard__row-title">{format!("{} sold", product.quantity_sold)}</p>
                <p class="dashboard__row-sub">{money(product.revenue)}</p>
            </div>
        </li>
    }
}
