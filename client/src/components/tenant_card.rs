//! Store card for the admin tenant list, plus the read-only details modal.

use leptos::prelude::*;

use crate::net::types::Tenant;
use crate::util::format::truncate_url;

#[component]
pub fn TenantCard(tenant: Tenant, on_view: Callback<Tenant>) -> impl IntoView {
    let short_url = truncate_url(&tenant.shopify_base_url);
    let shop_name = tenant.shop_name.clone();
    let tenant_id = tenant.tenant_id.clone();

    view! {
        <div class="tenant-card">
            <div class="tenant-card__header">
                <span class="tenant-card__icon" aria-hidden="true">"🏬"</span>
                <h2 class="tenant-card__name">{shop_name}</h2>
            </div>
            <dl class="tenant-card__fields">
                <div class="tenant-card__row">
                    <dt>"Status"</dt>
                    <dd><span class="tenant-card__status">"Active"</span></dd>
                </div>
                <div>
                    <dt>"Tenant ID"</dt>
                    <dd class="tenant-card__value">{tenant_id}</dd>
                </div>
                <div>
                    <dt>"Shopify URL"</dt>
                    <dd class="tenant-card__value">{short_url}</dd>
                </div>
            </dl>
            <button class="tenant-card__view" on:click=move |_| on_view.run(tenant.clone())>
                "👁 View"
            </button>
        </div>
    }
}

#[component]
pub fn TenantDetailsModal(tenant: Tenant, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog tenant-details"
                role="dialog"
                aria-modal="true"
                on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
            >
                <div class="dialog__header">
                    <h2 class="dialog__title">"Tenant Details"</h2>
                    <button class="dialog__close" aria-label="Close" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </div>
                <div class="tenant-details__body">
                    <p class="tenant-details__name">{tenant.shop_name}</p>
                    <p>{format!("Tenant ID: {}", tenant.tenant_id)}</p>
                    <p>{format!("Shopify URL: {}", tenant.shopify_base_url)}</p>
                </div>
            </div>
        </div>
    }
}
