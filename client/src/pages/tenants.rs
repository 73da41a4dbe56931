//! Admin store list with a read-only details modal.

use leptos::prelude::*;

use crate::components::shimmer::TenantsShimmer;
use crate::components::tenant_card::{TenantCard, TenantDetailsModal};
use crate::components::toaster::notify_error;
use crate::net::types::Tenant;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;

#[component]
pub fn TenantsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let tenants = RwSignal::new(Vec::<Tenant>::new());
    let loading = RwSignal::new(true);
    let selected = RwSignal::new(None::<Tenant>);
    let is_admin = move || auth.with(|a| a.session.as_ref().is_some_and(|s| s.is_admin()));

    Effect::new(move || {
        let Some(session) = auth.with_untracked(|a| a.session.clone()) else {
            notify_error(toasts, "No auth token found. Please login again.");
            loading.set(false);
            return;
        };
        if !session.is_admin() {
            loading.set(false);
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_tenants(&session).await {
                Ok(list) => tenants.set(list),
                Err(e) => {
                    leptos::logging::warn!("tenant list failed: {e}");
                    notify_error(toasts, "Failed to fetch tenants");
                }
            }
            loading.set(false);
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session;
            loading.set(false);
        }
    });

    let on_view = Callback::new(move |tenant: Tenant| selected.set(Some(tenant)));
    let on_close = Callback::new(move |()| selected.set(None));

    move || {
        if loading.get() {
            return view! { <TenantsShimmer/> }.into_any();
        }
        if !is_admin() {
            return view! { <div class="tenants__denied">"You don’t have access to view tenants."</div> }.into_any();
        }
        view! {
            <section class="tenants">
                <h1 class="tenants__title">"Stores"</h1>
                <div class="tenants__grid">
                    <For
                        each=move || tenants.get()
                        key=|tenant| tenant.id.clone()
                        children=move |tenant: Tenant| view! { <TenantCard tenant=tenant on_view=on_view/> }
                    />
                </div>
                {move || selected.get().map(|tenant| view! { <TenantDetailsModal tenant=tenant on_close=on_close/> })}
            </section>
        }
        .into_any()
    }
}
