//! Signed-in shell: role-aware sidebar plus the nested dashboard/tenant view.
//!
//! ARCHITECTURE
//! ============
//! `MainLayout` is the parent route view under `/mainLayout` and renders the
//! matched child through `<Outlet/>`. Every child path resolves to
//! `LayoutContent`, which picks the page from the role and the remaining
//! path via `guard::layout_page`.

#[cfg(test)]
#[path = "main_layout_test.rs"]
mod main_layout_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate};

use super::dashboard::DashboardPage;
use super::tenants::TenantsPage;
use crate::components::theme_toggle::ThemeToggle;
use crate::components::toaster::notify_success;
use crate::state::auth::AuthState;
use crate::state::session::Role;
use crate::state::toast::ToastState;
use crate::state::ui::UiState;
use crate::util::guard::{LayoutPage, layout_page};
use crate::util::session_store;

pub const LAYOUT_ROOT: &str = "/mainLayout";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Sidebar entries for a role.
pub fn menu_items(role: Option<&Role>) -> Vec<MenuItem> {
    match role {
        Some(Role::Tenant) => vec![MenuItem { path: LAYOUT_ROOT, label: "Dashboard", icon: "👤" }],
        Some(Role::Admin) => vec![MenuItem { path: "/mainLayout/tenants", label: "Tenants", icon: "👥" }],
        _ => Vec::new(),
    }
}

/// A menu item is active for its own path and everything below it.
pub fn is_active(pathname: &str, item_path: &str) -> bool {
    pathname.starts_with(item_path)
}

/// Path remainder after the layout root, e.g. `tenants` for `/mainLayout/tenants`.
pub fn layout_segment(pathname: &str) -> &str {
    pathname.strip_prefix(LAYOUT_ROOT).unwrap_or(pathname).trim_matches('/')
}

#[component]
pub fn MainLayout() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let location = use_location();
    let navigate = use_navigate();

    let role = Memo::new(move |_| auth.with(|a| a.role().cloned()));
    let panel_name = move || role.get().map_or("", |r| r.panel_name());
    let panel_icon = move || match role.get() {
        Some(Role::Tenant) => "👤",
        Some(Role::Admin) => "👥",
        _ => "",
    };

    let on_logout = move |_| {
        ui.update(UiState::close_overlays);
        notify_success(toasts, "Logged out successfully!");
        navigate("/login", NavigateOptions { replace: true, ..NavigateOptions::default() });
        session_store::sign_out(auth, ui.get_untracked().dark_mode);
    };

    view! {
        <div class="layout">
            <aside class="layout__sidebar" class:layout__sidebar--open=move || ui.get().sidebar_open>
                <div class="layout__panel">
                    <div class="layout__panel-name">
                        <span aria-hidden="true">{panel_icon}</span>
                        <h2>{panel_name}</h2>
                    </div>
                    <ThemeToggle/>
                </div>
                <nav class="layout__menu">
                    {move || {
                        let pathname = location.pathname.get();
                        menu_items(role.get().as_ref())
                            .into_iter()
                            .map(|item| {
                                view! {
                                    <a
                                        class="layout__menu-item"
                                        class:layout__menu-item--active={is_active(&pathname, item.path)}
                                        href=item.path
                                        on:click=move |_| ui.update(|u| u.sidebar_open = false)
                                    >
                                        <span aria-hidden="true">{item.icon}</span>
                                        {item.label}
                                    </a>
                                }
                            })
                            .collect_view()
                    }}
                </nav>
                <div class="layout__logout">
                    <button class="btn btn--danger" on:click=on_logout>"⎋ Logout"</button>
                </div>
            </aside>
            <button
                class="layout__sidebar-toggle"
                aria-label="Toggle sidebar"
                on:click=move |_| ui.update(|u| u.sidebar_open = !u.sidebar_open)
            >
                "☰"
            </button>
            <main class="layout__main">
                <Outlet/>
            </main>
        </div>
    }
}

/// Nested view for every path under `/mainLayout`.
#[component]
pub fn LayoutContent() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();

    let page = Memo::new(move |_| {
        let pathname = location.pathname.get();
        auth.with(|a| layout_page(a.role(), layout_segment(&pathname)))
    });

    Effect::new(move || {
        if page.get() == LayoutPage::RedirectToTenants {
            navigate("/mainLayout/tenants", NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || match page.get() {
        LayoutPage::Dashboard => view! { <DashboardPage/> }.into_any(),
        LayoutPage::Tenants => view! { <TenantsPage/> }.into_any(),
        LayoutPage::RedirectToTenants | LayoutPage::Empty => ().into_any(),
    }
}
