//! Landing-page navbar with a slide-in drawer on narrow screens.
//!
//! DESIGN
//! ======
//! Links depend only on whether a session exists. The drawer mirrors the
//! desktop links and adds Logout for signed-in visitors.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use super::theme_toggle::ThemeToggle;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::session_store;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub path: &'static str,
    pub label: &'static str,
}

/// Links shown to a visitor, in display order.
pub fn nav_links(authenticated: bool) -> Vec<NavLink> {
    let mut links = vec![NavLink { path: "/", label: "Home" }];
    if authenticated {
        links.push(NavLink { path: "/mainLayout", label: "Dashboard" });
    } else {
        links.push(NavLink { path: "/login", label: "Login" });
        links.push(NavLink { path: "/register", label: "Register" });
    }
    links
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();
    let navigate = use_navigate();

    let links = move || nav_links(auth.get().is_authenticated());
    let close_menu = move || ui.update(|u| u.menu_open = false);

    let on_logout = move |_| {
        session_store::sign_out(auth, ui.get_untracked().dark_mode);
        close_menu();
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">
                <span class="navbar__logo" aria-hidden="true">"🛍"</span>
                <span class="navbar__title">"Shopify"</span>
            </a>
            <div class="navbar__links">
                {move || {
                    links()
                        .into_iter()
                        .map(|link| view! { <a class="navbar__link" href=link.path>{link.label}</a> })
                        .collect_view()
                }}
            </div>
            <div class="navbar__actions">
                <ThemeToggle/>
                <button
                    class="navbar__hamburger"
                    class:navbar__hamburger--open=move || ui.get().menu_open
                    aria-label="Toggle menu"
                    on:click=move |_| ui.update(|u| u.menu_open = !u.menu_open)
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
        </nav>

        <Show when=move || ui.get().menu_open>
            <div class="navbar__scrim" on:click=move |_| close_menu()></div>
            <aside class="navbar__drawer">
                <div class="navbar__drawer-header">
                    <span>"Menu"</span>
                    <button class="navbar__close" aria-label="Close menu" on:click=move |_| close_menu()>
                        "✕"
                    </button>
                </div>
                <div class="navbar__drawer-links">
                    {move || {
                        let current = location.pathname.get();
                        links()
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <a
                                        class="navbar__drawer-link"
                                        class:navbar__drawer-link--active={current == link.path}
                                        href=link.path
                                        on:click=move |_| close_menu()
                                    >
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <div class="navbar__drawer-footer">
                    <ThemeToggle/>
                </div>
            </aside>
        </Show>
        <button
            class="navbar__logout"
            hidden=move || !(ui.get().menu_open && auth.get().is_authenticated())
            on:click=on_logout
        >
            "Logout"
        </button>
    }
}
