//! Role-gated route wrappers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ProtectedRoute` renders its children only once the session has been read
//! and carries an allowed role; otherwise it toasts and redirects.
//! `GuestRoute` keeps signed-in users off the login and register forms by
//! handing them to `RedirectByRole`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::toaster::notify_error;
use crate::state::auth::AuthState;
use crate::state::session::Role;
use crate::state::toast::ToastState;
use crate::util::guard::{Access, landing_path, resolve_access};

fn replace() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

#[component]
pub fn ProtectedRoute(allowed: Vec<Role>, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let access = Memo::new(move |_| auth.with(|state| resolve_access(state, &allowed)));

    Effect::new(move || {
        if let Access::Denied(denial) = access.get() {
            if let Some(message) = denial.message() {
                notify_error(toasts, message);
            }
            navigate(denial.redirect_path(), replace());
        }
    });

    move || (access.get() == Access::Granted).then(|| children())
}

/// Send a signed-in user to their landing page.
#[component]
pub fn RedirectByRole() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = auth.get();
        if state.loaded {
            navigate(landing_path(state.session.as_ref()), replace());
        }
    });
}

/// Show `children` to visitors without a session.
#[component]
pub fn GuestRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let signed_in = Memo::new(move |_| auth.with(AuthState::is_authenticated));

    move || {
        if signed_in.get() {
            view! { <RedirectByRole/> }.into_any()
        } else {
            children()
        }
    }
}
