//! Login page for tenants and admins.
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful login persists the backend's session blob immediately, shows
//! a success toast, and after a short delay publishes the session to the
//! shared auth state and navigates to the role's landing page. Publishing
//! late keeps `GuestRoute` from swapping the form out before the toast is
//! seen.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::toaster::notify_error;
#[cfg(feature = "hydrate")]
use crate::components::toaster::notify_success;
use crate::net::error::ApiError;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;

/// Delay between the success toast and the redirect.
pub const REDIRECT_DELAY_MS: u32 = 2000;

/// Toast text for a failed login.
pub fn login_error_text(err: &ApiError) -> String {
    err.describe("Login failed. Check your credentials.", "Something went wrong during login.")
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&email_value, &password_value).await {
                    Ok(session) => {
                        crate::util::session_store::save(&session);
                        notify_success(toasts, "Login successful!");
                        let target = crate::util::guard::landing_path(Some(&session));
                        gloo_timers::future::TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                        auth.update(|a| a.sign_in(session));
                        navigate(target, NavigateOptions::default());
                    }
                    Err(e) => {
                        notify_error(toasts, login_error_text(&e));
                        busy.set(false);
                    }
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, auth, email_value, password_value);
            notify_error(toasts, login_error_text(&ApiError::Unavailable));
            busy.set(false);
        }
    };

    view! {
        <section class="auth-page">
            <div class="auth-card">
                <h2 class="auth-card__title">"Login"</h2>
                <p class="auth-card__subtitle">"Enter your credentials to continue"</p>
                <form class="auth-card__form" on:submit=on_submit>
                    <input
                        class="auth-card__input"
                        type="email"
                        name="email"
                        placeholder="Email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-card__input"
                        type="password"
                        name="password"
                        placeholder="Password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <div class="auth-card__aside">
                        <a class="auth-card__link" href="/forgot-password">"Forgot password? ›"</a>
                    </div>
                    <button class="btn btn--primary auth-card__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Don’t have an account? "
                    <a class="auth-card__link" href="/register">"Sign Up"</a>
                </p>
            </div>
        </section>
    }
}
