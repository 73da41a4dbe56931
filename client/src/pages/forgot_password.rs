//! Password reset: request an emailed OTP, then submit it with a new password.

#[cfg(test)]
#[path = "forgot_password_test.rs"]
mod forgot_password_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::toaster::notify_error;
#[cfg(feature = "hydrate")]
use crate::components::toaster::notify_success;
use crate::net::error::ApiError;
use crate::net::types::ResetPasswordRequest;
use crate::state::toast::ToastState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResetStep {
    RequestOtp,
    SetPassword,
}

pub fn reset_request(email: &str, otp: &str, new_password: &str) -> ResetPasswordRequest {
    ResetPasswordRequest {
        email: email.trim().to_owned(),
        otp: otp.trim().to_owned(),
        new_password: new_password.to_owned(),
    }
}

pub fn otp_request_error_text(err: &ApiError) -> &'static str {
    match err {
        ApiError::Rejected { .. } => "Failed to send OTP. Check email.",
        _ => "Something went wrong while sending OTP.",
    }
}

pub fn reset_error_text(err: &ApiError) -> String {
    err.describe("Failed to reset password.", "Something went wrong while resetting password.")
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let step = RwSignal::new(ResetStep::RequestOtp);
    let email = RwSignal::new(String::new());
    let otp = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_request_otp = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::request_password_reset(&email_value).await {
                Ok(()) => {
                    notify_success(toasts, "OTP sent to your email.");
                    step.set(ResetStep::SetPassword);
                }
                Err(e) => notify_error(toasts, otp_request_error_text(&e)),
            }
            busy.set(false);
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = email_value;
            notify_error(toasts, otp_request_error_text(&ApiError::Unavailable));
            busy.set(false);
        }
    };

    let on_reset = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = reset_request(&email.get(), &otp.get(), &new_password.get());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::reset_password(&request).await {
                    Ok(()) => {
                        notify_success(toasts, "Password reset successful! Please login.");
                        navigate("/login", NavigateOptions { replace: true, ..NavigateOptions::default() });
                    }
                    Err(e) => {
                        notify_error(toasts, reset_error_text(&e));
                        busy.set(false);
                    }
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, request);
            notify_error(toasts, reset_error_text(&ApiError::Unavailable));
            busy.set(false);
        }
    };

    let on_set_password = move || step.get() == ResetStep::SetPassword;

    view! {
        <section class="auth-page">
            <div class="auth-card">
                <h2 class="auth-card__title">"Forgot Password"</h2>
                <form class="auth-card__form" hidden=on_set_password on:submit=on_request_otp>
                    <input
                        class="auth-card__input"
                        type="email"
                        placeholder="Enter your email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary auth-card__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Sending..." } else { "Send OTP" }}
                    </button>
                </form>
                <form class="auth-card__form" hidden=move || !on_set_password() on:submit=on_reset>
                    <input
                        class="auth-card__input"
                        type="text"
                        placeholder="Enter OTP"
                        required=on_set_password
                        prop:value=move || otp.get()
                        on:input=move |ev| otp.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-card__input"
                        type="password"
                        placeholder="New Password"
                        required=on_set_password
                        prop:value=move || new_password.get()
                        on:input=move |ev| new_password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary auth-card__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Resetting..." } else { "Reset Password" }}
                    </button>
                </form>
            </div>
        </section>
    }
}
