//! Two-step tenant registration: account + store details, then email OTP.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::toaster::notify_error;
#[cfg(feature = "hydrate")]
use crate::components::toaster::notify_success;
use crate::net::error::ApiError;
use crate::net::types::{RegisterTenantRequest, TenantRegistration};
use crate::state::toast::ToastState;

/// Input fields in display order: `(name, placeholder, input type)`.
pub const FIELDS: [(&str, &str, &str); 6] = [
    ("email", "Email", "email"),
    ("password", "Password", "password"),
    ("tenantId", "Tenant ID", "text"),
    ("shopifyBaseUrl", "Shopify Base URL", "text"),
    ("accessToken", "Access Token", "text"),
    ("shopName", "Shop Name", "text"),
];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub tenant_id: String,
    pub shopify_base_url: String,
    pub access_token: String,
    pub shop_name: String,
}

impl RegisterForm {
    pub fn field(&self, name: &str) -> &str {
        match name {
            "email" => &self.email,
            "password" => &self.password,
            "tenantId" => &self.tenant_id,
            "shopifyBaseUrl" => &self.shopify_base_url,
            "accessToken" => &self.access_token,
            "shopName" => &self.shop_name,
            _ => "",
        }
    }

    pub fn set_field(&mut self, name: &str, value: String) {
        let slot = match name {
            "email" => &mut self.email,
            "password" => &mut self.password,
            "tenantId" => &mut self.tenant_id,
            "shopifyBaseUrl" => &mut self.shopify_base_url,
            "accessToken" => &mut self.access_token,
            "shopName" => &mut self.shop_name,
            _ => return,
        };
        *slot = value;
    }

    /// Request body with the store fields nested under `tenant`.
    pub fn to_request(&self) -> RegisterTenantRequest {
        RegisterTenantRequest {
            email: self.email.trim().to_owned(),
            password: self.password.clone(),
            tenant: TenantRegistration {
                tenant_id: self.tenant_id.trim().to_owned(),
                shopify_base_url: self.shopify_base_url.trim().to_owned(),
                access_token: self.access_token.trim().to_owned(),
                shop_name: self.shop_name.trim().to_owned(),
            },
        }
    }
}

/// Toast text for a failed registration.
pub fn registration_error_text(err: &ApiError) -> String {
    match err {
        ApiError::Rejected { message, .. } => {
            format!("Registration failed: {}", message.as_deref().unwrap_or("Unknown error"))
        }
        _ => "Something went wrong during registration.".to_owned(),
    }
}

/// Toast text for a failed OTP check.
pub fn otp_error_text(err: &ApiError) -> &'static str {
    match err {
        ApiError::Rejected { .. } => "Invalid OTP. Please try again.",
        _ => "Something went wrong while verifying OTP.",
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let form = RwSignal::new(RegisterForm::default());
    let otp = RwSignal::new(String::new());
    let awaiting_otp = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_register = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = form.get().to_request();
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::register_tenant(&request).await {
                Ok(()) => {
                    notify_success(toasts, "Registration successful! Enter OTP to continue.");
                    awaiting_otp.set(true);
                }
                Err(e) => notify_error(toasts, registration_error_text(&e)),
            }
            busy.set(false);
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            notify_error(toasts, registration_error_text(&ApiError::Unavailable));
            busy.set(false);
        }
    };

    let on_verify = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = form.get().email.trim().to_owned();
        let otp_value = otp.get().trim().to_owned();
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::verify_otp(&email_value, &otp_value).await {
                    Ok(()) => {
                        notify_success(toasts, "OTP verified! Registration complete.");
                        navigate("/login", NavigateOptions::default());
                    }
                    Err(e) => {
                        notify_error(toasts, otp_error_text(&e));
                        busy.set(false);
                    }
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, email_value, otp_value);
            notify_error(toasts, otp_error_text(&ApiError::Unavailable));
            busy.set(false);
        }
    };

    view! {
        <section class="auth-page">
            <div class="auth-card">
                <h2 class="auth-card__title">"Create Tenant Account"</h2>
                <form class="auth-card__form" hidden=move || awaiting_otp.get() on:submit=on_register>
                    {FIELDS
                        .iter()
                        .map(|(name, placeholder, kind)| {
                            let name = *name;
                            view! {
                                <input
                                    class="auth-card__input"
                                    name=name
                                    type={*kind}
                                    placeholder={*placeholder}
                                    required
                                    prop:value=move || form.with(|f| f.field(name).to_owned())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        form.update(|f| f.set_field(name, value));
                                    }
                                />
                            }
                        })
                        .collect_view()}
                    <button class="btn btn--primary auth-card__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>
                <form class="auth-card__form" hidden=move || !awaiting_otp.get() on:submit=on_verify>
                    <input
                        class="auth-card__input"
                        type="text"
                        placeholder="Enter OTP"
                        required=move || awaiting_otp.get()
                        prop:value=move || otp.get()
                        on:input=move |ev| otp.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary auth-card__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Verifying..." } else { "Verify OTP" }}
                    </button>
                </form>
            </div>
        </section>
    }
}
