//! Toast stack rendered once at the app root.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages report outcomes through [`notify_success`] and [`notify_error`]. Each
//! call queues a toast on the shared `ToastState` and, in the browser,
//! schedules its dismissal after the kind's duration.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastKind, ToastState};

pub fn notify_success(toasts: RwSignal<ToastState>, message: impl Into<String>) {
    notify(toasts, ToastKind::Success, message.into());
}

pub fn notify_error(toasts: RwSignal<ToastState>, message: impl Into<String>) {
    notify(toasts, ToastKind::Error, message.into());
}

fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, message: String) {
    let duration_ms = kind.default_duration_ms();
    let Some(id) = toasts.try_update(|t| t.push(kind, message, duration_ms)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(duration_ms).await;
        toasts.update(|t| t.dismiss(&id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

/// Top-right toast stack. Clicking a toast dismisses it early.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id.clone()
                children=move |toast: Toast| {
                    let id = toast.id.clone();
                    let class = format!("toast {}", toast.kind.css_modifier());
                    view! {
                        <div class=class on:click=move |_| toasts.update(|t| t.dismiss(&id))>
                            <span class="toast__icon">
                                {match toast.kind {
                                    ToastKind::Success => "✓",
                                    ToastKind::Error => "!",
                                }}
                            </span>
                            <span class="toast__message">{toast.message}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
