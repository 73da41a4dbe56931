//! # console-client
//!
//! Leptos + WASM frontend for the multi-tenant Shopify admin console.
//!
//! This crate contains pages, components, application state, and the REST
//! helpers that talk to the tenant backend through the host's `/api` proxy.
//! The host crate renders `app::shell` on the server; the `hydrate` feature
//! builds the browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Hydration entry point for the WASM client.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
