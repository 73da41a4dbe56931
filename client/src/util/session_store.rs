//! Persistence of the login session in `localStorage`.
//!
//! The session lives under [`SESSION_KEY`] as the JSON the backend returned.
//! A stored value that no longer parses is treated as signed out and dropped.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use leptos::prelude::*;

use super::{dark_mode, storage};
use crate::state::auth::AuthState;
use crate::state::session::Session;

pub const SESSION_KEY: &str = "tenantData";

/// Read the persisted session, if any.
pub fn load() -> Option<Session> {
    load_from(storage::get_raw(SESSION_KEY), storage::remove)
}

/// Parse `raw`, handing the session key to `discard` when the value is
/// unreadable. Other keys (the theme) are left alone.
pub(crate) fn load_from(raw: Option<String>, discard: impl FnOnce(&str)) -> Option<Session> {
    let parsed = parse(&raw?);
    if parsed.is_none() {
        leptos::logging::warn!("discarding unreadable stored session");
        discard(SESSION_KEY);
    }
    parsed
}

/// Persist the session returned by login.
pub fn save(session: &Session) {
    storage::save_json(SESSION_KEY, session);
}

/// Logout: wipe all persisted state, then restore only the theme choice.
pub fn clear_all(dark_mode_enabled: bool) {
    storage::clear();
    dark_mode::persist(dark_mode_enabled);
}

/// Drop the session from storage and from the shared auth state.
pub fn sign_out(auth: RwSignal<AuthState>, dark_mode_enabled: bool) {
    clear_all(dark_mode_enabled);
    auth.update(AuthState::sign_out);
}

/// Parse a stored session blob; `null` and malformed JSON are both "absent".
pub(crate) fn parse(raw: &str) -> Option<Session> {
    serde_json::from_str::<Option<Session>>(raw).ok().flatten()
}
