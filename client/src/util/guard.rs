//! Route-guard decisions.
//!
//! DESIGN
//! ======
//! Guards are pure functions over `AuthState` so the same decision runs on
//! the server and in the browser. The components in
//! `components::protected_route` turn these decisions into redirects and
//! toasts.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::auth::AuthState;
use crate::state::session::{Role, Session};

/// Outcome of checking a route's allowed roles against the current session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Access {
    /// Session storage has not been read yet.
    Pending,
    Granted,
    Denied(Denial),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Denial {
    Unauthenticated,
    /// The user just logged out; the logout flow owns the redirect message.
    SignedOut,
    Forbidden,
}

impl Denial {
    pub fn redirect_path(self) -> &'static str {
        match self {
            Self::Unauthenticated | Self::SignedOut => "/login",
            Self::Forbidden => "/",
        }
    }

    /// Toast shown with the redirect, if any.
    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::Unauthenticated => Some("Please login to access this page."),
            Self::SignedOut => None,
            Self::Forbidden => Some("You do not have permission to access this page."),
        }
    }
}

pub fn resolve_access(auth: &AuthState, allowed: &[Role]) -> Access {
    if !auth.loaded {
        return Access::Pending;
    }
    match auth.role() {
        None if auth.signed_out => Access::Denied(Denial::SignedOut),
        None => Access::Denied(Denial::Unauthenticated),
        Some(role) if allowed.contains(role) => Access::Granted,
        Some(_) => Access::Denied(Denial::Forbidden),
    }
}

/// Where a signed-in user belongs by default.
pub fn landing_path(session: Option<&Session>) -> &'static str {
    match session.map(|s| &s.role) {
        None => "/login",
        Some(Role::Tenant) => "/mainLayout",
        Some(Role::Admin) => "/mainLayout/tenants",
        Some(Role::Other(_)) => "/",
    }
}

/// Page rendered inside the main layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutPage {
    Dashboard,
    Tenants,
    /// Admin landed on the layout index; send them to the tenant list.
    RedirectToTenants,
    Empty,
}

/// Pick the nested page for `role` given the path after `/mainLayout`.
pub fn layout_page(role: Option<&Role>, segment: &str) -> LayoutPage {
    let segment = segment.trim_matches('/');
    match role {
        Some(Role::Tenant) => LayoutPage::Dashboard,
        Some(Role::Admin) if segment.is_empty() => LayoutPage::RedirectToTenants,
        Some(Role::Admin) => LayoutPage::Tenants,
        _ => LayoutPage::Empty,
    }
}
