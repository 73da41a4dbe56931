//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `toast`, `ui`) so individual
//! components can depend on small focused models. Each is provided through
//! context as an `RwSignal` by the root `App`.

pub mod auth;
pub mod session;
pub mod toast;
pub mod ui;
