//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod dashboard;
pub mod forgot_password;
pub mod home;
pub mod learn_more;
pub mod login;
pub mod main_layout;
pub mod register;
pub mod tenants;
