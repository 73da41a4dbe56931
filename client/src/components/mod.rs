//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render console chrome and dashboard widgets while reading/writing
//! shared state from Leptos context providers.

pub mod footer;
pub mod kpi_card;
pub mod navbar;
pub mod protected_route;
pub mod shimmer;
pub mod tenant_card;
pub mod theme_toggle;
pub mod toaster;
pub mod trend_chart;
