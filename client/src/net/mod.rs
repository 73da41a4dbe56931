//! Networking modules for the tenant backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `error` classifies failures for toasts, and
//! `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod types;
