//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`query`, `auth`, `dashboard`, `toast`) so
//! components depend on small focused models. Shared values live in
//! signals provided by the root component, never in globals.

pub mod auth;
pub mod dashboard;
pub mod query;
pub mod toast;
