//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and guards while reading shared state from
//! Leptos context providers.

pub mod header;
pub mod route_guard;
pub mod spinner;
pub mod toaster;
