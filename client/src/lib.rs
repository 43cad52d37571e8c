//! # finoxa-client
//!
//! Leptos + WASM frontend for the Finoxa API console: account signup/login and
//! a dashboard for managing the user's single API key.
//!
//! This crate contains pages, components, the session/query state, and the
//! REST adapter for the remote API. The `hydrate` feature builds the browser
//! bundle; the `ssr` feature lets the host binary render the shell.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::hydrate_body(app::App);
}
