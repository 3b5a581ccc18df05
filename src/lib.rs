//! # parking-client
//!
//! Leptos + WASM frontend for the parking-reservation service.
//!
//! This crate holds the application mount, the bearer-authenticated API
//! client, the route table, and the role-based navigation guard that decides
//! on every navigation whether to render the target page or redirect.
//! Browser-only code sits behind the `csr` feature; the rest builds and tests
//! natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;

/// WASM entry point: mounts [`app::App`] to `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}
