//! # client
//!
//! Leptos + WASM front end for WiseTools Hub, a collection of calculators,
//! converters, and productivity widgets behind shared navigation, theming,
//! and a local profile with experience points.
//!
//! ARCHITECTURE
//! ============
//! `state` holds storage-backed stores that are independent of the reactive
//! runtime; `util::reactive` mirrors them into signals for views. Formulas
//! live in the `toolkit` crate. `pages` are routes, `components` are shared
//! chrome, and `net` talks to the host server's AI endpoint.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point called by the generated WASM bootstrap.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
