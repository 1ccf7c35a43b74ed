//! # client
//!
//! Leptos + WASM frontend for the opencourse e-learning platform: student
//! and instructor login/registration, course catalog browsing, curriculum
//! and quiz access, and course-authoring flows.
//!
//! This crate contains pages, components, application state, network types,
//! and the REST gateway. Browser-only effects (localStorage, HTTP, history
//! navigation) are gated behind the `hydrate` feature so the state and
//! decision logic stays natively testable.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point for the hydrated client build.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
