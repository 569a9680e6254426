//! # site
//!
//! Leptos + WASM front end for a single-page personal portfolio.
//!
//! State controllers under [`state`] hold every rule (theme, navigation,
//! form validation, notifications, one-shot animations) as plain structs;
//! [`components`] render them and wire browser events and timers to them.
//! The `canvas` crate draws the falling-glyph hero background.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach behavior to the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
