//! # formpilot-client
//!
//! Leptos + WASM frontend for the form-building copilot.
//!
//! The operator picks a tenant/form context, chats with the backend
//! assistant, and inspects the assistant-produced HTML form inside a
//! sandboxed preview frame. All substantive work (form synthesis, validation,
//! tool execution) happens behind the copilot HTTP API; this crate only
//! shuttles requests and renders responses.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point invoked by the cargo-leptos hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
