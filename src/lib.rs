//! # shopsaas-web
//!
//! Leptos + WASM frontend for the ShopSaaS shopping platform. Replaces the
//! React + MUI client with a Rust-native UI layer.
//!
//! This crate contains pages, components, session/signup state, and the
//! typed client for the managed identity & data service (Supabase-style
//! auth and REST endpoints). All business logic lives in that service; the
//! application holds only form state and navigation wiring.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("hydrating shopsaas-web");
    leptos::mount::hydrate_body(app::App);
}
