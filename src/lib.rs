//! # notify-client
//!
//! Leptos + WASM front end for the user-notification application: login and
//! registration forms plus a live notification feed delivered over a
//! reconnecting WebSocket.
//!
//! This crate contains pages, components, application state, and the network
//! layer (REST helpers and the notification stream client).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// Hydration entry point for the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
