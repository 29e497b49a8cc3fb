//! # ticketdesk
//!
//! Leptos + WASM frontend for a ticketing system. Renders navigation, the
//! ticket form/list, and thin auth pages; all business logic lives in the
//! remote API, reached over HTTP with cookie + bearer credentials.
//!
//! This crate contains pages, components, application state, and the network
//! layer that keeps the client-held session synchronized with the server.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entrypoint: hydrate the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
