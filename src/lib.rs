//! # ticketbox
//!
//! Leptos + WASM front-end for the event-ticketing application: public event
//! browsing, a member ticket list, and an admin dashboard behind
//! authentication-gated routes.
//!
//! This crate contains pages, components, session state, REST types, and the
//! route access gate. With the `ssr` feature it also carries the Axum host
//! that renders the app on the server.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "ssr")]
pub mod server;

/// Browser entry point: installs console logging and hydrates the SSR body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
