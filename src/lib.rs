//! # hospital-admin
//!
//! Leptos + WASM administrative client for a hospital directory: sign in,
//! browse and search hospitals by city, and create/edit/delete listings
//! through the REST backend.
//!
//! The interesting parts are the session lifecycle (`state::session`), the
//! route guard (`util::guard`) and the debounced city search
//! (`state::search`); pages and components are thin views over them.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
