//! # client
//!
//! Leptos + WASM frontend for the RekaTalent recruitment dashboard.
//!
//! Six record kinds (users, candidates, interviews, interview schedulings,
//! psychological tests, test schedulings) share one descriptor-driven set of
//! list, create and edit screens. Data reaches the screens through the
//! `store::Repository` registry: five kinds use session-local sample
//! collections, candidates round-trip through a REST resource.

pub mod app;
pub mod components;
pub mod config;
pub mod entity;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod store;

/// Browser entry point: installs panic/log hooks and hydrates the
/// server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::hydrate_body(app::App);
}
