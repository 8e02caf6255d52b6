//! # client
//!
//! Leptos + WASM front end for the Luceig recruitment consultancy site.
//!
//! Public pages are fixed, ordered lists of presentational sections
//! (`site`). The navbar and footer wrap every page except the admin prefix
//! (`layout`). A root provider starts the auth store once
//! (`components::auth_bootstrap`).

pub mod app;
pub mod components;
pub mod content;
pub mod layout;
pub mod net;
pub mod pages;
pub mod site;
pub mod state;
pub mod util;

/// WASM hydration entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
