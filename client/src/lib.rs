//! # byggdel-client
//!
//! Leptos frontend for the byggdelssystem admin: object types, objects,
//! relations, documents and the product register.
//!
//! The crate compiles twice. With `ssr` the host renders the shell and first
//! paint; with `hydrate` it becomes the WASM bundle that attaches to that
//! markup and talks to the REST backend through the host's `/api` proxy.
//! Browser-only paths are compiled out of the `ssr` build, which is also the
//! build the unit tests run against.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
