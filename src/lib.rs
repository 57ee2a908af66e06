//! # blog-client
//!
//! Leptos + WASM front-end for a blog backend: public post, category, and
//! tag browsing, comment threads, authentication, and a management
//! dashboard for posts and media.
//!
//! The non-trivial core is the session lifecycle in [`state::session`]
//! (token acquisition, persistence, restoration, invalidation) and the
//! REST gateway in [`net::api`] that attaches bearer credentials and owns
//! token custody. Everything else is routing and rendering around them.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point for client-side hydration.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
