//! # site-ui
//!
//! Leptos + WASM interactive layer for the multi-language site shell.
//! Pages are rendered on the server with the `ssr` feature and hydrated in
//! the browser with the `hydrate` feature.
//!
//! This crate contains the header/drawer, login modal, toast surface, data
//! table and footer components, the state models behind them, the injected
//! page globals, and the handful of REST calls the login flow makes.

pub mod app;
pub mod components;
pub mod error;
pub mod net;
pub mod state;
pub mod util;

/// Browser entry point: read the injected globals and hydrate the body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let globals = match net::types::SiteGlobals::from_document() {
        Ok(globals) => globals,
        Err(e) => {
            log::error!("site globals unavailable, rendering with defaults: {e}");
            net::types::SiteGlobals::default()
        }
    };

    leptos::mount::hydrate_body(move || app::App(app::AppProps { globals }));
}
