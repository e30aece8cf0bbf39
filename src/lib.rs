mod api;
mod app;
mod audio;
mod collection;
mod components;
mod config;
mod error;
mod models;
mod pages;
mod state;
mod storage;
mod sync;
mod util;

use crate::app::App;
use crate::config::EnvConfig;
use leptos::prelude::*;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();

    let config = EnvConfig::new();
    if let Err(e) = console_log::init_with_level(config.log_level()) {
        web_sys::console::warn_1(&format!("logger already initialised: {e}").into());
    }
    log::info!(
        "starting WowDad (jokes: {}, wows: {})",
        config.joke_api_url,
        config.wow_api_url
    );

    mount_to_body(move || view! { <App config=config /> });
}
