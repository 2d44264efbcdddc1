pub mod app;
pub mod config;
pub mod conversation;
pub mod shared;

use app::App;
use config::{ClientConfig, CONFIG_META_NAME};
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let (config, invalid) = match ClientConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (ClientConfig::default(), Some(e)),
    };

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.log_level());
    console_error_panic_hook::set_once();

    if let Some(e) = invalid {
        log::warn!(
            "Ignoring invalid {} meta, using defaults: {}",
            CONFIG_META_NAME,
            e
        );
    }

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
