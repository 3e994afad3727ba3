pub mod app;
pub mod domain;
pub mod shared;

use shared::config::WidgetConfig;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn boot() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    app::run(WidgetConfig::DEFAULT);
}

#[wasm_bindgen(start)]
pub fn start() {
    boot();
}
