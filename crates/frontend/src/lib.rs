pub mod app;
pub mod dashboards;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn init_page() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    shared::dom::on_ready(|| {
        let app = app::HomeApp::new(shared::config::AppConfig::from_document());
        app.init(&routes::current_path());
    });
}

#[wasm_bindgen(start)]
pub fn start() {
    init_page();
}
