#![allow(non_snake_case)]

use dioxus::prelude::*;
use stores::{auth_store, selection_store, settings_store};

// Modules
mod components;
mod hooks;
mod routes;
mod services;
mod stores;
mod utils;

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
        wasm_logger::init(wasm_logger::Config::new(level));
    }

    log::info!("Starting menteeboard {}", env!("CARGO_PKG_VERSION"));

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Restore settings and session before the first route renders
    use_hook(|| {
        settings_store::init_settings();
        auth_store::init_auth();
        selection_store::init_selection();
    });

    rsx! {
        Router::<routes::Route> {}
    }
}
