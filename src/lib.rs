pub mod app;
pub mod components;
pub mod config;
pub mod employer;
pub mod error;
pub mod events;
pub mod models;
pub mod state;
pub mod stats;
pub mod store;
pub mod utils;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    use crate::config::WalletConfig;
    use leptos::*;

    utils::panic_hook::init();
    // Render with the settings the server used, or hydration would not match.
    let config = WalletConfig::from_document();
    leptos::mount_to_body(move || view! { <App config=config/> });
}
