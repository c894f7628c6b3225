mod app;
mod components;
mod config;
mod dom;
mod error;
mod fixtures;
mod format;
mod hover;
mod models;
mod pages;
mod session;
mod ticker;

use app::App;
use config::SiteConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = SiteConfig::load();
    wasm_logger::init(wasm_logger::Config::new(config.log_level()));
    if let Some(e) = config_error {
        log::warn!("{}; using defaults", e);
    }

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
