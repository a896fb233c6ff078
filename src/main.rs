//! Kanban Board Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod prompt;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_document();
    console_logger::init(config.log_level);

    match config.client_config() {
        Ok(client) => mount_to_body(move || view! { <App config=client /> }),
        Err(e) => tracing::error!("Invalid API base URL {:?}: {}", config.api_base, e),
    }
}
