//! Calorie Tracker Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod dom_view;
mod events;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    let _ = console_logger::init(config.log_level);

    mount_to_body(move || view! { <App config=config /> });
}
