pub mod app;
pub mod chart;
pub mod components;
pub mod config;
pub mod error;
pub mod format;
pub mod generator;
pub mod logging;
pub mod pages;
pub mod sample;
pub mod source;
pub mod state;

use leptos::prelude::*;

use app::App;
use config::AppConfig;

const FALLBACK_LOG_FILTER: &str = "info";

pub fn run() {
    console_error_panic_hook::set_once();

    let loaded = AppConfig::embedded();
    let filter = loaded
        .as_ref()
        .map(|c| c.log_level.as_str())
        .unwrap_or(FALLBACK_LOG_FILTER);
    if let Err(e) = logging::init_with_fallback(filter, FALLBACK_LOG_FILTER) {
        logging::console_error(&format!("Logging disabled: {}", e));
    }
    let config = AppConfig::or_default(loaded);

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
