//! Todo Frontend Entry Point

use leptos::prelude::*;
use todo_view::app::App;
use todo_view::config::AppConfig;
use todo_view::logging;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::from_document();
    logging::init(config.log_level);
    log::info!("api base: {}", config.api_base);
    mount_to_body(move || view! { <App config=config.clone() /> });
}
