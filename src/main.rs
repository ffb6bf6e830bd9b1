use agent_monitor_ui::app::App;
use agent_monitor_ui::core::config::AppConfig;
use agent_monitor_ui::core::logging;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::load_with(None).unwrap_or_default(), Some(e)),
    };
    logging::init(config.level());
    if let Some(e) = load_error {
        tracing::warn!("ignoring malformed page config: {}", e);
    }
    tracing::info!("api base {}, push channel {}", config.api_base, config.push_url);

    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}
