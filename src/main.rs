//! penrose120 - render a projected 120-cell over Penrose tilings

use penrose120::{run, AppConfig};

fn main() {
    // Load configuration before logging so the configured level applies
    let config = AppConfig::load();
    let level = config
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    log::info!("Starting penrose120");

    let config = config.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    if let Err(e) = run(&config) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
