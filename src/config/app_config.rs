use std::env;
use std::time::Duration;

use super::model::Config;

const DEFAULT_CONFIG_FILE: &str = "config.yml";
const DEFAULT_PROBE_TIMEOUT_SECONDS: u64 = 5;

pub struct AppConfig {
    pub config: Config,
    pub probe_timeout: Duration,
    pub max_site_width: usize,
}

/// Load the application configuration from a YAML file and environment
/// variables. `CONFIG_FILE` points at the site config (default `config.yml`)
/// and `PROBE_TIMEOUT_SECONDS` bounds each probe through the shared HTTP
/// client. Startup failures are fatal.
pub fn load_config() -> AppConfig {
    let config_file_location =
        env::var("CONFIG_FILE").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
    let config_str =
        std::fs::read_to_string(&config_file_location).expect("Failed to read site config");

    let config: Config = serde_yaml::from_str(&config_str).expect("Invalid YAML");

    let probe_timeout = env::var("PROBE_TIMEOUT_SECONDS")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .map(Duration::from_secs)
        .unwrap_or(Duration::from_secs(DEFAULT_PROBE_TIMEOUT_SECONDS));

    log::info!(
        "Loaded {} site(s) from {}",
        config.len(),
        config_file_location
    );

    let max_site_width = config.keys().map(|site| site.len()).max().unwrap_or(10);

    AppConfig {
        config,
        probe_timeout,
        max_site_width,
    }
}
