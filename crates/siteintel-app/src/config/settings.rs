//! Settings loader for config.toml

use std::path::{Path, PathBuf};

use siteintel_client::{ApiBackend, ApiMode, DemoApiClient, HttpApiClient};
use siteintel_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "siteintel";

/// Overrides `api.base_url`
pub const ENV_API_BASE_URL: &str = "SITEINTEL_API_BASE_URL";
/// Overrides `api.secret`
pub const ENV_API_SECRET: &str = "SITEINTEL_API_SECRET";
/// Overrides `api.mode`
pub const ENV_API_MODE: &str = "SITEINTEL_API_MODE";

/// `<config dir>/siteintel/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `path`, or from the default location when `None`.
///
/// A missing file yields default settings. A file that exists but cannot be
/// read or parsed is an error, so a typo such as an unknown `api.mode` never
/// silently falls back to the live service.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let Some(config_path) = path.map(Path::to_path_buf).or_else(default_config_path) else {
        debug!("No config directory available, using defaults");
        return Ok(Settings::default());
    };

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Ok(Settings::default());
    }

    let content = std::fs::read_to_string(&config_path)?;
    let settings = toml::from_str(&content).map_err(|e| {
        Error::config_invalid(format!("{}: {}", config_path.display(), e.message()))
    })?;
    debug!("Loaded settings from {:?}", config_path);
    Ok(settings)
}

/// Apply `SITEINTEL_API_*` environment variables on top of `settings`
pub fn apply_env_overrides(settings: &mut Settings) -> Result<()> {
    apply_overrides_from(settings, |key| std::env::var(key).ok())
}

/// Apply overrides from any key lookup; empty values are ignored
pub fn apply_overrides_from(
    settings: &mut Settings,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<()> {
    let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(base_url) = get(ENV_API_BASE_URL) {
        debug!("{} overrides api.base_url", ENV_API_BASE_URL);
        settings.api.base_url = base_url;
    }
    if let Some(secret) = get(ENV_API_SECRET) {
        debug!("{} overrides api.secret", ENV_API_SECRET);
        settings.api.secret = secret;
    }
    if let Some(mode) = get(ENV_API_MODE) {
        debug!("{} overrides api.mode", ENV_API_MODE);
        settings.api.mode = mode
            .parse::<ApiMode>()
            .map_err(|e: Error| Error::config_invalid(format!("{}: {}", ENV_API_MODE, e)))?;
    }
    Ok(())
}

/// Validate `settings` and build the backend they select
pub fn build_backend(settings: &Settings) -> Result<ApiBackend> {
    settings.validate()?;

    match settings.api.mode {
        ApiMode::Live => {
            if settings.api.secret.is_empty() {
                warn!("api.secret is empty; requests will carry an empty bearer token");
            }
            let client = HttpApiClient::new(
                settings.api.base_url.trim(),
                settings.api.secret.clone(),
                settings.api.timeout(),
            )?;
            info!("Using analysis service at {}", client.base_url());
            Ok(ApiBackend::Live(client))
        }
        ApiMode::Demo => {
            info!("Demo mode: responses are fabricated locally");
            Ok(ApiBackend::Demo(DemoApiClient::new(settings.demo.delay())))
        }
    }
}
