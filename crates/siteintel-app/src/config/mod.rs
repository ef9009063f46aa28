//! Configuration loading for siteintel
//!
//! Supports:
//! - `config.toml` under the platform config directory, or an explicit path
//! - `SITEINTEL_API_*` environment overrides

pub mod settings;
pub mod types;

pub use settings::{
    apply_env_overrides, apply_overrides_from, build_backend, default_config_path, load_settings,
    ENV_API_BASE_URL, ENV_API_MODE, ENV_API_SECRET,
};
pub use types::*;
