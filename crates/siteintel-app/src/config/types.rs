//! Configuration types for siteintel
//!
//! Defines:
//! - `Settings` - Global application settings
//! - `ApiSettings`, `DemoSettings`, `UiSettings` - its sections

use std::time::Duration;

use serde::{Deserialize, Serialize};

use siteintel_client::ApiMode;
use siteintel_core::prelude::*;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub demo: DemoSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Analysis service connection
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Base URL the endpoint paths are appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bearer credential sent with every request
    #[serde(default)]
    pub secret: String,

    /// `live` or `demo`; any other value fails to parse
    #[serde(default)]
    pub mode: ApiMode,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            secret: String::new(),
            mode: ApiMode::default(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Offline demo backend
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DemoSettings {
    /// Simulated latency in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
        }
    }
}

impl DemoSettings {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Show timestamps next to conversation turns
    #[serde(default = "default_true")]
    pub show_timestamps: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_timestamps: true,
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_delay_ms() -> u64 {
    2000
}

fn default_true() -> bool {
    true
}

impl Settings {
    /// Reject settings the backend cannot be built from
    pub fn validate(&self) -> Result<()> {
        if self.api.mode == ApiMode::Live && self.api.base_url.trim().is_empty() {
            return Err(Error::config_invalid(
                "api.base_url must be set when api.mode is \"live\"",
            ));
        }

        if self.api.timeout_secs == 0 {
            return Err(Error::config_invalid("api.timeout_secs must be positive"));
        }

        Ok(())
    }
}
