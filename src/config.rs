use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::{FilterPolicy, GroupSizeMatching, WeekStart};
use crate::services::PositionOptions;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub catalog: CatalogSettings,
    pub geolocation: GeolocationSettings,
    pub filters: FilterSettings,
    pub sessions: SessionSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            workers: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// JSON seed catalog; the bundled catalog is used when unset
    pub seed_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeolocationSettings {
    pub enable_high_accuracy: bool,
    pub timeout_secs: u64,
    pub maximum_age_secs: u64,
    /// Simulated reverse-geocoding latency
    pub geocode_delay_ms: u64,
}

impl Default for GeolocationSettings {
    fn default() -> Self {
        Self {
            enable_high_accuracy: true,
            timeout_secs: 10,
            maximum_age_secs: 300,
            geocode_delay_ms: 500,
        }
    }
}

impl GeolocationSettings {
    pub fn position_options(&self) -> PositionOptions {
        PositionOptions {
            enable_high_accuracy: self.enable_high_accuracy,
            timeout: Duration::from_secs(self.timeout_secs),
            maximum_age: Duration::from_secs(self.maximum_age_secs),
        }
    }

    pub fn geocode_delay(&self) -> Duration {
        Duration::from_millis(self.geocode_delay_ms)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FilterSettings {
    pub week_start: WeekStart,
    pub group_size_matching: GroupSizeMatching,
}

impl FilterSettings {
    pub fn policy(&self) -> FilterPolicy {
        FilterPolicy {
            week_start: self.week_start,
            group_size_matching: self.group_size_matching,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    pub idle_timeout_secs: u64,
    pub max_sessions: u64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            idle_timeout_secs: 3600,
            max_sessions: 10_000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

fn environment() -> Environment {
    // e.g., TEAMCONNECT__SERVER__PORT -> server.port
    Environment::with_prefix("TEAMCONNECT")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with TEAMCONNECT__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(environment())
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        settings.try_deserialize()
    }
}
