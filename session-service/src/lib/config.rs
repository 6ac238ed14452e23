use std::env;
use std::path::PathBuf;
use std::time::Duration;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

use crate::domain::theme::models::ThemeMode;

/// Application configuration for the session layer.
///
/// Loaded from configuration files with environment variable overrides.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub login: LoginConfig,
    pub storage: StorageConfig,
    pub theme: ThemeConfig,
}

/// Login flow configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct LoginConfig {
    /// Artificial latency applied to every login attempt, standing in for a
    /// round trip to a credential backend that does not exist.
    pub simulated_delay_ms: u64,
}

impl LoginConfig {
    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }
}

/// Persistent store configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Backing file for the durable store. Absent means the embedding
    /// application supplies its own store (e.g. in-memory).
    pub file: Option<PathBuf>,
}

/// Theme defaults.
#[derive(Debug, Deserialize, Clone)]
pub struct ThemeConfig {
    pub default_mode: ThemeMode,
}

impl Config {
    /// Load configuration from files with environment variable overrides.
    ///
    /// # Configuration Priority (highest to lowest)
    /// 1. Environment variables (LOGIN__SIMULATED_DELAY_MS, STORAGE__FILE, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    ///
    /// # Errors
    /// Returns error if required configuration values are missing or invalid
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: LOGIN__SIMULATED_DELAY_MS=250 overrides login.simulated_delay_ms
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        configuration.try_deserialize()
    }
}
