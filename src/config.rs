//! Configuration management for the Bookstock client

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct BackendConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    pub backend: BackendConfig,
    pub logging: LoggingConfig,
}

impl ClientConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Defaults for a local backend
            .set_default("backend.base_url", "http://127.0.0.1:8000")?
            .set_default("logging.level", "info")?
            // Optional configuration files
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix BOOKSTOCK_)
            .add_source(
                Environment::with_prefix("BOOKSTOCK")
                    .separator("_")
                    .try_parsing(true),
            )
            // Override backend URL from BOOKSTOCK_BASE_URL env var if present
            .set_override_option("backend.base_url", env::var("BOOKSTOCK_BASE_URL").ok())?
            .build()?;

        config.try_deserialize()
    }
}
