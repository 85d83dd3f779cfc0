use meridio_core::remote::RemoteStatus;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub export: ExportConfig,
    pub remote: RemoteConfig,
    /// When absent the service runs against the in-memory store
    pub database: Option<DatabaseConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExportConfig {
    pub dir: String,
}

/// Tuning for the canned remote adapter
#[derive(Debug, Deserialize, Clone)]
pub struct RemoteConfig {
    pub status: RemoteStatus,
    pub amount: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Environment-specific file, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, kept out of version control
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("MERIDIO").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
