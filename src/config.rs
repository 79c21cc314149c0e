//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::env;
use std::sync::LazyLock;

use crate::constants::{
    DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_DATASET_URL, DEFAULT_NEAREST_RADIUS_METERS,
    DEFAULT_OPENDATA_TIMEOUT_SECONDS, DEFAULT_REMINDER_SWEEP_CRON, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT, MAX_SEARCH_RADIUS_METERS, RADIUS_RECORD_LIMIT, VIEWPORT_RECORD_LIMIT,
};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub opendata: OpenDataConfig,
    pub search: SearchConfig,
    pub reminders: ReminderConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Redis configuration
#[derive(Debug, Clone)]
pub struct RedisConfig {
    pub url: String,
}

/// NYC open-data (Socrata) configuration
#[derive(Debug, Clone)]
pub struct OpenDataConfig {
    /// Dataset resource URL
    pub dataset_url: String,
    /// Socrata application token, sent as X-App-Token when present
    pub app_token: Option<String>,
    /// Upstream request timeout in seconds
    pub timeout_seconds: u64,
}

/// Spot search configuration
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Default radius for nearest-parking searches, in meters
    pub default_radius_meters: f64,
    /// Maximum radius accepted for any radius search, in meters
    pub max_radius_meters: f64,
    /// Record cap for viewport queries
    pub viewport_record_limit: u32,
    /// Record cap for radius queries
    pub radius_record_limit: u32,
}

/// Reminder dispatch configuration
#[derive(Debug, Clone)]
pub struct ReminderConfig {
    /// Cron schedule for the due-reminder sweep
    pub sweep_cron: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            redis: RedisConfig::from_env()?,
            opendata: OpenDataConfig::from_env()?,
            search: SearchConfig::from_env()?,
            reminders: ReminderConfig::from_env()?,
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".to_string()))?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl DatabaseConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("DATABASE_URL")
                .map_err(|_| ConfigError::Missing("DATABASE_URL".to_string()))?,
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| DEFAULT_DATABASE_MAX_CONNECTIONS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DATABASE_MAX_CONNECTIONS".to_string()))?,
        })
    }
}

impl RedisConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string()),
        })
    }
}

impl OpenDataConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            dataset_url: env::var("OPENDATA_DATASET_URL")
                .unwrap_or_else(|_| DEFAULT_DATASET_URL.to_string()),
            app_token: env::var("OPENDATA_APP_TOKEN").ok().filter(|t| !t.is_empty()),
            timeout_seconds: env::var("OPENDATA_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| DEFAULT_OPENDATA_TIMEOUT_SECONDS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("OPENDATA_TIMEOUT_SECONDS".to_string()))?,
        })
    }
}

impl SearchConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            default_radius_meters: env::var("SEARCH_DEFAULT_RADIUS_METERS")
                .unwrap_or_else(|_| DEFAULT_NEAREST_RADIUS_METERS.to_string())
                .parse()
                .map_err(|_| {
                    ConfigError::InvalidValue("SEARCH_DEFAULT_RADIUS_METERS".to_string())
                })?,
            max_radius_meters: env::var("SEARCH_MAX_RADIUS_METERS")
                .unwrap_or_else(|_| MAX_SEARCH_RADIUS_METERS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SEARCH_MAX_RADIUS_METERS".to_string()))?,
            viewport_record_limit: VIEWPORT_RECORD_LIMIT,
            radius_record_limit: RADIUS_RECORD_LIMIT,
        })
    }
}

impl ReminderConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            sweep_cron: env::var("REMINDER_SWEEP_CRON")
                .unwrap_or_else(|_| DEFAULT_REMINDER_SWEEP_CRON.to_string()),
        })
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        // Test that defaults are applied when env vars are not set
        let server = ServerConfig {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            rust_log: "info".to_string(),
        };
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 8080);
    }

    #[test]
    fn test_opendata_defaults() {
        let opendata = OpenDataConfig {
            dataset_url: DEFAULT_DATASET_URL.to_string(),
            app_token: None,
            timeout_seconds: DEFAULT_OPENDATA_TIMEOUT_SECONDS,
        };
        assert!(opendata.dataset_url.contains("data.cityofnewyork.us"));
        assert!(opendata.app_token.is_none());
    }
}
