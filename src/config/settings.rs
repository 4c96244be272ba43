//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

/// Platform REST API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the landing/ummah API
    pub landing_url: String,
    /// Base URL of the masjid domain API
    pub masjid_url: String,
    /// Transport-level request timeout
    pub timeout_seconds: u64,
    /// User agent sent with every request
    pub user_agent: String,
}

/// Durable session storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Path of the JSON file holding the auth token and login profile
    pub file_path: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: String,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("UMMAH"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::UmmahError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                landing_url: "https://api.ummah.example/landing".to_string(),
                masjid_url: "https://api.ummah.example/masjid".to_string(),
                timeout_seconds: 30,
                user_agent: "UmmahAdmin/1.0".to_string(),
            },
            session: SessionConfig {
                file_path: "session.json".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: "/var/log/ummah-admin".to_string(),
            },
        }
    }
}
