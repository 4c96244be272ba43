//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{Result, UmmahError};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_api_config(&settings.api)?;
    validate_session_config(&settings.session)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate API configuration
fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    if config.landing_url.is_empty() {
        return Err(UmmahError::Config(
            "Landing API URL is required".to_string()
        ));
    }

    if config.masjid_url.is_empty() {
        return Err(UmmahError::Config(
            "Masjid API URL is required".to_string()
        ));
    }

    url::Url::parse(&config.landing_url)
        .map_err(|e| UmmahError::Config(format!("Invalid landing API URL: {}", e)))?;
    url::Url::parse(&config.masjid_url)
        .map_err(|e| UmmahError::Config(format!("Invalid masjid API URL: {}", e)))?;

    if config.timeout_seconds == 0 {
        return Err(UmmahError::Config(
            "API timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate session storage configuration
fn validate_session_config(config: &super::SessionConfig) -> Result<()> {
    if config.file_path.is_empty() {
        return Err(UmmahError::Config(
            "Session file path is required".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(UmmahError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(UmmahError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn test_empty_landing_url_rejected() {
        let mut settings = Settings::default();
        settings.api.landing_url = String::new();
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_malformed_url_rejected() {
        let mut settings = Settings::default();
        settings.api.masjid_url = "not a url".to_string();
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut settings = Settings::default();
        settings.api.timeout_seconds = 0;
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let mut settings = Settings::default();
        settings.logging.level = "verbose".to_string();
        assert!(validate_settings(&settings).is_err());
    }
}
