//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{CourtDeskError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_api_config(&settings.api)?;
    validate_logging_config(&settings.logging)?;
    validate_export_config(&settings.export)?;
    validate_dashboard_config(&settings.dashboard)?;

    Ok(())
}

/// Validate API configuration
fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(CourtDeskError::Config(
            "API base URL is required".to_string()
        ));
    }

    let url = url::Url::parse(&config.base_url)
        .map_err(|e| CourtDeskError::Config(format!("Invalid API base URL: {}", e)))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(CourtDeskError::Config(
            format!("Unsupported API URL scheme: {}", url.scheme())
        ));
    }

    if config.timeout_seconds == 0 {
        return Err(CourtDeskError::Config(
            "API timeout must be greater than 0".to_string()
        ));
    }

    if matches!(config.token.as_deref(), Some(t) if t.trim().is_empty()) {
        return Err(CourtDeskError::Config(
            "API token must not be blank when set".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(CourtDeskError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(CourtDeskError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    if config.file_name.is_empty() {
        return Err(CourtDeskError::Config(
            "Log file name is required".to_string()
        ));
    }

    Ok(())
}

/// Validate export configuration
fn validate_export_config(config: &super::ExportConfig) -> Result<()> {
    if config.directory.is_empty() {
        return Err(CourtDeskError::Config(
            "Export directory is required".to_string()
        ));
    }

    if !config.delimiter.is_ascii() || config.delimiter == '"' {
        return Err(CourtDeskError::Config(
            format!("Invalid export delimiter: {:?}", config.delimiter)
        ));
    }

    Ok(())
}

/// Validate dashboard configuration
fn validate_dashboard_config(config: &super::DashboardConfig) -> Result<()> {
    if config.max_rows == 0 {
        return Err(CourtDeskError::Config(
            "Dashboard max rows must be greater than 0".to_string()
        ));
    }

    if config.max_event_capacity == 0 {
        return Err(CourtDeskError::Config(
            "Maximum event capacity must be greater than 0".to_string()
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(validate_settings(&Settings::default()).is_ok());
    }

    #[test]
    fn test_rejects_bad_base_url() {
        let mut settings = Settings::default();
        settings.api.base_url = "ftp://example.com/api/".to_string();
        assert!(validate_settings(&settings).is_err());

        settings.api.base_url = "not a url".to_string();
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let mut settings = Settings::default();
        settings.logging.level = "verbose".to_string();
        let err = validate_settings(&settings).unwrap_err();
        assert!(err.to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_rejects_blank_token() {
        let mut settings = Settings::default();
        settings.api.token = Some("   ".to_string());
        assert!(validate_settings(&settings).is_err());
    }
}
