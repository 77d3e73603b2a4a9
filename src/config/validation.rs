//! Configuration validation logic
//!
//! Validation runs once after loading, so a bad endpoint URL or log level is
//! rejected at startup instead of on the first dispatch.

use crate::config::error::ConfigError;
use crate::config::settings::{LogConfig, Settings, WebhookConfig};
use reqwest::Url;

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Valid log formats
const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

impl WebhookConfig {
    /// Validate webhook configuration
    ///
    /// # Validation Rules
    /// - URL must not be empty
    /// - URL must parse and use the http or https scheme
    /// - Timeout must be greater than 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.is_empty() {
            return Err(ConfigError::validation(
                "webhook.url",
                "Webhook URL is required. Please specify the destination endpoint.",
            ));
        }

        let url = Url::parse(&self.url).map_err(|_| {
            ConfigError::validation(
                "webhook.url",
                "Invalid URL format. Expected http(s)://host[:port]/path",
            )
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::validation(
                "webhook.url",
                "Webhook URL must use the http or https scheme.",
            ));
        }

        if self.timeout_seconds == 0 {
            return Err(ConfigError::validation(
                "webhook.timeout_seconds",
                "Timeout must be greater than 0 seconds.",
            ));
        }

        Ok(())
    }
}

impl LogConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.level.as_str()) {
            return Err(ConfigError::validation(
                "log.level",
                "Invalid log level. Valid values are: trace, debug, info, warn, error.",
            ));
        }

        if !VALID_LOG_FORMATS.contains(&self.format.as_str()) {
            return Err(ConfigError::validation(
                "log.format",
                "Invalid log format. Valid values are: full, compact, json.",
            ));
        }

        Ok(())
    }
}

impl Settings {
    /// Validate all configuration sections
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.webhook.validate()?;
        self.log.validate()?;
        Ok(())
    }
}
