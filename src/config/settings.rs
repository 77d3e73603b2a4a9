//! Configuration settings structures for pubhook
//!
//! This module defines all configuration structures that can be loaded from
//! TOML files and environment variables.

use serde::{Deserialize, Serialize};

// ============================================================================
// Default value functions
// ============================================================================

fn default_app_name() -> String {
    "pubhook".to_string()
}

fn default_app_version() -> String {
    crate::pkg_version().to_string()
}

fn default_webhook_timeout() -> u64 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "compact".to_string()
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Application basic information configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Application version
    #[serde(default = "default_app_version")]
    pub version: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
        }
    }
}

// ============================================================================
// Webhook Configuration
// ============================================================================

/// Destination endpoint for publish notifications
///
/// This is the single injected configuration value the dispatch logic depends
/// on; it is resolved at startup and handed to the notifier, never read from
/// inside the dispatch path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookConfig {
    /// Destination URL for the JSON POST
    #[serde(default)]
    pub url: String,

    /// Per-request timeout for the outbound POST, in seconds
    #[serde(default = "default_webhook_timeout")]
    pub timeout_seconds: u64,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            timeout_seconds: default_webhook_timeout(),
        }
    }
}

// ============================================================================
// Logging Configuration
// ============================================================================

/// Console tracing configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: full, compact, json
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

// ============================================================================
// Root Settings
// ============================================================================

/// Root configuration structure aggregating all sections
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Application information
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Webhook destination
    #[serde(default)]
    pub webhook: WebhookConfig,

    /// Logging
    #[serde(default)]
    pub log: LogConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_from_minimal_toml() {
        let settings: Settings = toml::from_str(
            r#"
            [webhook]
            url = "https://hooks.example.com/projects"
            "#,
        )
        .expect("minimal settings should deserialize");

        assert_eq!(settings.webhook.url, "https://hooks.example.com/projects");
        assert_eq!(settings.webhook.timeout_seconds, 10);
        assert_eq!(settings.log.level, "info");
        assert_eq!(settings.application.name, "pubhook");
    }

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert!(settings.webhook.url.is_empty());
        assert_eq!(settings.log.format, "compact");
        assert_eq!(settings.application.version, crate::pkg_version());
    }
}
