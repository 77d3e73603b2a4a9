//! Configuration loader for pubhook
//!
//! This module provides the `ConfigLoader` struct that handles loading
//! configuration from multiple sources with proper precedence.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};

use crate::config::environment::Environment as AppEnvironment;
use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable for configuration directory
const CONFIG_DIR_ENV: &str = "PUBHOOK_CONFIG_DIR";

/// Environment variable for specific configuration file
const CONFIG_FILE_ENV: &str = "PUBHOOK_CONFIG_FILE";

/// Default configuration directory
const DEFAULT_CONFIG_DIR: &str = "config";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "PUBHOOK";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

/// Configuration loader that handles layered configuration loading
///
/// The loader supports the following configuration sources (in order of priority):
/// 1. `default.toml` - Base default configuration (required)
/// 2. `{environment}.toml` - Environment-specific configuration (optional)
/// 3. `local.toml` - Local development overrides (optional)
/// 4. `PUBHOOK_*` environment variables (highest priority)
#[derive(Debug)]
pub struct ConfigLoader {
    /// Configuration directory path
    config_dir: PathBuf,
    /// Specific configuration file path (if set, skips layered loading)
    config_file: Option<PathBuf>,
    /// Current application environment
    environment: AppEnvironment,
}

impl ConfigLoader {
    /// Create a new configuration loader
    ///
    /// This reads environment variables to determine:
    /// - Configuration directory (`PUBHOOK_CONFIG_DIR`)
    /// - Specific configuration file (`PUBHOOK_CONFIG_FILE`)
    /// - Application environment (`PUBHOOK_APP_ENV`)
    ///
    /// # Errors
    ///
    /// Returns an error if both `PUBHOOK_CONFIG_DIR` and `PUBHOOK_CONFIG_FILE`
    /// are set, as they are mutually exclusive.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = std::env::var(CONFIG_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_DIR));

        let config_file = std::env::var(CONFIG_FILE_ENV).ok().map(PathBuf::from);

        if config_file.is_some() && std::env::var(CONFIG_DIR_ENV).is_ok() {
            return Err(ConfigError::mutual_exclusivity(
                "PUBHOOK_CONFIG_DIR and PUBHOOK_CONFIG_FILE cannot both be set. \
                 Use PUBHOOK_CONFIG_DIR for layered configuration or \
                 PUBHOOK_CONFIG_FILE for a single configuration file.",
            ));
        }

        let environment = AppEnvironment::from_env();

        Ok(Self {
            config_dir,
            config_file,
            environment,
        })
    }

    /// Get the current application environment
    pub fn environment(&self) -> AppEnvironment {
        self.environment
    }

    /// Load configuration from all sources
    ///
    /// If `PUBHOOK_CONFIG_FILE` is set, loads only that file.
    /// Otherwise, performs layered loading from the configuration directory.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `default.toml` is not found (when using layered loading)
    /// - Configuration parsing fails
    /// - Configuration validation fails
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let config = self.build_config()?;
        let settings: Settings = config.try_deserialize().map_err(|e| {
            ConfigError::ParseError(format!("Failed to deserialize configuration: {}", e))
        })?;

        settings.validate()?;

        Ok(settings)
    }

    /// Build the config::Config instance from all sources
    fn build_config(&self) -> Result<Config, ConfigError> {
        let builder = Config::builder();

        let builder = if let Some(ref config_file) = self.config_file {
            // Single file mode
            self.add_file_source(builder, config_file, true)?
        } else {
            // Layered loading mode
            self.build_layered_config(builder)?
        };

        // Environment variables are always the highest priority:
        // PUBHOOK_WEBHOOK__URL -> webhook.url
        let builder = Self::add_env_source(builder);

        builder.build().map_err(ConfigError::from)
    }

    /// Build layered configuration from multiple files
    fn build_layered_config(
        &self,
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        // 1. default.toml (required)
        let default_path = self.config_dir.join("default.toml");
        let builder = self.add_file_source(builder, &default_path, true)?;

        // 2. {environment}.toml (optional)
        let env_path = self
            .config_dir
            .join(format!("{}.toml", self.environment.as_str()));
        let builder = self.add_file_source(builder, &env_path, false)?;

        // 3. local.toml (optional)
        let local_path = self.config_dir.join("local.toml");
        let builder = self.add_file_source(builder, &local_path, false)?;

        Ok(builder)
    }

    /// Add a file source to the config builder
    fn add_file_source(
        &self,
        builder: config::ConfigBuilder<config::builder::DefaultState>,
        path: &Path,
        required: bool,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        if required && !path.exists() {
            return Err(ConfigError::file_not_found(format!(
                "Required configuration file not found: {}",
                path.display()
            )));
        }

        Ok(builder.add_source(
            File::new(path.to_str().unwrap_or_default(), FileFormat::Toml).required(required),
        ))
    }

    /// Add environment variable source to the config builder
    ///
    /// Environment variables with prefix `PUBHOOK_` are mapped to configuration
    /// keys. Double underscores (`__`) separate nested keys:
    /// - `PUBHOOK_WEBHOOK__URL` -> `webhook.url`
    /// - `PUBHOOK_LOG__LEVEL` -> `log.level`
    fn add_env_source(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> config::ConfigBuilder<config::builder::DefaultState> {
        builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator(ENV_SEPARATOR)
                .ignore_empty(true)
                .try_parsing(true),
        )
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| Self {
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            config_file: None,
            environment: AppEnvironment::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Serialize tests that touch process-wide environment variables
    static TEST_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to create a temporary config directory with files
    fn setup_config_dir(files: &[(&str, &str)]) -> TempDir {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        for (name, content) in files {
            let path = temp_dir.path().join(name);
            fs::write(&path, content).expect("Failed to write config file");
        }
        temp_dir
    }

    /// Helper to safely set environment variables for a test
    struct EnvGuard {
        vars_to_restore: Vec<(String, Option<String>)>,
    }

    impl EnvGuard {
        fn new() -> Self {
            Self {
                vars_to_restore: Vec::new(),
            }
        }

        fn set(&mut self, key: &str, value: &str) {
            let original = std::env::var(key).ok();
            self.vars_to_restore.push((key.to_string(), original));
            unsafe {
                std::env::set_var(key, value);
            }
        }

        fn remove(&mut self, key: &str) {
            let original = std::env::var(key).ok();
            self.vars_to_restore.push((key.to_string(), original));
            unsafe {
                std::env::remove_var(key);
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, original_value) in &self.vars_to_restore {
                unsafe {
                    match original_value {
                        Some(value) => std::env::set_var(key, value),
                        None => std::env::remove_var(key),
                    }
                }
            }
        }
    }

    const DEFAULT_TOML: &str = r#"
        [webhook]
        url = "https://hooks.example.com/projects"
        timeout_seconds = 10
    "#;

    #[test]
    fn test_config_loader_new_default() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();

        env.remove("PUBHOOK_CONFIG_DIR");
        env.remove("PUBHOOK_CONFIG_FILE");
        env.remove("PUBHOOK_APP_ENV");

        let loader = ConfigLoader::new().expect("Should create loader");
        assert_eq!(loader.config_dir, PathBuf::from("config"));
        assert!(loader.config_file.is_none());
        assert_eq!(loader.environment, AppEnvironment::Development);
    }

    #[test]
    fn test_config_loader_dir_and_file_mutually_exclusive() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();

        env.set("PUBHOOK_CONFIG_DIR", "/custom/config");
        env.set("PUBHOOK_CONFIG_FILE", "/path/to/config.toml");

        assert!(matches!(
            ConfigLoader::new(),
            Err(ConfigError::MutualExclusivityError(_))
        ));
    }

    #[test]
    fn test_load_layered_defaults() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();

        let dir = setup_config_dir(&[("default.toml", DEFAULT_TOML)]);
        env.remove("PUBHOOK_CONFIG_FILE");
        env.remove("PUBHOOK_APP_ENV");
        env.set("PUBHOOK_CONFIG_DIR", dir.path().to_str().unwrap());

        let settings = ConfigLoader::new().unwrap().load().expect("should load");
        assert_eq!(settings.webhook.url, "https://hooks.example.com/projects");
        assert_eq!(settings.log.level, "info");
    }

    #[test]
    fn test_load_missing_default_toml_fails() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();

        let dir = TempDir::new().unwrap();
        env.remove("PUBHOOK_CONFIG_FILE");
        env.set("PUBHOOK_CONFIG_DIR", dir.path().to_str().unwrap());

        assert!(matches!(
            ConfigLoader::new().unwrap().load(),
            Err(ConfigError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_environment_toml_overrides_default() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();

        let dir = setup_config_dir(&[
            ("default.toml", DEFAULT_TOML),
            (
                "staging.toml",
                r#"
                [webhook]
                url = "https://staging.example.com/hook"
                "#,
            ),
        ]);
        env.remove("PUBHOOK_CONFIG_FILE");
        env.set("PUBHOOK_CONFIG_DIR", dir.path().to_str().unwrap());
        env.set("PUBHOOK_APP_ENV", "staging");

        let settings = ConfigLoader::new().unwrap().load().expect("should load");
        assert_eq!(settings.webhook.url, "https://staging.example.com/hook");
        // Untouched keys fall through to default.toml
        assert_eq!(settings.webhook.timeout_seconds, 10);
    }

    #[test]
    fn test_env_var_overrides_files() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();

        let dir = setup_config_dir(&[("default.toml", DEFAULT_TOML)]);
        env.remove("PUBHOOK_CONFIG_FILE");
        env.remove("PUBHOOK_APP_ENV");
        env.set("PUBHOOK_CONFIG_DIR", dir.path().to_str().unwrap());
        env.set("PUBHOOK_WEBHOOK__URL", "https://override.example.com/hook");

        let settings = ConfigLoader::new().unwrap().load().expect("should load");
        assert_eq!(settings.webhook.url, "https://override.example.com/hook");
    }

    #[test]
    fn test_single_file_mode() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();

        let dir = setup_config_dir(&[("standalone.toml", DEFAULT_TOML)]);
        let file = dir.path().join("standalone.toml");
        env.remove("PUBHOOK_CONFIG_DIR");
        env.remove("PUBHOOK_APP_ENV");
        env.set("PUBHOOK_CONFIG_FILE", file.to_str().unwrap());

        let settings = ConfigLoader::new().unwrap().load().expect("should load");
        assert_eq!(settings.webhook.url, "https://hooks.example.com/projects");
    }

    #[test]
    fn test_load_rejects_invalid_settings() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();

        let dir = setup_config_dir(&[(
            "default.toml",
            r#"
            [webhook]
            url = "https://hooks.example.com/projects"
            timeout_seconds = 0
            "#,
        )]);
        env.remove("PUBHOOK_CONFIG_FILE");
        env.remove("PUBHOOK_APP_ENV");
        env.set("PUBHOOK_CONFIG_DIR", dir.path().to_str().unwrap());

        assert!(matches!(
            ConfigLoader::new().unwrap().load(),
            Err(ConfigError::ValidationError { .. })
        ));
    }
}
