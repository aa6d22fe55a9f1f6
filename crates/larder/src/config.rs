//! Configuration management for larder.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default data directory name.
const DATA_DIR_NAME: &str = "larder";

/// Default database file name.
const DATABASE_FILE_NAME: &str = "larder.db";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `LARDER_`, with `__` between
///    section and key, e.g. `LARDER_SWEEP__INTERVAL_HOURS`)
/// 2. TOML config file at `~/.config/larder/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage configuration.
    pub store: StoreConfig,
    /// Reminder sweep configuration.
    pub sweep: SweepConfig,
    /// Notification configuration.
    pub notify: NotifyConfig,
}

/// Storage-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Path to the database file.
    /// Defaults to `~/.local/share/larder/larder.db`
    pub database_path: Option<PathBuf>,
}

/// Reminder-sweep configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Hours between sweeps in watch mode.
    pub interval_hours: u32,
    /// Dispatch a reminder when an unsent entry has this many days or
    /// fewer remaining (and has not already expired).
    pub reminder_threshold_days: u32,
}

/// Notification-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifyConfig {
    /// Whether to dispatch reminder emails at all.
    pub enabled: bool,
    /// Email service endpoint URL.
    pub endpoint: String,
    /// Service identifier at the email provider.
    pub service_id: String,
    /// Template identifier at the email provider.
    pub template_id: String,
    /// Public API key for the email provider.
    pub public_key: String,
    /// Recipient used when an add omits `--email`.
    pub default_recipient: Option<String>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            interval_hours: 24,
            reminder_threshold_days: 2,
        }
    }
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: "https://api.emailjs.com/api/v1.0/email/send".to_string(),
            service_id: "service_llp2u38".to_string(),
            template_id: "template_6l7hw3i".to_string(),
            public_key: String::new(),
            default_recipient: None,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists)
    /// 3. Environment variables (prefixed with `LARDER_`; `__` separates
    ///    the section from the key, which may itself contain underscores)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file).nested())
            .merge(Env::prefixed("LARDER_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(DATA_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join(DATA_DIR_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.sweep.interval_hours == 0 {
            return Err(Error::ConfigValidation {
                message: "interval_hours must be greater than 0".to_string(),
            });
        }

        if self.notify.enabled && self.notify.endpoint.trim().is_empty() {
            return Err(Error::ConfigValidation {
                message: "notify.endpoint must be set when notifications are enabled"
                    .to_string(),
            });
        }

        Ok(())
    }

    /// Get the database path, resolving defaults if not set.
    #[must_use]
    pub fn database_path(&self) -> PathBuf {
        self.store
            .database_path
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join(DATABASE_FILE_NAME))
    }

    /// Get the sweep interval as a Duration.
    #[must_use]
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(u64::from(self.sweep.interval_hours) * 60 * 60)
    }

    /// Get the reminder threshold in whole days.
    #[must_use]
    pub fn reminder_threshold(&self) -> i64 {
        i64::from(self.sweep.reminder_threshold_days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert!(config.notify.enabled);
        assert_eq!(config.sweep.interval_hours, 24);
        assert_eq!(config.sweep.reminder_threshold_days, 2);
        assert!(config.store.database_path.is_none());
    }

    #[test]
    fn test_default_notify_config() {
        let notify = NotifyConfig::default();

        assert!(notify.enabled);
        assert!(notify.endpoint.contains("emailjs.com"));
        assert!(!notify.service_id.is_empty());
        assert!(!notify.template_id.is_empty());
        assert!(notify.default_recipient.is_none());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_interval() {
        let mut config = Config::default();
        config.sweep.interval_hours = 0;

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("interval_hours"));
    }

    #[test]
    fn test_validate_empty_endpoint() {
        let mut config = Config::default();
        config.notify.endpoint = String::new();

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("endpoint"));
    }

    #[test]
    fn test_validate_empty_endpoint_allowed_when_disabled() {
        let mut config = Config::default();
        config.notify.enabled = false;
        config.notify.endpoint = String::new();

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_database_path_default() {
        let config = Config::default();
        let path = config.database_path();
        assert!(path.to_string_lossy().contains("larder.db"));
    }

    #[test]
    fn test_database_path_custom() {
        let mut config = Config::default();
        config.store.database_path = Some(PathBuf::from("/custom/path/db.sqlite"));

        assert_eq!(
            config.database_path(),
            PathBuf::from("/custom/path/db.sqlite")
        );
    }

    #[test]
    fn test_sweep_interval() {
        let config = Config::default();
        assert_eq!(config.sweep_interval(), Duration::from_secs(24 * 60 * 60));
    }

    #[test]
    fn test_reminder_threshold() {
        let config = Config::default();
        assert_eq!(config.reminder_threshold(), 2);
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("larder"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        // Loading from a nonexistent path should work (uses defaults)
        let result = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml")));
        assert!(result.is_ok());
    }

    #[test]
    fn test_env_override_multiword_key() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("LARDER_SWEEP__INTERVAL_HOURS", "6");
            jail.set_env("LARDER_SWEEP__REMINDER_THRESHOLD_DAYS", "1");

            let config =
                Config::load_from(Some(jail.directory().join("config.toml"))).unwrap();
            assert_eq!(config.sweep.interval_hours, 6);
            assert_eq!(config.sweep.reminder_threshold_days, 1);
            Ok(())
        });
    }

    #[test]
    fn test_env_override_notify_and_store_keys() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("LARDER_NOTIFY__DEFAULT_RECIPIENT", "home@example.com");
            jail.set_env("LARDER_NOTIFY__PUBLIC_KEY", "pk-123");
            jail.set_env("LARDER_STORE__DATABASE_PATH", "/custom/larder.db");

            let config =
                Config::load_from(Some(jail.directory().join("config.toml"))).unwrap();
            assert_eq!(
                config.notify.default_recipient.as_deref(),
                Some("home@example.com")
            );
            assert_eq!(config.notify.public_key, "pk-123");
            assert_eq!(
                config.store.database_path,
                Some(PathBuf::from("/custom/larder.db"))
            );
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_config_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                [sweep]
                interval_hours = 12
                "#,
            )?;
            jail.set_env("LARDER_SWEEP__INTERVAL_HOURS", "6");

            let config =
                Config::load_from(Some(jail.directory().join("config.toml"))).unwrap();
            assert_eq!(config.sweep.interval_hours, 6);
            Ok(())
        });
    }

    #[test]
    fn test_config_serialize() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("interval_hours"));
        assert!(json.contains("endpoint"));
    }

    #[test]
    fn test_sweep_config_deserialize() {
        let json = r#"{"interval_hours": 12, "reminder_threshold_days": 1}"#;
        let sweep: SweepConfig = serde_json::from_str(json).unwrap();
        assert_eq!(sweep.interval_hours, 12);
        assert_eq!(sweep.reminder_threshold_days, 1);
    }
}
