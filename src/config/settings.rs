//! Application settings

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CURRENCIES: &[&str] = &["USD", "EUR", "GBP", "JPY"];
pub const TIMEZONES: &[&str] = &[
    "America/New_York",
    "America/Chicago",
    "America/Denver",
    "America/Los_Angeles",
];
pub const DATE_FORMATS: &[&str] = &["MM/DD/YYYY", "DD/MM/YYYY", "YYYY-MM-DD"];
pub const LANGUAGES: &[&str] = &["en", "es", "fr", "de"];
pub const SESSION_TIMEOUTS: &[u32] = &[15, 30, 60, 120];
pub const PASSWORD_EXPIRIES: &[u32] = &[30, 60, 90, 180];
pub const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid settings: {0}")]
    Invalid(String),
}

pub type SettingsResult<T> = std::result::Result<T, SettingsError>;

/// Company profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanySettings {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl Default for CompanySettings {
    fn default() -> Self {
        Self {
            name: "TrackNStock".to_string(),
            email: "admin@tracknstock.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            address: "123 Main St, New York, NY 10001".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalizationSettings {
    pub currency: String,
    pub timezone: String,
    pub date_format: String,
    pub language: String,
}

impl Default for LocalizationSettings {
    fn default() -> Self {
        Self {
            currency: "USD".to_string(),
            timezone: "America/New_York".to_string(),
            date_format: "MM/DD/YYYY".to_string(),
            language: "en".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    pub email: bool,
    pub push: bool,
    pub sms: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email: true,
            push: true,
            sms: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecuritySettings {
    pub two_factor: bool,
    /// Minutes
    pub session_timeout: u32,
    /// Days
    pub password_expiry: u32,
}

impl Default for SecuritySettings {
    fn default() -> Self {
        Self {
            two_factor: true,
            session_timeout: 30,
            password_expiry: 90,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceSettings {
    pub dark_mode: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSettings {
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            page_size_options: vec![10, 25, 50, 100],
        }
    }
}

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub company: CompanySettings,
    pub localization: LocalizationSettings,
    pub notifications: NotificationSettings,
    pub security: SecuritySettings,
    pub appearance: AppearanceSettings,
    pub table: TableSettings,

    /// Simulated data source latency in milliseconds
    pub fetch_latency_ms: u64,

    /// Log level
    pub log_level: String,

    /// Log file path, defaults to the config directory
    pub log_file: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            company: CompanySettings::default(),
            localization: LocalizationSettings::default(),
            notifications: NotificationSettings::default(),
            security: SecuritySettings::default(),
            appearance: AppearanceSettings::default(),
            table: TableSettings::default(),
            fetch_latency_ms: 600,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl Settings {
    /// Load settings from file or fall back to defaults
    pub fn load(path: Option<&Path>) -> SettingsResult<Self> {
        let config_path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::default_config_path);

        if !config_path.exists() {
            tracing::debug!("No settings at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path).map_err(|source| SettingsError::Io {
            path: config_path.clone(),
            source,
        })?;
        let settings: Self = serde_json::from_str(&content).map_err(|source| SettingsError::Parse {
            path: config_path.clone(),
            source,
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to file
    pub fn save(&self, path: Option<&Path>) -> SettingsResult<PathBuf> {
        self.validate()?;
        let config_path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::default_config_path);

        // Create parent directory if needed
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| SettingsError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content = serde_json::to_string_pretty(self).map_err(|source| SettingsError::Parse {
            path: config_path.clone(),
            source,
        })?;
        std::fs::write(&config_path, content).map_err(|source| SettingsError::Io {
            path: config_path.clone(),
            source,
        })?;
        tracing::info!("Settings saved to {}", config_path.display());
        Ok(config_path)
    }

    pub fn validate(&self) -> SettingsResult<()> {
        if self.table.page_size_options.is_empty() {
            return Err(SettingsError::Invalid(
                "page_size_options must not be empty".to_string(),
            ));
        }
        if self.table.page_size_options.contains(&0) {
            return Err(SettingsError::Invalid(
                "page_size_options must not contain 0".to_string(),
            ));
        }
        if self.table.default_page_size == 0 {
            return Err(SettingsError::Invalid(
                "default_page_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Page size options including the default, sorted
    pub fn page_sizes(&self) -> Vec<usize> {
        let mut sizes = self.table.page_size_options.clone();
        if !sizes.contains(&self.table.default_page_size) {
            sizes.push(self.table.default_page_size);
        }
        sizes.sort_unstable();
        sizes.dedup();
        sizes
    }

    /// Get default config directory
    pub fn config_dir() -> PathBuf {
        ProjectDirs::from("com", "tracknstock", "tracknstock-tui")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".config")
                    .join("tracknstock-tui")
            })
    }

    /// Get default config file path
    pub fn default_config_path() -> PathBuf {
        Self::config_dir().join("config.json")
    }

    /// Get default log file path
    pub fn default_log_path() -> PathBuf {
        Self::config_dir().join("tracknstock.log")
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(Self::default_log_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("tracknstock-{}", uuid::Uuid::new_v4()))
            .join("config.json")
    }

    #[test]
    fn missing_file_gives_defaults() {
        let settings = Settings::load(Some(&temp_path())).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn save_then_load() {
        let path = temp_path();
        let mut settings = Settings::default();
        settings.company.name = "Acme Freight".to_string();
        settings.appearance.dark_mode = true;
        settings.table.default_page_size = 25;

        settings.save(Some(&path)).unwrap();
        let loaded = Settings::load(Some(&path)).unwrap();
        assert_eq!(loaded, settings);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let path = temp_path();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, r#"{ "appearance": { "dark_mode": true } }"#).unwrap();

        let loaded = Settings::load(Some(&path)).unwrap();
        assert!(loaded.appearance.dark_mode);
        assert_eq!(loaded.table, TableSettings::default());

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let path = temp_path();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            Settings::load(Some(&path)),
            Err(SettingsError::Parse { .. })
        ));

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn validation_rejects_bad_table_settings() {
        let mut settings = Settings::default();
        settings.table.page_size_options.clear();
        assert!(matches!(settings.validate(), Err(SettingsError::Invalid(_))));

        let mut settings = Settings::default();
        settings.table.default_page_size = 0;
        assert!(matches!(settings.validate(), Err(SettingsError::Invalid(_))));
    }

    #[test]
    fn page_sizes_include_default() {
        let mut settings = Settings::default();
        settings.table.default_page_size = 20;
        assert_eq!(settings.page_sizes(), vec![10, 20, 25, 50, 100]);
    }
}
