//! Configuration module for textsift
//!
//! Settings are read from `config.toml` in the user's config directory
//! (`~/.config/textsift/config.toml` on Linux) or from a file given with
//! `--config`. The file is optional and is never written by the application:
//! nothing the user does at runtime is persisted.
//!
//! ```toml
//! start_dir = "/var/log"
//! show_hidden = false
//! reread_on_search = false
//! log_level = "textsift=debug"
//! message_ttl_secs = 5
//! ```

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

const fn default_message_ttl_secs() -> u64 {
    5
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TextsiftConfig {
    /// Directory the file picker starts in (defaults to the working directory)
    #[serde(default)]
    pub start_dir: Option<PathBuf>,

    /// Offer dot-files in the file picker
    #[serde(default)]
    pub show_hidden: bool,

    /// Read the file again on every search instead of filtering the loaded copy
    #[serde(default)]
    pub reread_on_search: bool,

    /// Tracing filter directive, overridden by `RUST_LOG`
    #[serde(default)]
    pub log_level: Option<String>,

    /// How long status bar messages stay visible, in seconds
    #[serde(default = "default_message_ttl_secs")]
    pub message_ttl_secs: u64,
}

impl Default for TextsiftConfig {
    fn default() -> Self {
        Self {
            start_dir: None,
            show_hidden: false,
            reread_on_search: false,
            log_level: None,
            message_ttl_secs: default_message_ttl_secs(),
        }
    }
}

impl TextsiftConfig {
    /// Get the path to the default config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("textsift").join("config.toml"))
    }

    /// Load the default config file, falling back to defaults if it does not exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let Ok(config_path) = Self::config_path() else {
            return Ok(Self::default());
        };

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing, unreadable or invalid.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Status message lifetime
    #[must_use]
    pub const fn message_ttl(&self) -> Duration {
        Duration::from_secs(self.message_ttl_secs)
    }

    /// Directory the file picker opens in
    #[must_use]
    pub fn start_dir(&self) -> PathBuf {
        self.start_dir
            .clone()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TempText;

    #[test]
    fn test_default_config() {
        let config = TextsiftConfig::default();

        assert!(config.start_dir.is_none());
        assert!(!config.show_hidden);
        assert!(!config.reread_on_search);
        assert!(config.log_level.is_none());
        assert_eq!(config.message_ttl(), Duration::from_secs(5));
    }

    #[test]
    fn test_load_from_file() {
        let file = TempText::new(
            "config.toml",
            "start_dir = \"/var/log\"\nshow_hidden = true\nreread_on_search = true\nmessage_ttl_secs = 2\n",
        );

        let config = TextsiftConfig::load_from(file.path()).unwrap();
        assert_eq!(config.start_dir, Some(PathBuf::from("/var/log")));
        assert!(config.show_hidden);
        assert!(config.reread_on_search);
        assert_eq!(config.message_ttl_secs, 2);
        assert_eq!(config.start_dir(), PathBuf::from("/var/log"));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let file = TempText::new("config.toml", "log_level = \"textsift=debug\"\n");

        let config = TextsiftConfig::load_from(file.path()).unwrap();
        assert_eq!(config.log_level.as_deref(), Some("textsift=debug"));
        assert_eq!(config.message_ttl_secs, 5);
        assert!(!config.reread_on_search);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(TextsiftConfig::load_from(&dir.path().join("missing.toml")).is_err());
    }

    #[test]
    fn test_invalid_file_is_error() {
        let file = TempText::new("config.toml", "show_hidden = \"sometimes\"\n");
        assert!(TextsiftConfig::load_from(file.path()).is_err());
    }

    #[test]
    fn test_start_dir_falls_back_to_cwd() {
        let config = TextsiftConfig::default();
        let expected = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        assert_eq!(config.start_dir(), expected);
    }

    #[test]
    fn test_config_path() {
        if let Ok(path) = TextsiftConfig::config_path() {
            assert!(path.ends_with("textsift/config.toml"));
        }
    }
}
