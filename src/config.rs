//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::branding::APP_DATA_DIR;
use crate::theme::Theme;

/// Initial theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Start in light mode
    #[default]
    Light,
    /// Start in dark mode
    Dark,
    /// Follow the OS dark/light setting
    System,
}

impl ThemeMode {
    /// Resolves the preference to a concrete theme.
    ///
    /// `System` asks the OS through `dark-light`; an unspecified mode or a
    /// detection failure resolves to light.
    #[must_use]
    pub fn resolve(self) -> Theme {
        match self {
            Self::Light => Theme::Light,
            Self::Dark => Theme::Dark,
            Self::System => match dark_light::detect() {
                Ok(dark_light::Mode::Dark) => Theme::Dark,
                Ok(dark_light::Mode::Light | dark_light::Mode::Unspecified) | Err(_) => {
                    Theme::Light
                }
            },
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Theme used when the session starts
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Remember the last toggled theme across sessions
    #[serde(default)]
    pub remember_theme: bool,
    /// Last toggled theme (only written when `remember_theme` is set)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_theme: Option<Theme>,
}

/// Web server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    3001
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/devfolio/config.toml`
/// - macOS: `~/Library/Application Support/devfolio/config.toml`
/// - Windows: `%APPDATA%\devfolio\config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Web server settings
    #[serde(default)]
    pub web: WebConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DATA_DIR);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from `path`, returning defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the default config file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to `path` using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write temp config file: {}", temp_path.display())
        })?;

        fs::rename(&temp_path, path).with_context(|| {
            format!("Failed to rename temp config file to: {}", path.display())
        })?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - `web.host` is not empty
    /// - `web.port` is not 0
    pub fn validate(&self) -> Result<()> {
        if self.web.host.trim().is_empty() {
            anyhow::bail!("web.host must not be empty");
        }
        if self.web.port == 0 {
            anyhow::bail!("web.port must be between 1 and 65535");
        }
        Ok(())
    }

    /// Theme a new session starts with, before any stored preference.
    #[must_use]
    pub fn initial_theme(&self) -> Theme {
        self.ui.theme_mode.resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.ui.theme_mode, ThemeMode::Light);
        assert!(!config.ui.remember_theme);
        assert_eq!(config.ui.last_theme, None);
        assert_eq!(config.web.port, 3001);
        assert_eq!(config.initial_theme(), Theme::Light);
    }

    #[test]
    fn test_config_validate() {
        let mut config = Config::new();
        assert!(config.validate().is_ok());

        config.web.port = 0;
        assert!(config.validate().is_err());

        config.web.port = 8080;
        config.web.host = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_theme_mode_resolve_explicit() {
        assert_eq!(ThemeMode::Light.resolve(), Theme::Light);
        assert_eq!(ThemeMode::Dark.resolve(), Theme::Dark);
    }

    #[test]
    fn test_theme_mode_system_does_not_panic() {
        let theme = ThemeMode::System.resolve();
        assert!(theme == Theme::Light || theme == Theme::Dark);
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::new();
        config.ui.theme_mode = ThemeMode::Dark;
        config.ui.remember_theme = true;
        config.ui.last_theme = Some(Theme::Dark);
        config.web.port = 8080;

        config.save_to(&path).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("toml.tmp").exists());

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[ui]\ntheme_mode = \"Dark\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.ui.theme_mode, ThemeMode::Dark);
        assert_eq!(config.web, WebConfig::default());
    }

    #[test]
    fn test_load_invalid_toml_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[ui\ntheme_mode = ").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
