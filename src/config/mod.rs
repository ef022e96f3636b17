// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[notifications]` - Defaults applied to every new notification
//! - `[diagnostics]` - Diagnostic event buffer size
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass a directory override to `load()`/`save()`
//! 3. Set `ICED_TOAST_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load(None);
//!
//! config.notifications.default_duration_ms = Some(3000);
//!
//! config::save(&config, None).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::diagnostics::BufferCapacity;
use crate::error::Result;
use crate::ui::notifications::{AutoDismiss, NotificationDefaults, Position, TransitionWindow};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedToast";

/// Environment variable overriding the configuration directory.
pub const CONFIG_DIR_ENV: &str = "ICED_TOAST_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// General settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Color mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Defaults applied to notifications that do not set a field explicitly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    /// Auto-dismiss duration in milliseconds; `0` keeps notifications open.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_duration_ms: Option<u64>,

    /// Screen anchor used when a notification does not request one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_position: Option<Position>,

    /// Length of the exit animation in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition_ms: Option<u64>,

    /// Whether a close button is shown by default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closable: Option<bool>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: Some(DEFAULT_AUTO_DISMISS_MS),
            default_position: Some(Position::default()),
            transition_ms: Some(DEFAULT_TRANSITION_MS),
            closable: Some(DEFAULT_CLOSABLE),
        }
    }
}

/// Diagnostics settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    /// Number of events retained in memory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer_capacity: Option<usize>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: Some(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY),
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

impl Config {
    /// Builds the store defaults from the `[notifications]` section.
    #[must_use]
    pub fn notification_defaults(&self) -> NotificationDefaults {
        let section = &self.notifications;
        NotificationDefaults {
            duration: section
                .default_duration_ms
                .map_or_else(AutoDismiss::default, AutoDismiss::from_millis),
            position: section.default_position.unwrap_or_default(),
            closable: section.closable.unwrap_or(DEFAULT_CLOSABLE),
            ..NotificationDefaults::default()
        }
    }

    /// Returns the configured exit animation length, clamped to bounds.
    #[must_use]
    pub fn transition_window(&self) -> TransitionWindow {
        self.notifications
            .transition_ms
            .map_or_else(TransitionWindow::default, TransitionWindow::from_millis)
    }

    /// Returns the configured diagnostics buffer capacity, clamped to bounds.
    #[must_use]
    pub fn buffer_capacity(&self) -> BufferCapacity {
        self.diagnostics
            .buffer_capacity
            .map_or_else(BufferCapacity::default, BufferCapacity::new)
    }
}

// =============================================================================
// Path Resolution
// =============================================================================

/// Resolves the config file path.
///
/// An explicit directory wins over `ICED_TOAST_CONFIG_DIR`, which wins over
/// the platform config directory.
#[must_use]
pub fn config_path(dir_override: Option<&Path>) -> Option<PathBuf> {
    if let Some(dir) = dir_override {
        return Some(dir.join(CONFIG_FILE));
    }
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir).join(CONFIG_FILE));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration, falling back to defaults.
///
/// The second element carries a human-readable warning when an existing file
/// could not be read or parsed.
pub fn load(dir_override: Option<&Path>) -> (Config, Option<String>) {
    let Some(path) = config_path(dir_override) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(error) => (
            Config::default(),
            Some(format!("{}: {error}; using defaults", path.display())),
        ),
    }
}

/// Saves the configuration to the resolved path.
pub fn save(config: &Config, dir_override: Option<&Path>) -> Result<()> {
    if let Some(path) = config_path(dir_override) {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::ui::notifications::Variant;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_sections() {
        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Light,
            },
            notifications: NotificationsConfig {
                default_duration_ms: Some(1200),
                default_position: Some(Position::BottomCenter),
                transition_ms: Some(150),
                closable: Some(false),
            },
            diagnostics: DiagnosticsConfig {
                buffer_capacity: Some(64),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_rejects_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_falls_back_to_defaults_with_warning_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[general\n")
            .expect("failed to write invalid toml");

        let (config, warning) = load(Some(temp_dir.path()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_missing_file_returns_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load(Some(temp_dir.path()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "[notifications]\ndefault_position = \"bottom-left\"\n",
        )
        .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("load should succeed");
        assert_eq!(loaded.general.theme_mode, ThemeMode::System);
        assert_eq!(
            loaded.notifications.default_position,
            Some(Position::BottomLeft)
        );
        assert_eq!(loaded.diagnostics, DiagnosticsConfig::default());
    }

    #[test]
    fn notification_defaults_follow_config() {
        let mut config = Config::default();
        config.notifications.default_duration_ms = Some(0);
        config.notifications.default_position = Some(Position::TopLeft);
        config.notifications.closable = Some(false);

        let defaults = config.notification_defaults();
        assert!(defaults.duration.is_sticky());
        assert_eq!(defaults.position, Position::TopLeft);
        assert!(!defaults.closable);
        assert_eq!(defaults.variant, Variant::Info);
    }

    #[test]
    fn transition_window_is_clamped() {
        let mut config = Config::default();
        config.notifications.transition_ms = Some(60_000);
        assert_eq!(config.transition_window().as_millis(), MAX_TRANSITION_MS);
    }

    #[test]
    fn config_path_prefers_explicit_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = config_path(Some(temp_dir.path())).expect("path should resolve");
        assert_eq!(path, temp_dir.path().join(CONFIG_FILE));
    }
}
