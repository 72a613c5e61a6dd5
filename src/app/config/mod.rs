// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[notifications]` - Defaults for requests that leave a field unset
//! - `[diagnostics]` - Size of the in-memory diagnostic history
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `ICED_TOASTER_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_toaster::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.notifications.default_position = Some("bottom-left".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::diagnostics::{DiagnosticsHandle, HistoryCapacity};
use crate::domain::notification::{DisplayDuration, Position};
use crate::error::{Error, Result};
use crate::ui::notifications::{Animation, Defaults, Kind};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Defaults applied to notification requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    /// Position key for toasts that do not name one.
    #[serde(
        default = "default_position",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_position: Option<String>,

    /// Display duration in milliseconds; `0` keeps toasts until dismissed.
    #[serde(
        default = "default_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_duration_ms: Option<u64>,

    /// Entrance animation hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_animation: Option<Animation>,

    /// Kind name for requests without one. Unknown names fall back to info.
    #[serde(default = "default_kind", skip_serializing_if = "Option::is_none")]
    pub default_kind: Option<String>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            default_position: default_position(),
            default_duration_ms: default_duration_ms(),
            default_animation: Some(Animation::default()),
            default_kind: default_kind(),
        }
    }
}

impl NotificationsConfig {
    /// Builds manager defaults from this section.
    ///
    /// An unknown kind name is reported through `diagnostics` and replaced
    /// by the info kind.
    pub fn to_defaults(&self, diagnostics: Option<&DiagnosticsHandle>) -> Defaults {
        let kind = self
            .default_kind
            .as_deref()
            .map_or_else(Kind::default, |raw| Kind::parse_or_default(raw, diagnostics));

        Defaults {
            kind,
            duration: self
                .default_duration_ms
                .map_or_else(DisplayDuration::default, DisplayDuration::from_millis),
            position: self
                .default_position
                .as_deref()
                .map_or_else(Position::default, Position::from),
            animation: self.default_animation.unwrap_or_default(),
        }
    }
}

/// Diagnostics settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    /// Number of events kept before the oldest are dropped.
    #[serde(
        default = "default_buffer_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub buffer_capacity: Option<usize>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: default_buffer_capacity(),
        }
    }
}

impl DiagnosticsConfig {
    /// Buffer capacity, clamped to the supported range.
    #[must_use]
    pub fn capacity(&self) -> HistoryCapacity {
        self.buffer_capacity
            .map_or_else(HistoryCapacity::default, HistoryCapacity::new)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Notification defaults.
    #[serde(default)]
    pub notifications: NotificationsConfig,

    /// Diagnostics settings.
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_position() -> Option<String> {
    Some(DEFAULT_POSITION.to_string())
}

fn default_duration_ms() -> Option<u64> {
    Some(DEFAULT_DURATION_MS)
}

fn default_kind() -> Option<String> {
    Some(DEFAULT_KIND.to_string())
}

fn default_buffer_capacity() -> Option<usize> {
    Some(DEFAULT_DIAGNOSTICS_CAPACITY)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "using default settings");
                    return (Config::default(), Some(err.message_key().to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{DiagnosticEventKind, DiagnosticsCollector, WarningType};
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            notifications: NotificationsConfig {
                default_position: Some("bottom-center".to_string()),
                default_duration_ms: Some(1500),
                default_animation: Some(Animation::SlideBottomToTop),
                default_kind: Some("success".to_string()),
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
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[notifications\ndefault_position = ").expect("write");

        let err = load_from_path(&config_path).expect_err("invalid toml should fail");
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn load_from_missing_path_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let err = load_from_path(&temp_dir.path().join("absent.toml"))
            .expect_err("missing file should fail");
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn missing_sections_take_defaults() {
        let config: Config = toml::from_str("").expect("empty config parses");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            [notifications]
            default_position = "bottom-left"
            "#,
        )
        .expect("config parses");

        assert_eq!(
            config.notifications.default_position.as_deref(),
            Some("bottom-left")
        );
        assert_eq!(
            config.notifications.default_duration_ms,
            Some(DEFAULT_DURATION_MS)
        );
        assert_eq!(config.diagnostics, DiagnosticsConfig::default());
    }

    #[test]
    fn animation_uses_short_names_in_toml() {
        let config: Config = toml::from_str(
            r#"
            [notifications]
            default_animation = "slide-l-r"
            "#,
        )
        .expect("config parses");
        assert_eq!(
            config.notifications.default_animation,
            Some(Animation::SlideLeftToRight)
        );
    }

    #[test]
    fn load_with_override_returns_defaults_when_file_missing() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_warns_on_broken_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "not = valid = toml").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn save_with_override_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut config = Config::default();
        config.notifications.default_duration_ms = Some(0);

        save_with_override(&config, Some(temp_dir.path().to_path_buf())).expect("save");
        let (loaded, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert!(warning.is_none());
        assert_eq!(loaded.notifications.default_duration_ms, Some(0));
    }

    #[test]
    fn to_defaults_maps_every_field() {
        let section = NotificationsConfig {
            default_position: Some("bottom-right".to_string()),
            default_duration_ms: Some(0),
            default_animation: Some(Animation::Pop),
            default_kind: Some("Warning".to_string()),
        };

        let defaults = section.to_defaults(None);
        assert_eq!(defaults.kind, Kind::Warning);
        assert!(defaults.duration.is_sticky());
        assert_eq!(defaults.position.as_str(), "bottom-right");
        assert_eq!(defaults.animation, Animation::Pop);
    }

    #[test]
    fn to_defaults_falls_back_to_info_and_reports_unknown_kind() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();
        let section = NotificationsConfig {
            default_kind: Some("shout".to_string()),
            ..NotificationsConfig::default()
        };

        let defaults = section.to_defaults(Some(&handle));
        collector.process_pending();

        assert_eq!(defaults.kind, Kind::Info);
        let warning = collector.events().next().map(|event| event.kind.clone());
        assert!(matches!(
            warning,
            Some(DiagnosticEventKind::Warning {
                warning_type: WarningType::InvalidKind,
                ..
            })
        ));
    }

    #[test]
    fn empty_sections_use_built_in_defaults() {
        let section = NotificationsConfig {
            default_position: None,
            default_duration_ms: None,
            default_animation: None,
            default_kind: None,
        };
        assert_eq!(section.to_defaults(None), Defaults::default());
        assert_eq!(
            DiagnosticsConfig {
                buffer_capacity: None
            }
            .capacity(),
            HistoryCapacity::default()
        );
    }

    #[test]
    fn diagnostics_capacity_is_clamped() {
        let section = DiagnosticsConfig {
            buffer_capacity: Some(1),
        };
        assert_eq!(section.capacity(), HistoryCapacity::new(1));
        assert_eq!(section.capacity().value(), 16);
    }
}
