// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Theme mode
//! - `[navigation]` - Navbar threshold, section offset, page transition
//! - `[gallery]` - Grid columns, reveal stagger, entrance animation
//! - `[contact]` - Simulated submission timings
//! - `[scroll]` - Scroll debounce window
//!
//! Every value is optional; missing keys fall back to [`defaults`] and
//! out-of-range values are clamped when they are resolved.
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `ICED_FOLIO_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_folio::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.gallery.columns = Some(4);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::contact::ContactTimings;
use crate::domain::reveal::RevealSettings;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Warning surfaced to the user when an existing settings file cannot be read.
pub const LOAD_WARNING: &str = "Settings file could not be read; using defaults.";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            theme_mode: default_theme_mode(),
        }
    }
}

/// Page navigation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavigationConfig {
    /// Scroll offset past which the navbar uses its scrolled style.
    #[serde(
        default = "default_scrolled_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub scrolled_threshold_px: Option<f32>,

    /// Fixed navbar height subtracted from section tops.
    #[serde(
        default = "default_section_offset",
        skip_serializing_if = "Option::is_none"
    )]
    pub section_offset_px: Option<f32>,

    /// Page transition overlay duration in milliseconds.
    #[serde(default = "default_transition_ms", skip_serializing_if = "Option::is_none")]
    pub transition_ms: Option<u64>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold_px: default_scrolled_threshold(),
            section_offset_px: default_section_offset(),
            transition_ms: default_transition_ms(),
        }
    }
}

impl NavigationConfig {
    #[must_use]
    pub fn scrolled_threshold(&self) -> f32 {
        self.scrolled_threshold_px
            .filter(|px| px.is_finite())
            .unwrap_or(DEFAULT_SCROLLED_THRESHOLD_PX)
            .max(0.0)
    }

    #[must_use]
    pub fn section_offset(&self) -> f32 {
        self.section_offset_px
            .filter(|px| px.is_finite())
            .unwrap_or(DEFAULT_SECTION_OFFSET_PX)
            .clamp(0.0, MAX_SECTION_OFFSET_PX)
    }

    #[must_use]
    pub fn transition(&self) -> Duration {
        Duration::from_millis(
            self.transition_ms
                .unwrap_or(DEFAULT_TRANSITION_MS)
                .min(MAX_TRANSITION_MS),
        )
    }
}

/// Gallery grid settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Number of cards per grid row.
    #[serde(default = "default_columns", skip_serializing_if = "Option::is_none")]
    pub columns: Option<u16>,

    /// Delay between consecutive cards when the grid is revealed (ms).
    #[serde(
        default = "default_reveal_stagger_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub reveal_stagger_ms: Option<u64>,

    /// Entrance animation duration after a filter (ms).
    #[serde(default = "default_entrance_ms", skip_serializing_if = "Option::is_none")]
    pub entrance_ms: Option<u64>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            reveal_stagger_ms: default_reveal_stagger_ms(),
            entrance_ms: default_entrance_ms(),
        }
    }
}

impl GalleryConfig {
    /// Resolved column count, clamped to the supported range.
    #[must_use]
    pub fn column_count(&self) -> u16 {
        self.columns
            .unwrap_or(DEFAULT_GALLERY_COLUMNS)
            .clamp(MIN_GALLERY_COLUMNS, MAX_GALLERY_COLUMNS)
    }

    /// Reveal behaviour derived from this section.
    #[must_use]
    pub fn reveal_settings(&self) -> RevealSettings {
        RevealSettings {
            stagger: Duration::from_millis(
                self.reveal_stagger_ms
                    .unwrap_or(DEFAULT_REVEAL_STAGGER_MS)
                    .min(MAX_REVEAL_STAGGER_MS),
            ),
            entrance: Duration::from_millis(
                self.entrance_ms
                    .unwrap_or(DEFAULT_ENTRANCE_MS)
                    .min(MAX_ENTRANCE_MS),
            ),
        }
    }
}

/// Contact form timings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactConfig {
    /// Simulated submission latency (ms).
    #[serde(default = "default_send_delay_ms", skip_serializing_if = "Option::is_none")]
    pub send_delay_ms: Option<u64>,

    /// Time the confirmation stays before the form is cleared (ms).
    #[serde(
        default = "default_reset_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub reset_delay_ms: Option<u64>,

    /// Delay between clearing consecutive fields (ms).
    #[serde(
        default = "default_field_stagger_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub field_stagger_ms: Option<u64>,

    /// Delay before the submit button is restored (ms).
    #[serde(
        default = "default_restore_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub restore_delay_ms: Option<u64>,

    /// Error highlight duration of empty fields (ms).
    #[serde(
        default = "default_error_highlight_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub error_highlight_ms: Option<u64>,

    /// Auto-dismiss delay of form toasts (ms).
    #[serde(default = "default_form_toast_ms", skip_serializing_if = "Option::is_none")]
    pub toast_ms: Option<u64>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            send_delay_ms: default_send_delay_ms(),
            reset_delay_ms: default_reset_delay_ms(),
            field_stagger_ms: default_field_stagger_ms(),
            restore_delay_ms: default_restore_delay_ms(),
            error_highlight_ms: default_error_highlight_ms(),
            toast_ms: default_form_toast_ms(),
        }
    }
}

impl ContactConfig {
    /// Timings of the simulated submission flow.
    #[must_use]
    pub fn timings(&self) -> ContactTimings {
        let ms = |value: Option<u64>, default: u64| {
            Duration::from_millis(value.unwrap_or(default).min(MAX_CONTACT_DELAY_MS))
        };
        ContactTimings {
            send: ms(self.send_delay_ms, DEFAULT_SEND_DELAY_MS),
            reset: ms(self.reset_delay_ms, DEFAULT_RESET_DELAY_MS),
            field_stagger: ms(self.field_stagger_ms, DEFAULT_FIELD_STAGGER_MS),
            restore: ms(self.restore_delay_ms, DEFAULT_RESTORE_DELAY_MS),
            error_highlight: ms(self.error_highlight_ms, DEFAULT_ERROR_HIGHLIGHT_MS),
        }
    }

    #[must_use]
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(
            self.toast_ms
                .unwrap_or(DEFAULT_FORM_TOAST_MS)
                .min(MAX_CONTACT_DELAY_MS),
        )
    }
}

/// Scroll handling settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScrollConfig {
    /// Debounce window of the idle scroll handler (ms).
    #[serde(default = "default_debounce_ms", skip_serializing_if = "Option::is_none")]
    pub debounce_ms: Option<u64>,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl ScrollConfig {
    #[must_use]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(
            self.debounce_ms
                .unwrap_or(DEFAULT_SCROLL_DEBOUNCE_MS)
                .min(MAX_SCROLL_DEBOUNCE_MS),
        )
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub navigation: NavigationConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub contact: ContactConfig,

    #[serde(default)]
    pub scroll: ScrollConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_scrolled_threshold() -> Option<f32> {
    Some(DEFAULT_SCROLLED_THRESHOLD_PX)
}

fn default_section_offset() -> Option<f32> {
    Some(DEFAULT_SECTION_OFFSET_PX)
}

fn default_transition_ms() -> Option<u64> {
    Some(DEFAULT_TRANSITION_MS)
}

fn default_columns() -> Option<u16> {
    Some(DEFAULT_GALLERY_COLUMNS)
}

fn default_reveal_stagger_ms() -> Option<u64> {
    Some(DEFAULT_REVEAL_STAGGER_MS)
}

fn default_entrance_ms() -> Option<u64> {
    Some(DEFAULT_ENTRANCE_MS)
}

fn default_send_delay_ms() -> Option<u64> {
    Some(DEFAULT_SEND_DELAY_MS)
}

fn default_reset_delay_ms() -> Option<u64> {
    Some(DEFAULT_RESET_DELAY_MS)
}

fn default_field_stagger_ms() -> Option<u64> {
    Some(DEFAULT_FIELD_STAGGER_MS)
}

fn default_restore_delay_ms() -> Option<u64> {
    Some(DEFAULT_RESTORE_DELAY_MS)
}

fn default_error_highlight_ms() -> Option<u64> {
    Some(DEFAULT_ERROR_HIGHLIGHT_MS)
}

fn default_form_toast_ms() -> Option<u64> {
    Some(DEFAULT_FORM_TOAST_MS)
}

fn default_debounce_ms() -> Option<u64> {
    Some(DEFAULT_SCROLL_DEBOUNCE_MS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
pub fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
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
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(_) => return (Config::default(), Some(LOAD_WARNING.to_string())),
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
    if let Some(path) = config_path_with_override(base_dir) {
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
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Light,
            },
            gallery: GalleryConfig {
                columns: Some(4),
                ..GalleryConfig::default()
            },
            contact: ContactConfig {
                send_delay_ms: Some(500),
                ..ContactConfig::default()
            },
            ..Config::default()
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
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.navigation.scrolled_threshold(), 100.0);
        assert_eq!(config.navigation.section_offset(), 80.0);
        assert_eq!(config.navigation.transition(), Duration::from_millis(800));
        assert_eq!(config.gallery.column_count(), DEFAULT_GALLERY_COLUMNS);
        assert_eq!(config.scroll.debounce(), Duration::from_millis(16));
        assert_eq!(config.contact.toast_duration(), Duration::from_secs(5));
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("[gallery]\ncolumns = 2\n").expect("parse");
        assert_eq!(config.gallery.column_count(), 2);
        assert_eq!(config.contact, ContactConfig::default());
        assert_eq!(config.navigation, NavigationConfig::default());
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config = toml::from_str("[general]\ntheme_mode = \"DARK\"\n").expect("parse");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn unknown_theme_mode_is_rejected() {
        let result: std::result::Result<Config, _> =
            toml::from_str("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn column_count_is_clamped() {
        let gallery = GalleryConfig {
            columns: Some(0),
            ..GalleryConfig::default()
        };
        assert_eq!(gallery.column_count(), MIN_GALLERY_COLUMNS);

        let gallery = GalleryConfig {
            columns: Some(42),
            ..GalleryConfig::default()
        };
        assert_eq!(gallery.column_count(), MAX_GALLERY_COLUMNS);
    }

    #[test]
    fn contact_timings_use_configured_values() {
        let contact = ContactConfig {
            send_delay_ms: Some(10),
            field_stagger_ms: Some(999_999),
            ..ContactConfig::default()
        };
        let timings = contact.timings();
        assert_eq!(timings.send, Duration::from_millis(10));
        assert_eq!(timings.field_stagger, Duration::from_millis(MAX_CONTACT_DELAY_MS));
        assert_eq!(timings.reset, Duration::from_millis(DEFAULT_RESET_DELAY_MS));
    }

    #[test]
    fn section_offset_is_clamped_to_non_negative() {
        let navigation = NavigationConfig {
            section_offset_px: Some(-20.0),
            ..NavigationConfig::default()
        };
        assert_eq!(navigation.section_offset(), 0.0);
    }

    #[test]
    fn non_finite_offsets_fall_back_to_defaults() {
        let navigation = NavigationConfig {
            scrolled_threshold_px: Some(f32::NAN),
            section_offset_px: Some(f32::INFINITY),
            ..NavigationConfig::default()
        };
        assert_eq!(navigation.scrolled_threshold(), DEFAULT_SCROLLED_THRESHOLD_PX);
        assert_eq!(navigation.section_offset(), DEFAULT_SECTION_OFFSET_PX);
    }

    #[test]
    fn reveal_stagger_is_clamped() {
        let gallery = GalleryConfig {
            reveal_stagger_ms: Some(60_000),
            ..GalleryConfig::default()
        };
        assert_eq!(
            gallery.reveal_settings().stagger,
            Duration::from_millis(MAX_REVEAL_STAGGER_MS)
        );
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Dark,
            },
            scroll: ScrollConfig {
                debounce_ms: Some(32),
            },
            ..Config::default()
        };

        save_with_override(&config, Some(base_dir.clone())).expect("save should succeed");
        assert!(base_dir.join("settings.toml").exists());

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none(), "load should succeed without warning");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
        assert_eq!(loaded.scroll.debounce(), Duration::from_millis(32));
    }

    #[test]
    fn saved_config_uses_sectioned_format() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("settings.toml");
        save_to_path(&Config::default(), &path).expect("save");

        let content = fs::read_to_string(&path).expect("read");
        assert!(content.contains("[general]"));
        assert!(content.contains("[gallery]"));
        assert!(content.contains("[contact]"));
    }
}
