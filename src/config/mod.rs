// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[layout]` - Aside and inspector visibility and widths, header height
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument or `ESIM_WORKBENCH_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use esim_workbench::config;
//!
//! let (mut config, _warning) = config::load();
//! config.layout.show_inspector = Some(true);
//! config::save_with_override(&config, None).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// i18n key of the warning shown when the config file cannot be parsed.
pub const CONFIG_LOAD_WARNING_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "zh-CN").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

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
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Shell layout settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    /// Whether the aside region is shown.
    #[serde(default = "default_show_aside", skip_serializing_if = "Option::is_none")]
    pub show_aside: Option<bool>,

    /// Aside width in logical pixels.
    #[serde(default = "default_aside_width", skip_serializing_if = "Option::is_none")]
    pub aside_width: Option<f32>,

    /// Whether the inspector region is shown.
    #[serde(
        default = "default_show_inspector",
        skip_serializing_if = "Option::is_none"
    )]
    pub show_inspector: Option<bool>,

    /// Inspector width in logical pixels.
    #[serde(
        default = "default_inspector_width",
        skip_serializing_if = "Option::is_none"
    )]
    pub inspector_width: Option<f32>,

    /// Header height in logical pixels.
    #[serde(
        default = "default_header_height",
        skip_serializing_if = "Option::is_none"
    )]
    pub header_height: Option<f32>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            show_aside: default_show_aside(),
            aside_width: default_aside_width(),
            show_inspector: default_show_inspector(),
            inspector_width: default_inspector_width(),
            header_height: default_header_height(),
        }
    }
}

impl LayoutConfig {
    /// Effective aside visibility.
    #[must_use]
    pub fn show_aside(&self) -> bool {
        self.show_aside.unwrap_or(DEFAULT_SHOW_ASIDE)
    }

    /// Effective aside width, clamped to the supported range.
    #[must_use]
    pub fn aside_width(&self) -> f32 {
        clamp_or_default(
            self.aside_width,
            MIN_ASIDE_WIDTH,
            MAX_ASIDE_WIDTH,
            DEFAULT_ASIDE_WIDTH,
        )
    }

    /// Effective inspector visibility.
    #[must_use]
    pub fn show_inspector(&self) -> bool {
        self.show_inspector.unwrap_or(DEFAULT_SHOW_INSPECTOR)
    }

    /// Effective inspector width, clamped to the supported range.
    #[must_use]
    pub fn inspector_width(&self) -> f32 {
        clamp_or_default(
            self.inspector_width,
            MIN_INSPECTOR_WIDTH,
            MAX_INSPECTOR_WIDTH,
            DEFAULT_INSPECTOR_WIDTH,
        )
    }

    /// Flips aside visibility.
    pub fn toggle_aside(&mut self) {
        self.show_aside = Some(!self.show_aside());
    }

    /// Flips inspector visibility.
    pub fn toggle_inspector(&mut self) {
        self.show_inspector = Some(!self.show_inspector());
    }

    /// Effective header height, clamped to the supported range.
    #[must_use]
    pub fn header_height(&self) -> f32 {
        clamp_or_default(
            self.header_height,
            MIN_HEADER_HEIGHT,
            MAX_HEADER_HEIGHT,
            DEFAULT_HEADER_HEIGHT,
        )
    }
}

/// Clamps a configured value, falling back to `default` when unset or not finite.
fn clamp_or_default(value: Option<f32>, min: f32, max: f32, default: f32) -> f32 {
    match value {
        Some(v) if v.is_finite() => v.clamp(min, max),
        _ => default,
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Shell layout settings.
    #[serde(default)]
    pub layout: LayoutConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_show_aside() -> Option<bool> {
    Some(DEFAULT_SHOW_ASIDE)
}

fn default_aside_width() -> Option<f32> {
    Some(DEFAULT_ASIDE_WIDTH)
}

fn default_show_inspector() -> Option<bool> {
    Some(DEFAULT_SHOW_INSPECTOR)
}

fn default_inspector_width() -> Option<f32> {
    Some(DEFAULT_INSPECTOR_WIDTH)
}

fn default_header_height() -> Option<f32> {
    Some(DEFAULT_HEADER_HEIGHT)
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
/// default config with the i18n key of a warning to show the user.
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
                    tracing::warn!(path = %path.display(), "falling back to default config: {err}");
                    return (Config::default(), Some(CONFIG_LOAD_WARNING_KEY.to_string()));
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

/// Saves the configuration to a custom directory.
///
/// `None` resolves the directory like [`load`] does.
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
