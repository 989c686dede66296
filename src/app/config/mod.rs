// SPDX-License-Identifier: MPL-2.0
//! `settings.toml`: language and theme under `[general]`, image surface
//! behaviour under `[viewer]`.
//!
//! ```toml
//! [general]
//! language = "fr"
//! theme_mode = "dark"
//!
//! [viewer]
//! reset_transform_on_navigate = true
//! wheel_zoom_factor = 1.25
//! keyboard_pan_step = 30.0
//! ```
//!
//! The app only reads this file. A missing file means defaults; an unreadable
//! one means defaults plus [`CONFIG_LOAD_ERROR_KEY`].

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// i18n key reported when an existing config file cannot be parsed.
pub const CONFIG_LOAD_ERROR_KEY: &str = "notification-config-load-error";

/// `[general]`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Locale tag, consulted after `--lang`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, deserialize_with = "theme_mode_any_case")]
    pub theme_mode: ThemeMode,
}

/// `[viewer]`: how the artwork surface reacts to input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerConfig {
    /// Reset zoom and pan whenever another piece is shown.
    #[serde(
        default = "default_reset_transform_on_navigate",
        skip_serializing_if = "Option::is_none"
    )]
    pub reset_transform_on_navigate: Option<bool>,

    /// Zoom multiplier per mouse-wheel line.
    #[serde(
        default = "default_wheel_zoom_factor",
        skip_serializing_if = "Option::is_none"
    )]
    pub wheel_zoom_factor: Option<f32>,

    /// Pan distance in logical pixels per Shift+arrow press.
    #[serde(
        default = "default_keyboard_pan_step",
        skip_serializing_if = "Option::is_none"
    )]
    pub keyboard_pan_step: Option<f32>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            reset_transform_on_navigate: default_reset_transform_on_navigate(),
            wheel_zoom_factor: default_wheel_zoom_factor(),
            keyboard_pan_step: default_keyboard_pan_step(),
        }
    }
}

impl ViewerConfig {
    /// Effective reset-on-navigate flag.
    #[must_use]
    pub fn resets_transform_on_navigate(&self) -> bool {
        self.reset_transform_on_navigate
            .unwrap_or(DEFAULT_RESET_TRANSFORM_ON_NAVIGATE)
    }

    /// Effective wheel zoom factor, clamped to the supported range.
    #[must_use]
    pub fn effective_wheel_zoom_factor(&self) -> f32 {
        clamp_finite(
            self.wheel_zoom_factor,
            DEFAULT_WHEEL_ZOOM_FACTOR,
            MIN_WHEEL_ZOOM_FACTOR,
            MAX_WHEEL_ZOOM_FACTOR,
        )
    }

    /// Effective keyboard pan step, clamped to the supported range.
    #[must_use]
    pub fn effective_keyboard_pan_step(&self) -> f32 {
        clamp_finite(
            self.keyboard_pan_step,
            DEFAULT_KEYBOARD_PAN_STEP,
            MIN_KEYBOARD_PAN_STEP,
            MAX_KEYBOARD_PAN_STEP,
        )
    }
}

fn clamp_finite(value: Option<f32>, default: f32, min: f32, max: f32) -> f32 {
    match value {
        Some(v) if v.is_finite() => v.clamp(min, max),
        _ => default,
    }
}

/// Parsed `settings.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
        #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub viewer: ViewerConfig,
}

fn default_reset_transform_on_navigate() -> Option<bool> {
    Some(DEFAULT_RESET_TRANSFORM_ON_NAVIGATE)
}

fn default_wheel_zoom_factor() -> Option<f32> {
    Some(DEFAULT_WHEEL_ZOOM_FACTOR)
}

fn default_keyboard_pan_step() -> Option<f32> {
    Some(DEFAULT_KEYBOARD_PAN_STEP)
}

fn theme_mode_any_case<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    String::deserialize(deserializer)?
        .parse()
        .map_err(serde::de::Error::custom)
}

fn settings_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir(base_dir).map(|dir| dir.join(CONFIG_FILE))
}

/// Loads settings from the resolved config directory.
///
/// The second value is an i18n key to show when the file exists but could
/// not be used.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Like [`load`], reading from `base_dir` when given.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = settings_path(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "loaded settings");
                    return (config, None);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "settings unreadable, using defaults");
                    return (Config::default(), Some(CONFIG_LOAD_ERROR_KEY.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Parses the settings file at `path`.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Writes `config` to `path`, creating parent directories.
///
/// Used to prepare kiosk installs; the app itself never writes settings.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
