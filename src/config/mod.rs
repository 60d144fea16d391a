// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[export]` - Initial values of the export settings
//! - `[preview]` - Document shown by the preview overlay
//!
//! The file is only ever read: choices made in the panel are not written back.
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with an explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `EXPORT_OPTIONS_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use export_options::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! println!("initial format: {:?}", config.export.format());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::export::{Compression, ExportFormat, Resolution};
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Initial export settings shown when the panel opens.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct ExportConfig {
    /// Output format identifier (`pdf`, `png`, `jpg`, `svg`, `webp`).
    #[serde(default)]
    pub format: Option<String>,

    /// Resolution identifier (`high`, `medium`, `low`).
    #[serde(default)]
    pub resolution: Option<String>,

    /// Compression identifier (`lossless`, `lossy`, `none`).
    #[serde(default)]
    pub compression: Option<String>,
}

impl ExportConfig {
    /// Configured format, or the default when absent or unrecognized.
    #[must_use]
    pub fn format(&self) -> ExportFormat {
        parse_or_default(self.format.as_deref())
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        parse_or_default(self.resolution.as_deref())
    }

    #[must_use]
    pub fn compression(&self) -> Compression {
        parse_or_default(self.compression.as_deref())
    }
}

/// Preview overlay settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct PreviewConfig {
    /// Document rendered by the preview: a directory of page images or a
    /// single image file.
    #[serde(default)]
    pub document: Option<PathBuf>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub export: ExportConfig,

    #[serde(default)]
    pub preview: PreviewConfig,
}

// =============================================================================
// Helpers
// =============================================================================

fn parse_or_default<T>(raw: Option<&str>) -> T
where
    T: FromStr + Default,
    T::Err: std::fmt::Display,
{
    match raw.map(str::parse::<T>) {
        Some(Ok(value)) => value,
        Some(Err(err)) => {
            tracing::warn!("{err}, using default");
            T::default()
        }
        None => T::default(),
    }
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
/// the default config and the i18n key of a warning to show the user.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(error) => {
                    tracing::warn!("Failed to load {}: {}", path.display(), error);
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
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
// Tests
// =============================================================================
