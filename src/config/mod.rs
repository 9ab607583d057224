// SPDX-License-Identifier: MPL-2.0
//! This module handles the player's configuration, including loading and saving
//! playback preferences to a `settings.toml` file.
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `PLAYER_SYNC_CONFIG_DIR` environment variable
//! 3. Falls back to the platform config directory (`dirs::config_dir()/PlayerSync`)
//!
//! # Examples
//!
//! ```no_run
//! use player_sync::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.frame_rate = Some(60);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::video::{FrameRate, OutputSize};
use crate::error::{Error, Result};
use crate::video_player::PlaybackSettings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "PlayerSync";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "PLAYER_SYNC_CONFIG_DIR";

/// Persisted playback preferences. Missing fields fall back to defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Frame rate requested from the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_rate: Option<u32>,

    /// Width of the frames requested from the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_width: Option<u32>,

    /// Height of the frames requested from the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_height: Option<u32>,

    /// Remaining time (seconds) under which playback counts as finished.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_tolerance_secs: Option<f64>,

    /// Padding (logical pixels) around the presented frame.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_padding: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frame_rate: Some(DEFAULT_FRAME_RATE),
            output_width: Some(DEFAULT_OUTPUT_WIDTH),
            output_height: Some(DEFAULT_OUTPUT_HEIGHT),
            end_tolerance_secs: Some(DEFAULT_END_TOLERANCE_SECS),
            frame_padding: Some(DEFAULT_FRAME_PADDING),
        }
    }
}

impl Config {
    /// Resolves the optional fields into validated playback settings.
    ///
    /// Out-of-range values are clamped; non-finite ones use the default.
    #[must_use]
    pub fn playback_settings(&self) -> PlaybackSettings {
        let end_tolerance_secs = self
            .end_tolerance_secs
            .filter(|t| t.is_finite())
            .map_or(DEFAULT_END_TOLERANCE_SECS, |t| {
                t.clamp(0.0, MAX_END_TOLERANCE_SECS)
            });
        let frame_padding = self
            .frame_padding
            .filter(|p| p.is_finite())
            .map_or(DEFAULT_FRAME_PADDING, |p| p.clamp(0.0, MAX_FRAME_PADDING));

        PlaybackSettings {
            frame_rate: FrameRate::new(self.frame_rate.unwrap_or(DEFAULT_FRAME_RATE)),
            output_size: OutputSize::new(
                self.output_width.unwrap_or(DEFAULT_OUTPUT_WIDTH),
                self.output_height.unwrap_or(DEFAULT_OUTPUT_HEIGHT),
            ),
            end_tolerance_secs,
            frame_padding,
        }
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory: explicit override, then environment, then platform default.
fn get_config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = base_dir {
        return Some(dir);
    }
    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    get_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the default path, or defaults if there is none.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn load() -> Result<Config> {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn load_with_override(base_dir: Option<PathBuf>) -> Result<Config> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

/// Loads configuration from a specific path.
///
/// Invalid TOML is logged and replaced by the defaults.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            log::warn!("ignoring invalid config {}: {err}", path.display());
            Ok(Config::default())
        }
    }
}

/// Saves the configuration to the default path.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(|e| Error::Config(e.to_string()))?;
    fs::write(path, content)?;
    Ok(())
}
