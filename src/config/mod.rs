// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[toast]` - Default variant and auto-dismiss duration of factory toasts
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `NUKE_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use nuke_design::config::{self, Config};
//! use nuke_design::toast::Variant;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.toast.default_variant = Some(Variant::Solid);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::paths;
use crate::toast::{ToastDefaults, Variant};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning key returned by [`load`] when the settings file cannot be read.
pub const LOAD_WARNING: &str = "config-load-error";

/// Toast defaults used by the factory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToastSection {
    /// Variant applied when a toast names none (or an unknown one).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_variant: Option<Variant>,

    /// Auto-dismiss delay in milliseconds; `0` keeps toasts until dismissed.
    #[serde(
        default = "default_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_duration_ms: Option<u64>,
}

impl Default for ToastSection {
    fn default() -> Self {
        Self {
            default_variant: None,
            default_duration_ms: default_duration_ms(),
        }
    }
}

impl ToastSection {
    /// Resolves the section into factory defaults, clamping the duration.
    #[must_use]
    pub fn defaults(&self) -> ToastDefaults {
        ToastDefaults {
            variant: self.default_variant.unwrap_or_default(),
            duration_ms: self
                .default_duration_ms
                .unwrap_or(DEFAULT_DURATION_MS)
                .min(MAX_DURATION_MS),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub toast: ToastSection,
}

fn default_duration_ms() -> Option<u64> {
    Some(DEFAULT_DURATION_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_config_dir_with_override(base_dir).map(|mut path| {
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
/// default config with a warning key explaining what went wrong.
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
                    log::warn!("failed to load {}: {err}", path.display());
                    return (Config::default(), Some(LOAD_WARNING.to_string()));
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
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            toast: ToastSection {
                default_variant: Some(Variant::Soft),
                default_duration_ms: Some(1200),
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
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_warns_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[toast\n").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(LOAD_WARNING));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn empty_file_uses_section_defaults() {
        let config: Config = toml::from_str("").expect("empty config parses");
        assert_eq!(config.toast.default_duration_ms, Some(DEFAULT_DURATION_MS));
        assert_eq!(config.toast.defaults(), ToastDefaults::default());
    }

    #[test]
    fn variant_is_written_in_kebab_case() {
        let config = Config {
            toast: ToastSection {
                default_variant: Some(Variant::Solid),
                default_duration_ms: None,
            },
        };
        let content = toml::to_string_pretty(&config).expect("serialize");
        assert!(content.contains("default_variant = \"solid\""));
    }

    #[test]
    fn oversized_duration_is_clamped() {
        let section = ToastSection {
            default_variant: None,
            default_duration_ms: Some(u64::MAX),
        };
        assert_eq!(section.defaults().duration_ms, MAX_DURATION_MS);
    }

    #[test]
    fn save_with_override_creates_file_in_dir() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        save_with_override(&Config::default(), Some(temp_dir.path().to_path_buf()))
            .expect("save should succeed");
        assert!(temp_dir.path().join(CONFIG_FILE).exists());
    }
}
