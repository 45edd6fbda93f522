//! Lookup source configuration from a TOML file.
//!
//! Settings live in the OS-standard config directory:
//! - Windows: %APPDATA%\jiosaavn-lookup\config.toml
//! - macOS: ~/Library/Application Support/jiosaavn-lookup/config.toml
//! - Linux: ~/.config/jiosaavn-lookup/config.toml
//!
//! Loading never fails: a missing or unreadable file logs a warning and
//! falls back to defaults, so the host application can always construct
//! the source.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Distance penalty applied to candidates this source produced itself.
pub const DEFAULT_SOURCE_WEIGHT: f64 = 0.5;

/// Settings for the JioSaavn lookup source.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Weight added to the distance of candidates tagged with this source
    /// (0.0 - 1.0). Higher values push JioSaavn matches further down the
    /// candidate list.
    pub source_weight: f64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            source_weight: DEFAULT_SOURCE_WEIGHT,
        }
    }
}

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("jiosaavn-lookup"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from the default location.
///
/// Returns default config if the file doesn't exist or can't be parsed.
/// Logs warnings but doesn't fail - callers always get a usable config.
pub fn load() -> SourceConfig {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine config directory, using defaults");
        return SourceConfig::default();
    };
    load_from(&path)
}

/// Load configuration from a specific file path.
pub fn load_from(path: &Path) -> SourceConfig {
    if !path.exists() {
        tracing::info!("No config file found at {:?}, using defaults", path);
        return SourceConfig::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::error!("Failed to parse config file {:?}: {}", path, e);
                tracing::warn!("Using default configuration");
                SourceConfig::default()
            }
        },
        Err(e) => {
            tracing::error!("Failed to read config file {:?}: {}", path, e);
            SourceConfig::default()
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
