//! Global configuration management
//!
//! Reads and manages the persisted gopad settings: a single JSON object in
//! `config.json` under the per-user config directory. The only recognized
//! field is the Go toolchain path. A missing file is not an error; it means
//! "no configured path yet".

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::infra::dirs::GopadDirs;
use crate::infra::toolchain;

/// Global configuration for gopad
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Path to the Go executable, if configured
    #[serde(rename = "goPath", default, skip_serializing_if = "Option::is_none")]
    pub go_path: Option<PathBuf>,
}

impl GlobalConfig {
    /// Load global configuration from the config directory
    ///
    /// If the config file doesn't exist, returns default configuration.
    /// If the config file exists but is invalid, returns an error.
    ///
    /// A missing file or an empty `goPath` triggers toolchain
    /// auto-detection; a detected candidate is validated with a version
    /// probe before it is stored and persisted. Persistence is best-effort.
    pub fn load(dirs: &GopadDirs) -> Result<Self, ConfigError> {
        let mut config = Self::load_from_path(&dirs.config_path())?;

        let needs_detection = config
            .go_path
            .as_deref()
            .map_or(true, |p| p.as_os_str().is_empty());
        if needs_detection {
            if let Some(path) = toolchain::detect().filter(|p| toolchain::validate(p)) {
                tracing::debug!(path = %path.display(), "auto-detected Go toolchain on load");
                config.go_path = Some(path);
                if let Err(e) = config.save(dirs) {
                    tracing::warn!(error = %e, "could not persist detected Go path");
                }
            }
        }

        Ok(config)
    }

    /// Load global configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            error: e.to_string(),
        })
    }

    /// Save global configuration to the config directory
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self, dirs: &GopadDirs) -> Result<(), ConfigError> {
        self.save_to_path(&dirs.config_path())
    }

    /// Save global configuration to a specific path
    ///
    /// Creates parent directories if they don't exist.
    pub fn save_to_path(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::ReadError {
                path: parent.display().to_string(),
                error: e.to_string(),
            })?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                error: e.to_string(),
            })?;

        fs::write(path, content).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            error: e.to_string(),
        })
    }
}
