//! Platform-specific directory management
//!
//! Provides the platform-specific path of the gopad configuration
//! directory. Follows XDG Base Directory Specification on Linux and
//! standard locations on macOS and Windows.
//!
//! Environment variables can override default directories:
//! - `GOPAD_CONFIG_DIR` - Override config directory

use std::env;
use std::path::PathBuf;

use crate::config::defaults::CONFIG_FILE;

/// Environment variable name for the config directory override
pub const ENV_CONFIG_DIR: &str = "GOPAD_CONFIG_DIR";

/// Application name used in directory paths
const APP_NAME: &str = "gopad";

/// Platform-specific directory provider for gopad
///
/// Provides the path to the config directory following platform
/// conventions (XDG on Linux, Library on macOS, APPDATA on Windows).
#[derive(Debug, Clone)]
pub struct GopadDirs {
    config_dir: PathBuf,
}

impl GopadDirs {
    /// Create a new `GopadDirs` instance
    ///
    /// Checks the environment variable first, then falls back to the
    /// platform default.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config_dir: Self::resolve_config_dir(),
        }
    }

    /// Create a `GopadDirs` rooted at an explicit directory (used by tests
    /// and embedders that manage their own storage)
    #[must_use]
    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Get the config directory path
    ///
    /// - Linux: `$XDG_CONFIG_HOME/gopad` or `~/.config/gopad`
    /// - macOS: `~/Library/Application Support/gopad`
    /// - Windows: `%APPDATA%\gopad`
    #[must_use]
    pub fn config_dir(&self) -> PathBuf {
        self.config_dir.clone()
    }

    /// Get the config file path
    ///
    /// Returns the path to `config.json` in the config directory.
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE)
    }

    /// Resolve config directory from environment or platform default
    fn resolve_config_dir() -> PathBuf {
        if let Ok(path) = env::var(ENV_CONFIG_DIR) {
            return PathBuf::from(path);
        }

        Self::platform_config_dir()
    }

    /// Get platform-specific config directory
    fn platform_config_dir() -> PathBuf {
        dirs::config_dir()
            .map(|p| p.join(APP_NAME))
            .unwrap_or_else(|| {
                // Fallback to home directory
                dirs::home_dir()
                    .map(|h| h.join(".config").join(APP_NAME))
                    .unwrap_or_else(|| PathBuf::from(".").join(".config").join(APP_NAME))
            })
    }
}

impl Default for GopadDirs {
    fn default() -> Self {
        Self::new()
    }
}
