//! Go toolchain discovery and validation
//!
//! Resolves the path to the `go` executable from a previously configured
//! path, the executable search path, or a fixed list of well-known install
//! locations.

use std::path::{Path, PathBuf};

use crate::config::defaults::{
    GO_COMMAND, GO_INSTALL_LOCATIONS_UNIX, GO_INSTALL_LOCATIONS_WINDOWS,
};

/// Outcome of a toolchain resolution attempt
///
/// Distinguishes a configured path that is still valid from a freshly
/// detected one, so the caller knows when the detected path should be
/// persisted into configuration for future calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The configured path is present and still passes validation
    Configured(PathBuf),
    /// A new path was auto-detected (and validated); the caller should
    /// persist it
    Detected(PathBuf),
    /// No usable Go executable was found
    Absent,
}

impl Resolution {
    /// Get the resolved path, if any
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Resolution::Configured(p) | Resolution::Detected(p) => Some(p),
            Resolution::Absent => None,
        }
    }
}

/// Resolve the Go executable
///
/// A configured path that still validates is returned unchanged without
/// spawning anything beyond the version probe. Otherwise auto-detection
/// runs; a detected candidate is re-validated via `go version` before
/// being reported, so a stale or non-executable file never becomes the
/// configured toolchain.
pub fn resolve(configured: Option<&Path>) -> Resolution {
    if let Some(path) = configured {
        if validate(path) {
            return Resolution::Configured(path.to_path_buf());
        }
        tracing::debug!(path = %path.display(), "configured Go path is stale, re-detecting");
    }

    match detect() {
        Some(candidate) if validate(&candidate) => Resolution::Detected(candidate),
        Some(candidate) => {
            tracing::warn!(
                path = %candidate.display(),
                "detected Go candidate failed version probe"
            );
            Resolution::Absent
        }
        None => Resolution::Absent,
    }
}

/// Validate a Go executable path
///
/// Returns true only if a filesystem entry exists at the path and invoking
/// it with `version` exits successfully. Existence alone is not enough:
/// the file may not be executable, or may not be a Go toolchain at all.
pub fn validate(path: &Path) -> bool {
    if !path.exists() {
        return false;
    }

    std::process::Command::new(path)
        .arg("version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Auto-detect a Go executable
///
/// Searches the executable search path first, then a fixed list of
/// well-known install locations. Returns the first candidate that exists
/// on disk; no version probe is performed here. Callers wanting strong
/// guarantees should follow up with [`validate`].
pub fn detect() -> Option<PathBuf> {
    if let Ok(path) = which::which(GO_COMMAND) {
        return Some(path);
    }

    for candidate in install_locations() {
        let path = Path::new(candidate);
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    None
}

/// Query the version string of a Go executable
///
/// Runs `go version` and extracts a dotted version number from the output
/// (e.g. "1.23.4"). Returns `None` when the probe fails or no version
/// pattern is found.
pub fn query_version(path: &Path) -> Option<String> {
    std::process::Command::new(path)
        .arg("version")
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                let stdout = String::from_utf8_lossy(&output.stdout);
                let stderr = String::from_utf8_lossy(&output.stderr);
                let combined = format!("{stdout}{stderr}");
                extract_version(&combined)
            } else {
                None
            }
        })
}

/// Extract a version string from command output
fn extract_version(output: &str) -> Option<String> {
    let version_regex = regex::Regex::new(r"go(\d+\.\d+(?:\.\d+)?(?:-\w+)?)").ok()?;
    version_regex
        .captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Well-known install locations for the current platform
fn install_locations() -> &'static [&'static str] {
    if cfg!(windows) {
        GO_INSTALL_LOCATIONS_WINDOWS
    } else {
        GO_INSTALL_LOCATIONS_UNIX
    }
}
