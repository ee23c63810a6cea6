//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::PathBuf;
use tempfile::TempDir;

/// Test folder context
///
/// Creates a temporary directory for test scenarios and provides
/// utilities for populating it.
pub struct TestFolder {
    /// Temporary directory backing the test
    pub dir: TempDir,
}

impl TestFolder {
    /// Create a new test folder in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the test folder
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the test folder
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Check if a file exists in the test folder
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Read a file from the test folder
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }
}

impl Default for TestFolder {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether a working Go toolchain is available on this machine
///
/// Pipeline tests skip themselves when it is not.
pub fn go_available() -> bool {
    gopad::infra::toolchain::detect()
        .as_deref()
        .is_some_and(gopad::infra::toolchain::validate)
}
