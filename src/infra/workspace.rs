//! Ephemeral per-operation workspaces
//!
//! A workspace is a fresh, uniquely-named temporary directory holding
//! exactly the snippet source file and a minimal project descriptor. It is
//! exclusively owned by one operation and removed recursively when the
//! owning [`Workspace`] is dropped, regardless of how the operation ended.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::config::defaults::{BINARY_STEM, DESCRIPTOR_CONTENT, DESCRIPTOR_FILE, SNIPPET_FILE};
use crate::error::WorkspaceError;

/// An ephemeral, exclusively-owned snippet workspace
///
/// Never reused between operations; concurrent operations each get their
/// own directory, which is what makes them safe with respect to
/// filesystem collisions.
#[derive(Debug)]
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Create a fresh workspace directory with the given name prefix
    pub fn create(prefix: &str) -> Result<Self, WorkspaceError> {
        let dir = tempfile::Builder::new()
            .prefix(prefix)
            .tempdir()
            .map_err(|e| WorkspaceError::CreateDir {
                error: e.to_string(),
            })?;

        Ok(Self { dir })
    }

    /// Write the snippet text and the hard-coded project descriptor
    ///
    /// The descriptor declares the compile unit as a standalone,
    /// dependency-free module.
    pub fn materialize(&self, snippet: &str) -> Result<(), WorkspaceError> {
        self.write_file(SNIPPET_FILE, snippet)?;
        self.write_file(DESCRIPTOR_FILE, DESCRIPTOR_CONTENT)
    }

    /// Get the workspace directory path
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Get the path to the snippet source file
    #[must_use]
    pub fn snippet_path(&self) -> PathBuf {
        self.dir.path().join(SNIPPET_FILE)
    }

    /// Name of the compiled binary, with the platform executable suffix
    #[must_use]
    pub fn binary_name() -> String {
        format!("{BINARY_STEM}{}", std::env::consts::EXE_SUFFIX)
    }

    /// Get the path to the compiled binary
    #[must_use]
    pub fn binary_path(&self) -> PathBuf {
        self.dir.path().join(Self::binary_name())
    }

    /// Read the snippet source file back (used after in-place formatting)
    pub fn read_snippet(&self) -> Result<String, WorkspaceError> {
        let path = self.snippet_path();
        std::fs::read_to_string(&path).map_err(|e| WorkspaceError::ReadFile {
            path,
            error: e.to_string(),
        })
    }

    fn write_file(&self, name: &str, content: &str) -> Result<(), WorkspaceError> {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).map_err(|e| WorkspaceError::WriteFile {
            path,
            error: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_materialize_writes_snippet_and_descriptor() {
        let ws = Workspace::create("gopad-test-").unwrap();
        ws.materialize("package main\n").unwrap();

        assert_eq!(std::fs::read_to_string(ws.snippet_path()).unwrap(), "package main\n");
        let descriptor = std::fs::read_to_string(ws.path().join(DESCRIPTOR_FILE)).unwrap();
        assert!(descriptor.contains("module playground"));
    }

    #[test]
    fn test_workspace_removed_on_drop() {
        let path;
        {
            let ws = Workspace::create("gopad-test-").unwrap();
            ws.materialize("package main\n").unwrap();
            path = ws.path().to_path_buf();
            assert!(path.exists());
        }
        assert!(!path.exists());
    }

    #[test]
    fn test_workspaces_are_unique() {
        let a = Workspace::create("gopad-test-").unwrap();
        let b = Workspace::create("gopad-test-").unwrap();
        assert_ne!(a.path(), b.path());
    }

    #[test]
    fn test_read_snippet_roundtrip() {
        let ws = Workspace::create("gopad-test-").unwrap();
        ws.materialize("package main\n\nfunc main() {}\n").unwrap();
        assert_eq!(ws.read_snippet().unwrap(), "package main\n\nfunc main() {}\n");
    }
}
