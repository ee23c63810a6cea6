//! Error types for gopad
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration file errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read or write the config file
    #[error("Failed to read config file '{path}': {error}")]
    ReadError { path: String, error: String },

    /// Failed to parse the config file
    #[error("Failed to parse config file '{path}': {error}")]
    ParseError { path: String, error: String },

    /// Rejected toolchain path
    #[error("'{path}' is not a working Go executable")]
    InvalidToolchain { path: PathBuf },
}

/// Workspace provisioning errors
#[derive(Error, Debug)]
pub enum WorkspaceError {
    /// Failed to create the workspace directory
    #[error("Failed to create workspace directory: {error}")]
    CreateDir { error: String },

    /// Failed to write a file into the workspace
    #[error("Failed to write file '{path}': {error}")]
    WriteFile { path: PathBuf, error: String },

    /// Failed to read a file back from the workspace
    #[error("Failed to read file '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },
}

/// Example library errors
#[derive(Error, Debug)]
pub enum ExampleError {
    /// Library folder path is empty or missing
    #[error("Example folder does not exist: {path}")]
    FolderNotFound { path: PathBuf },

    /// Example id is empty
    #[error("Example id cannot be empty")]
    EmptyId,

    /// IO error while reading or writing an example file
    #[error("IO error for '{path}': {error}")]
    IoError { path: PathBuf, error: String },

    /// Serialization error
    #[error("Failed to serialize example '{id}': {error}")]
    SerializeError { id: String, error: String },
}
