//! Gopad - Go snippet playground
//!
//! This library provides the core functionality for compiling, running, and
//! formatting small Go snippets inside isolated, throwaway workspaces using
//! a locally installed Go toolchain.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Business logic (pipeline orchestration, report assembly)
//! - [`infra`] - Infrastructure layer (filesystem, processes, toolchain)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;
