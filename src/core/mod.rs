//! Core business logic module
//!
//! This module contains the snippet execution engine and its supporting
//! logic. I/O primitives (processes, workspaces, toolchain probing) live in
//! [`crate::infra`].
//!
//! # Submodules
//!
//! - [`pipeline`] - Build-and-run / format orchestration
//! - [`report`] - Execution report assembly and outcome classification
//! - [`global_config`] - Persisted configuration (toolchain path)
//! - [`example`] - On-disk example library

pub mod example;
pub mod global_config;
pub mod pipeline;
pub mod report;
