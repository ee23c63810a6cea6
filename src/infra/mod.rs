//! Infrastructure layer
//!
//! Handles all I/O operations: filesystem, external processes, and
//! toolchain discovery. This module is the only place where side effects
//! occur.

pub mod dirs;
pub mod process;
pub mod toolchain;
pub mod workspace;
