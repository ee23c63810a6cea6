//! Output formatting and progress indicators
//!
//! This module provides utilities for displaying progress spinners and
//! formatted messages to the user, plus the process-wide output mode
//! (quiet / json) applied from the global CLI flags.

use std::sync::atomic::{AtomicBool, Ordering};

use indicatif::{ProgressBar, ProgressStyle};

static QUIET: AtomicBool = AtomicBool::new(false);
static JSON: AtomicBool = AtomicBool::new(false);

/// Output configuration derived from the global CLI flags
#[derive(Debug, Clone, Copy)]
pub struct OutputConfig {
    /// Suppress all output except errors
    pub quiet: bool,
    /// Emit machine-readable JSON
    pub json: bool,
    /// Verbosity level (-v count)
    pub verbose: u8,
}

impl OutputConfig {
    /// Create a new output configuration
    #[must_use]
    pub fn new(quiet: bool, json: bool, verbose: u8) -> Self {
        Self {
            quiet,
            json,
            verbose,
        }
    }

    /// Apply this configuration process-wide
    pub fn apply_global(&self) {
        QUIET.store(self.quiet, Ordering::Relaxed);
        JSON.store(self.json, Ordering::Relaxed);
    }
}

/// Whether quiet mode is active
pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Whether JSON output mode is active
pub fn is_json() -> bool {
    JSON.load(Ordering::Relaxed)
}

/// Create a spinner for operations with unknown duration
///
/// Returns a hidden spinner in quiet or JSON mode so call sites don't need
/// to branch.
pub fn create_spinner(message: &str) -> ProgressBar {
    if is_quiet() || is_json() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.blue} {msg}")
            .expect("Invalid spinner template"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

/// Print a success message (suppressed in quiet/json mode)
pub fn print_success(message: &str) {
    if !is_quiet() && !is_json() {
        println!("{} {message}", status::SUCCESS);
    }
}

/// Print a warning message (suppressed in quiet/json mode)
pub fn print_warning(message: &str) {
    if !is_quiet() && !is_json() {
        println!("{} {message}", status::WARNING);
    }
}

/// Print an indented detail line (suppressed in quiet/json mode)
pub fn print_detail(message: &str) {
    if !is_quiet() && !is_json() {
        println!("    {message}");
    }
}

/// Display a top-level error to stderr
pub fn display_error(error: &anyhow::Error) {
    if is_json() {
        let json = serde_json::json!({
            "status": "error",
            "error": error.to_string(),
        });
        eprintln!("{}", serde_json::to_string_pretty(&json).unwrap_or_default());
    } else {
        eprintln!("{} {error}", status::ERROR);
        for cause in error.chain().skip(1) {
            eprintln!("    caused by: {cause}");
        }
    }
}

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Warning prefix (yellow triangle)
    pub const WARNING: &str = "⚠";

    /// Info prefix (blue circle)
    pub const INFO: &str = "ℹ";
}
