//! CLI command for `gopad fmt`
//!
//! Formats a snippet with `go fmt`. Formatting is best-effort: when the
//! toolchain is missing or the snippet cannot be parsed, the original text
//! comes back unchanged.

use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::output::{is_json, print_warning};
use crate::core::pipeline::{FormatOutcome, Playground};
use crate::infra::dirs::GopadDirs;

use super::run::read_snippet;

/// Execute the fmt command
pub async fn execute(file: Option<&Path>, write: bool) -> Result<()> {
    let source = read_snippet(file)?;

    let mut playground = Playground::load(GopadDirs::new())?;
    let outcome = playground.format_code(&source).await;

    if let FormatOutcome::Unchanged { reason, .. } = &outcome {
        print_warning(&format!("Returning input unchanged ({reason})"));
    }

    if is_json() {
        let json = serde_json::json!({
            "formatted": outcome.was_formatted(),
            "source": outcome.text(),
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    match (write, file) {
        (true, Some(path)) if path.as_os_str() != "-" => {
            std::fs::write(path, outcome.text())
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
        _ => print!("{}", outcome.text()),
    }

    Ok(())
}
