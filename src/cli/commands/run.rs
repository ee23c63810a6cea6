//! CLI command for `gopad run`
//!
//! Reads a snippet from a file or stdin, runs it through the execution
//! pipeline, and prints the assembled report.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::output::{create_spinner, is_json};
use crate::core::pipeline::Playground;
use crate::infra::dirs::GopadDirs;

/// Execute the run command
pub async fn execute(file: Option<&Path>) -> Result<()> {
    let source = read_snippet(file)?;

    let mut playground = Playground::load(GopadDirs::new())?;

    let spinner = create_spinner("Compiling and running snippet...");
    let report = playground.run_code(&source).await;
    spinner.finish_and_clear();

    if is_json() {
        let json = serde_json::json!({ "report": report });
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        println!("{report}");
    }

    Ok(())
}

/// Read the snippet from a file, or stdin when omitted or '-'
pub fn read_snippet(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read snippet file '{}'", path.display())),
        _ => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read snippet from stdin")?;
            Ok(source)
        }
    }
}
