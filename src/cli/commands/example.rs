//! CLI command for `gopad example`
//!
//! Manages the on-disk example library: one JSON file per example.

use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::output::{is_json, print_detail, print_success};
use crate::core::example::{self, CodeExample};

use super::run::read_snippet;

/// Execute `example list`
pub fn execute_list(folder: &Path) -> Result<()> {
    let examples = example::load_from_folder(folder)?;

    if is_json() {
        println!("{}", serde_json::to_string_pretty(&examples)?);
        return Ok(());
    }

    if examples.is_empty() {
        println!("No examples in {}", folder.display());
        return Ok(());
    }

    for ex in &examples {
        println!("{}  {} [{}]", ex.id, ex.title, ex.category);
        if !ex.description.is_empty() {
            print_detail(&ex.description);
        }
    }

    Ok(())
}

/// Execute `example new`
pub fn execute_new(folder: &Path) -> Result<()> {
    let path = example::create_starter_template(folder)?;

    if is_json() {
        let json = serde_json::json!({ "created": path });
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        print_success(&format!("Created starter example at {}", path.display()));
    }

    Ok(())
}

/// Execute `example save`
///
/// Reads a full example as a JSON document from a file or stdin and stores
/// it in the folder under its id.
pub fn execute_save(folder: &Path, file: Option<&Path>) -> Result<()> {
    let document = read_snippet(file)?;
    let example: CodeExample =
        serde_json::from_str(&document).context("Example document is not valid JSON")?;

    let path = example::save_to_folder(folder, &example)?;

    if is_json() {
        let json = serde_json::json!({ "saved": path, "id": example.id });
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        print_success(&format!(
            "Saved example '{}' to {}",
            example.id,
            path.display()
        ));
    }

    Ok(())
}

/// Execute `example rm`
pub fn execute_rm(folder: &Path, id: &str) -> Result<()> {
    example::delete_from_folder(folder, id)?;

    if is_json() {
        let json = serde_json::json!({ "removed": id });
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        print_success(&format!("Removed example '{id}'"));
    }

    Ok(())
}
