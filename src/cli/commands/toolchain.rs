//! CLI command for `gopad toolchain`
//!
//! Thin accessors over the toolchain locator: show, set, detect, validate.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};

use crate::cli::output::{is_json, print_detail, print_success, print_warning, status};
use crate::core::pipeline::Playground;
use crate::infra::dirs::GopadDirs;
use crate::infra::toolchain;

/// Execute `toolchain show`
pub fn execute_show() -> Result<()> {
    let playground = Playground::load(GopadDirs::new())?;
    let configured = playground.toolchain_path().map(Path::to_path_buf);

    if is_json() {
        let json = serde_json::json!({
            "goPath": &configured,
            "valid": configured.as_deref().is_some_and(toolchain::validate),
            "version": configured.as_deref().and_then(toolchain::query_version),
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    match configured {
        Some(path) => {
            println!("{}", path.display());
            match toolchain::query_version(&path) {
                Some(version) => print_detail(&format!("go version {version}")),
                None => print_warning("configured path does not answer a version query"),
            }
        }
        None => {
            println!("No Go toolchain configured. Run 'gopad toolchain detect'.");
        }
    }

    Ok(())
}

/// Execute `toolchain set`
pub fn execute_set(path: PathBuf) -> Result<()> {
    let mut playground = Playground::load(GopadDirs::new())?;
    playground.set_toolchain_path(path.clone())?;

    if is_json() {
        let json = serde_json::json!({ "goPath": path });
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        print_success(&format!("Go toolchain set to {}", path.display()));
    }

    Ok(())
}

/// Execute `toolchain detect`
pub fn execute_detect() -> Result<()> {
    let detected = Playground::detect_toolchain_path();

    if is_json() {
        let json = serde_json::json!({
            "goPath": &detected,
            "version": detected.as_deref().and_then(toolchain::query_version),
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
        return if detected.is_some() {
            Ok(())
        } else {
            Err(anyhow!("No Go toolchain found"))
        };
    }

    match detected {
        Some(path) => {
            println!("{}", path.display());
            if let Some(version) = toolchain::query_version(&path) {
                print_detail(&format!("go version {version}"));
            }
            Ok(())
        }
        None => Err(anyhow!(
            "No Go toolchain found on PATH or in well-known locations"
        )),
    }
}

/// Execute `toolchain validate`
pub fn execute_validate(path: &Path) -> Result<()> {
    let valid = Playground::validate_toolchain_path(path);

    if is_json() {
        let json = serde_json::json!({ "path": path, "valid": valid });
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else if valid {
        println!("{} {} is a working Go toolchain", status::SUCCESS, path.display());
    } else {
        println!("{} {} is not a working Go toolchain", status::ERROR, path.display());
    }

    if valid {
        Ok(())
    } else {
        Err(anyhow!("Validation failed"))
    }
}
