//! On-disk example library
//!
//! Each example is a single JSON file in a user-chosen folder, keyed by its
//! id. Unreadable or malformed files are skipped when loading; the library
//! is a convenience, not a database.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ExampleError;

/// A stored code example
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CodeExample {
    /// Unique id, used as the file name
    pub id: String,
    /// Display title
    pub title: String,
    /// Short description
    pub description: String,
    /// Category label
    pub category: String,
    /// The Go source text
    pub code: String,
    /// Markdown instructions shown alongside the code
    pub instruction: String,
    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Load all examples from a folder
///
/// Reads every `*.json` file; files that cannot be read or parsed are
/// skipped silently.
pub fn load_from_folder(folder: &Path) -> Result<Vec<CodeExample>, ExampleError> {
    if !folder.exists() {
        return Err(ExampleError::FolderNotFound {
            path: folder.to_path_buf(),
        });
    }

    let entries = fs::read_dir(folder).map_err(|e| ExampleError::IoError {
        path: folder.to_path_buf(),
        error: e.to_string(),
    })?;

    let mut examples = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let Ok(data) = fs::read_to_string(&path) else {
            continue;
        };
        let Ok(example) = serde_json::from_str::<CodeExample>(&data) else {
            tracing::debug!(path = %path.display(), "skipping malformed example file");
            continue;
        };
        examples.push(example);
    }

    examples.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(examples)
}

/// Save one example into a folder, creating the folder if needed
///
/// Returns the path of the written file.
pub fn save_to_folder(folder: &Path, example: &CodeExample) -> Result<PathBuf, ExampleError> {
    if example.id.is_empty() {
        return Err(ExampleError::EmptyId);
    }

    fs::create_dir_all(folder).map_err(|e| ExampleError::IoError {
        path: folder.to_path_buf(),
        error: e.to_string(),
    })?;

    let path = folder.join(format!("{}.json", example.id));
    let data =
        serde_json::to_string_pretty(example).map_err(|e| ExampleError::SerializeError {
            id: example.id.clone(),
            error: e.to_string(),
        })?;

    fs::write(&path, data).map_err(|e| ExampleError::IoError {
        path: path.clone(),
        error: e.to_string(),
    })?;

    Ok(path)
}

/// Delete one example from a folder by id
pub fn delete_from_folder(folder: &Path, id: &str) -> Result<(), ExampleError> {
    if id.is_empty() {
        return Err(ExampleError::EmptyId);
    }

    let path = folder.join(format!("{id}.json"));
    fs::remove_file(&path).map_err(|e| ExampleError::IoError {
        path,
        error: e.to_string(),
    })
}

/// Seed a folder with a starter example the user can edit
pub fn create_starter_template(folder: &Path) -> Result<PathBuf, ExampleError> {
    save_to_folder(folder, &starter_example())
}

/// The starter example written by [`create_starter_template`]
#[must_use]
pub fn starter_example() -> CodeExample {
    CodeExample {
        id: "my-first-example".to_string(),
        title: "My First Example".to_string(),
        description: "A custom example you can edit".to_string(),
        category: "My Examples".to_string(),
        tags: vec!["custom".to_string(), "starter".to_string()],
        instruction: "# My First Example\n\nEdit this example and make it yours.\n\
                      \n1. Run the code\n2. Check the output\n3. Change whatever you like"
            .to_string(),
        code: "package main\n\nimport \"fmt\"\n\nfunc main() {\n    \
               fmt.Println(\"Hello from my custom example!\")\n}\n"
            .to_string(),
    }
}
