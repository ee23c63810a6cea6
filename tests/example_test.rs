//! Integration tests for the example library

#[allow(dead_code)]
mod common;

use common::TestFolder;
use gopad::cli::commands::example::execute_save;
use gopad::core::example::{self, CodeExample};

fn sample(id: &str) -> CodeExample {
    CodeExample {
        id: id.to_string(),
        title: format!("Example {id}"),
        description: "desc".to_string(),
        category: "Basics".to_string(),
        code: "package main\n".to_string(),
        instruction: "# Try it".to_string(),
        tags: vec!["test".to_string()],
    }
}

#[test]
fn test_save_load_delete_lifecycle() {
    let folder = TestFolder::new();

    example::save_to_folder(&folder.path(), &sample("a")).unwrap();
    example::save_to_folder(&folder.path(), &sample("b")).unwrap();
    assert!(folder.file_exists("a.json"));

    let loaded = example::load_from_folder(&folder.path()).unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].id, "a");
    assert_eq!(loaded[1].id, "b");

    example::delete_from_folder(&folder.path(), "a").unwrap();
    let loaded = example::load_from_folder(&folder.path()).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, "b");
}

#[test]
fn test_load_ignores_non_json_and_malformed_files() {
    let folder = TestFolder::new();
    folder.create_file("readme.md", "# not an example");
    folder.create_file("broken.json", "{ definitely not json");
    example::save_to_folder(&folder.path(), &sample("ok")).unwrap();

    let loaded = example::load_from_folder(&folder.path()).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, "ok");
}

#[test]
fn test_starter_template_is_loadable_and_runnable_go() {
    let folder = TestFolder::new();
    let path = example::create_starter_template(&folder.path()).unwrap();
    assert!(path.exists());

    let loaded = example::load_from_folder(&folder.path()).unwrap();
    assert_eq!(loaded.len(), 1);
    assert!(loaded[0].code.contains("package main"));
    assert!(loaded[0].code.contains("func main()"));
}

#[test]
fn test_save_command_stores_json_document_under_its_id() {
    let folder = TestFolder::new();
    let library = folder.path().join("library");
    folder.create_file(
        "fibonacci.json",
        r##"{
            "id": "fibonacci",
            "title": "Fibonacci",
            "description": "Iterative fibonacci",
            "category": "Basics",
            "code": "package main\n",
            "instruction": "# Fibonacci"
        }"##,
    );

    execute_save(&library, Some(&folder.path().join("fibonacci.json"))).unwrap();

    let loaded = example::load_from_folder(&library).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, "fibonacci");
    assert_eq!(loaded[0].title, "Fibonacci");
}

#[test]
fn test_save_command_rejects_non_json_document() {
    let folder = TestFolder::new();
    folder.create_file("garbage.txt", "package main");

    let result = execute_save(&folder.path(), Some(&folder.path().join("garbage.txt")));
    assert!(result.is_err());
}

#[test]
fn test_deleting_missing_example_is_an_error() {
    let folder = TestFolder::new();
    assert!(example::delete_from_folder(&folder.path(), "ghost").is_err());
}
