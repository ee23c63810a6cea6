//! Integration tests for the persisted configuration file
//!
//! The config is a single JSON object with one recognized field, the Go
//! toolchain path. A missing file means "no configured path yet".

#[allow(dead_code)]
mod common;

use std::path::PathBuf;

use common::{go_available, TestFolder};
use gopad::core::global_config::GlobalConfig;
use gopad::infra::dirs::GopadDirs;
use gopad::infra::toolchain;

#[test]
fn test_missing_config_file_is_not_an_error() {
    let folder = TestFolder::new();
    let dirs = GopadDirs::with_config_dir(folder.path());

    let config = GlobalConfig::load(&dirs).unwrap();
    if go_available() {
        assert!(config.go_path.is_some());
    } else {
        assert!(config.go_path.is_none());
    }
}

#[test]
fn test_load_detects_toolchain_when_config_is_missing() {
    if !go_available() {
        eprintln!("skipping: no Go toolchain available");
        return;
    }

    let folder = TestFolder::new();
    let dirs = GopadDirs::with_config_dir(folder.path());

    let config = GlobalConfig::load(&dirs).unwrap();
    let detected = config.go_path.expect("detectable toolchain not picked up");
    assert!(toolchain::validate(&detected));

    // the detection result is persisted for the next load
    assert!(folder.file_exists("config.json"));
    assert!(folder.read_file("config.json").contains("goPath"));
}

#[test]
fn test_load_detects_toolchain_when_go_path_is_empty() {
    if !go_available() {
        eprintln!("skipping: no Go toolchain available");
        return;
    }

    let folder = TestFolder::new();
    folder.create_file("config.json", r#"{"goPath": ""}"#);
    let dirs = GopadDirs::with_config_dir(folder.path());

    let config = GlobalConfig::load(&dirs).unwrap();
    assert!(config
        .go_path
        .is_some_and(|p| !p.as_os_str().is_empty()));
}

#[test]
fn test_save_creates_config_dir_and_roundtrips() {
    let folder = TestFolder::new();
    let dirs = GopadDirs::with_config_dir(folder.path().join("nested").join("gopad"));

    let config = GlobalConfig {
        go_path: Some(PathBuf::from("/usr/local/go/bin/go")),
    };
    config.save(&dirs).unwrap();

    let loaded = GlobalConfig::load(&dirs).unwrap();
    assert_eq!(loaded.go_path, Some(PathBuf::from("/usr/local/go/bin/go")));
}

#[test]
fn test_config_file_uses_go_path_key() {
    let folder = TestFolder::new();
    let dirs = GopadDirs::with_config_dir(folder.path());

    let config = GlobalConfig {
        go_path: Some(PathBuf::from("/usr/bin/go")),
    };
    config.save(&dirs).unwrap();

    let raw = folder.read_file("config.json");
    assert!(raw.contains("\"goPath\""));
    assert!(raw.contains("/usr/bin/go"));
}

#[test]
fn test_unknown_fields_are_ignored() {
    let folder = TestFolder::new();
    folder.create_file(
        "config.json",
        r#"{"goPath": "/usr/bin/go", "somethingElse": 42}"#,
    );
    let dirs = GopadDirs::with_config_dir(folder.path());

    let config = GlobalConfig::load(&dirs).unwrap();
    assert_eq!(config.go_path, Some(PathBuf::from("/usr/bin/go")));
}

#[test]
fn test_corrupt_config_file_is_an_error() {
    let folder = TestFolder::new();
    folder.create_file("config.json", "{{{ not json");
    let dirs = GopadDirs::with_config_dir(folder.path());

    assert!(GlobalConfig::load(&dirs).is_err());
}
