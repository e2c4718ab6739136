//! Tests for config loading

use super::*;
use std::io::Write;

fn write_config(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn test_missing_file_returns_defaults_without_warning() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_config_from(&dir.path().join("does-not-exist.toml"));
    assert!(result.warning.is_none());
    assert!(result.config.api.base_url.is_none());
    assert_eq!(result.config.search.debounce_ms, 300);
}

#[test]
fn test_valid_file_parses() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        r#"
[api]
base_url = "https://api.somnia.example"

[auth]
token = "tok"

[search]
debounce_ms = 250
"#,
    );
    let result = load_config_from(&path);
    assert!(result.warning.is_none());
    assert_eq!(
        result.config.api.base_url.as_deref(),
        Some("https://api.somnia.example")
    );
    assert!(result.config.is_authenticated());
    assert_eq!(result.config.search.debounce_ms, 250);
}

#[test]
fn test_malformed_file_returns_defaults_with_warning() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "[api\nbase_url = \"x\"");
    let result = load_config_from(&path);
    assert!(result.warning.is_some());
    assert!(result.config.api.base_url.is_none());
}

#[test]
fn test_unknown_keys_are_tolerated() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        r#"
[api]
base_url = "https://api.somnia.example"

[future_section]
whatever = 1
"#,
    );
    let result = load_config_from(&path);
    assert!(result.warning.is_none());
    assert!(result.config.api.base_url.is_some());
}
