//! Shared test helpers for on-disk fixtures

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Store snapshot with one type in each state:
/// a confirmed, b inconclusive, c recorded but never attempted.
pub const SAMPLE_STORE_JSON: &str = r#"{
  "a": {"attempted": true, "confirmed": true, "metric": 10},
  "b": {"attempted": true, "confirmed": false, "metric": 70},
  "c": {"attempted": false, "confirmed": false, "metric": -1}
}"#;

pub const SAMPLE_STORE_TOML: &str = r#"
[a]
attempted = true
confirmed = true
metric = 10

[b]
attempted = true
confirmed = false
metric = 70

[c]
attempted = false
confirmed = false
metric = -1
"#;

/// Test helper: write `content` to `name` inside a fresh temp directory
pub fn write_fixture(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join(name);
    fs::write(&path, content).expect("Failed to write fixture");
    (temp_dir, path)
}

/// Test helper: write a config file next to a status store
pub fn write_config(dir: &TempDir, types: &[&str], retry: bool, store: &str) -> PathBuf {
    let list = types
        .iter()
        .map(|t| format!("\"{t}\""))
        .collect::<Vec<_>>()
        .join(", ");
    let content = format!("[verify]\ninstance_types = [{list}]\nretry = {retry}\nstore = \"{store}\"\n");
    let path = dir.path().join("fleetcheck.toml");
    fs::write(&path, content).expect("Failed to write config");
    path
}
