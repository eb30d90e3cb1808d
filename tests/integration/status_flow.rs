//! Status listing against files on disk

use fleetcheck::commands::status::{load_status, select_entries, StatusReport};
use fleetcheck::commands::Overrides;
use fleetcheck::fs::load_store;
use fleetcheck::{ResourceTypeId, StatusClass};
use serial_test::serial;

use super::helpers::{write_config, write_fixture, SAMPLE_STORE_JSON, SAMPLE_STORE_TOML};

#[test]
fn test_select_entries_from_toml_store() {
    let (_dir, path) = write_fixture("verified.toml", SAMPLE_STORE_TOML);
    let store = load_store(&path).unwrap();

    let entries = select_entries(&store, &[]);
    let summary: Vec<(&str, StatusClass)> = entries
        .iter()
        .map(|(id, status)| (id.as_str(), status.class()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("a", StatusClass::Confirmed),
            ("b", StatusClass::Inconclusive),
            ("c", StatusClass::NeverAttempted),
        ]
    );
}

#[test]
#[serial]
fn test_render_status_filtered() {
    let (_dir, path) = write_fixture("verified.toml", SAMPLE_STORE_TOML);
    let store = load_store(&path).unwrap();

    colored::control::set_override(false);
    let filter = [ResourceTypeId::from("b")];
    let text = StatusReport::new(&store, &filter).to_string();
    colored::control::unset_override();

    assert!(text.contains("inconclusive"));
    assert!(text.contains("70"));
    assert!(!text.contains("confirmed"));
}

#[test]
#[serial]
fn test_status_lists_entries_outside_configured_types() {
    let (dir, _) = write_fixture("verified.json", SAMPLE_STORE_JSON);
    let config = write_config(&dir, &["a"], false, "verified.json");

    let query = load_status(Some(&config), Overrides::default()).unwrap();
    let entries = select_entries(&query.store, &query.filter);
    let listed: Vec<&str> = entries
        .iter()
        .map(|(id, _)| id.as_str())
        .collect();
    assert_eq!(listed, vec!["a", "b", "c"]);
}
