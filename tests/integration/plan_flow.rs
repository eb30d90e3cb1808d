//! End-to-end plan computation from files on disk

use fleetcheck::commands::plan::build_plan;
use fleetcheck::commands::{load_settings, Overrides};
use fleetcheck::{Decision, ResourceTypeId};
use std::path::PathBuf;

use super::helpers::{write_config, write_fixture, SAMPLE_STORE_JSON, SAMPLE_STORE_TOML};

fn names(list: &[ResourceTypeId]) -> Vec<&str> {
    list.iter().map(|id| id.as_str()).collect()
}

fn types(list: &[&str]) -> Vec<ResourceTypeId> {
    list.iter().map(|t| ResourceTypeId::from(*t)).collect()
}

#[test]
fn test_reference_scenarios_from_json_store() {
    let (dir, _) = write_fixture("verified.json", SAMPLE_STORE_JSON);

    // (requested, retry, confirmed, to_verify)
    let cases: [(&[&str], bool, &[&str], &[&str]); 4] = [
        (&["a", "b", "c", "d"], false, &["a"], &["c", "d"]),
        (&["a", "b", "c", "d"], true, &["a"], &["b", "c", "d"]),
        (&["a"], false, &["a"], &["c"]),
        (&["a"], true, &["a"], &["b", "c"]),
    ];

    for (requested, retry, confirmed, to_verify) in cases {
        let overrides = Overrides {
            types: types(requested),
            retry,
            store: Some(dir.path().join("verified.json")),
        };
        let config = write_config(&dir, &[], false, "verified.json");
        let settings = load_settings(Some(&config), overrides).unwrap();
        let (_, plan) = build_plan(&settings).unwrap();

        assert_eq!(names(&plan.confirmed), confirmed, "requested {requested:?} retry {retry}");
        assert_eq!(names(&plan.to_verify), to_verify, "requested {requested:?} retry {retry}");
    }
}

#[test]
fn test_first_run_without_store_verifies_everything() {
    let (dir, _) = write_fixture("README", "");
    let config = write_config(&dir, &["d", "a", "c", "b"], false, "missing.json");

    let settings = load_settings(Some(&config), Overrides::default()).unwrap();
    let (store, plan) = build_plan(&settings).unwrap();

    assert!(store.is_empty());
    assert!(plan.confirmed.is_empty());
    assert_eq!(names(&plan.to_verify), vec!["a", "b", "c", "d"]);
}

#[test]
fn test_toml_store_matches_json_store() {
    let (json_dir, json_path) = write_fixture("verified.json", SAMPLE_STORE_JSON);
    let (_toml_dir, toml_path) = write_fixture("verified.toml", SAMPLE_STORE_TOML);
    let config = write_config(&json_dir, &["a", "d"], true, "unused.json");

    let plan_for = |store: PathBuf| {
        let overrides = Overrides {
            store: Some(store),
            ..Overrides::default()
        };
        let settings = load_settings(Some(&config), overrides).unwrap();
        build_plan(&settings).unwrap().1
    };

    let from_json = plan_for(json_path);
    let from_toml = plan_for(toml_path);
    assert_eq!(from_json, from_toml);
    assert_eq!(names(&from_json.to_verify), vec!["b", "c", "d"]);
}

#[test]
fn test_config_retry_and_cli_types() {
    let (dir, _) = write_fixture("verified.json", SAMPLE_STORE_JSON);
    let config = write_config(&dir, &["a", "b", "c", "d"], true, "verified.json");

    let overrides = Overrides {
        types: types(&["a"]),
        ..Overrides::default()
    };
    let settings = load_settings(Some(&config), overrides).unwrap();
    assert!(settings.retry);

    let (_, plan) = build_plan(&settings).unwrap();
    assert_eq!(plan.decision_for("b"), Some(Decision::Verify));
    assert_eq!(plan.decision_for("d"), None);
}

#[test]
fn test_malformed_store_entry_is_confirmed() {
    let (dir, path) = write_fixture(
        "verified.json",
        r#"{"x1.32xlarge": {"attempted": false, "confirmed": true, "metric": 5}}"#,
    );
    let config = write_config(&dir, &["x1.32xlarge", "m5.large"], false, "verified.json");

    let settings = load_settings(Some(&config), Overrides::default()).unwrap();
    assert_eq!(settings.store, path);
    let (store, plan) = build_plan(&settings).unwrap();

    assert_eq!(store.malformed().len(), 1);
    assert_eq!(names(&plan.confirmed), vec!["x1.32xlarge"]);
    assert_eq!(names(&plan.to_verify), vec!["m5.large"]);
}

#[test]
fn test_corrupt_store_is_an_error() {
    let (dir, _) = write_fixture("verified.json", "{\"a\": 1}");
    let config = write_config(&dir, &["a"], false, "verified.json");

    let settings = load_settings(Some(&config), Overrides::default()).unwrap();
    let err = build_plan(&settings).unwrap_err();
    assert!(err.to_string().contains("verified.json"));
}
