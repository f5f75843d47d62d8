// tests/json_storage.rs
mod common;
use crate::common::builders::{ActivityBuilder, date};

use std::fs;

use construplan::errors::ConstruplanError;
use construplan::storage::{ActivityStorage, JsonFileStorage};

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[test]
fn missing_file_loads_as_empty_collection() -> TestResult {
    let dir = tempfile::tempdir()?;
    let storage = JsonFileStorage::new(dir.path().join("activities.json"));

    assert!(storage.load()?.is_empty());
    Ok(())
}

#[test]
fn blank_file_loads_as_empty_collection() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("activities.json");
    fs::write(&path, "\n  \n")?;

    assert!(JsonFileStorage::new(path).load()?.is_empty());
    Ok(())
}

#[test]
fn saved_collection_loads_back_in_order() -> TestResult {
    let dir = tempfile::tempdir()?;
    let storage = JsonFileStorage::new(dir.path().join("nested/plans/activities.json"));
    let activities = vec![
        ActivityBuilder::new(3).title("Framing").after(1).build(),
        ActivityBuilder::new(1).title("Foundation").duration(5).before(3).build(),
    ];

    storage.save(&activities)?;

    assert_eq!(storage.load()?, activities);
    assert!(!dir.path().join("nested/plans/activities.json.tmp").exists());
    Ok(())
}

#[test]
fn file_uses_plain_field_names_and_iso_dates() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("activities.json");
    let storage = JsonFileStorage::new(&path);

    storage.save(&[ActivityBuilder::new(1).start("2024-01-01").duration(5).before(2).build()])?;

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
    let first = &json[0];
    assert_eq!(first["id"], 1);
    assert_eq!(first["start"], "2024-01-01");
    assert_eq!(first["duration"], 5);
    assert_eq!(first["predecessors"], serde_json::json!([]));
    assert_eq!(first["successors"], serde_json::json!([2]));
    Ok(())
}

#[test]
fn records_without_relation_lists_load_with_empty_sets() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("activities.json");
    fs::write(
        &path,
        r#"[{"id": 4, "title": "Roofing", "start": "2024-03-04", "duration": 2}]"#,
    )?;

    let loaded = JsonFileStorage::new(path).load()?;

    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].start, date("2024-03-04"));
    assert!(loaded[0].predecessors.is_empty());
    assert!(loaded[0].successors.is_empty());
    Ok(())
}

#[test]
fn corrupt_file_is_a_json_error() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("activities.json");
    fs::write(&path, "[{\"id\": 1,")?;

    let result = JsonFileStorage::new(path).load();

    assert!(matches!(result, Err(ConstruplanError::JsonError(_))));
    Ok(())
}
