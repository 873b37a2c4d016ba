//! Purpose: End-to-end coverage of load + query through the public library API.
//! Exports: Integration tests only.
//! Role: Lock the documented search and duplicate semantics against real files.
//! Invariants: Every fixture is written to a temp dir; the repo data file is read-only.

use std::io::Write;
use std::path::Path;

use client_cli::{Dataset, ErrorKind, QueryEngine, load};
use serde_json::{Value, json};

const ROUND_TRIP: &str = r#"[{"id":1,"full_name":"John Doe","email":"john@x.com"},{"id":2,"full_name":"John Johnson","email":"john@x.com"},{"id":3,"full_name":"Jane Smith","email":"jane@x.com"}]"#;

fn write_fixture(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).expect("create");
    file.write_all(contents.as_bytes()).expect("write");
    path
}

fn ids<'a>(records: impl IntoIterator<Item = &'a client_cli::Record>) -> Vec<Value> {
    records
        .into_iter()
        .map(|record| record.get("id").cloned().unwrap_or(Value::Null))
        .collect()
}

#[test]
fn round_trip_scenario() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = write_fixture(temp.path(), "clients.json", ROUND_TRIP);
    let engine = QueryEngine::new(load(&path).expect("load"));
    assert_eq!(engine.total_count(), 3);

    let results = engine.search_by_field("full_name", "john").expect("search");
    assert_eq!(ids(results.iter().copied()), vec![json!(1), json!(2)]);

    let groups = engine.find_duplicates_by_field("email").expect("dups");
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].value, &json!("john@x.com"));
    assert_eq!(groups[0].count, 2);
    assert_eq!(ids(groups[0].records.iter().copied()), vec![json!(1), json!(2)]);
}

#[test]
fn case_variants_return_identical_results() {
    let engine = QueryEngine::new(Dataset::from_json_str(ROUND_TRIP).expect("dataset"));
    for (a, b) in [("bob", "BOB"), ("john", "JoHn"), ("smith", "SMITH")] {
        assert_eq!(
            engine.search_by_field("full_name", a).expect("a"),
            engine.search_by_field("full_name", b).expect("b")
        );
    }
}

#[test]
fn sugar_matches_generic_operations() {
    let engine = QueryEngine::new(Dataset::from_json_str(ROUND_TRIP).expect("dataset"));
    assert_eq!(
        engine.search_by_name("jane").expect("sugar"),
        engine.search_by_field("full_name", "jane").expect("generic")
    );
    assert_eq!(
        engine.find_duplicate_emails().expect("sugar"),
        engine.find_duplicates_by_field("email").expect("generic")
    );
}

#[test]
fn bundled_sample_data_has_bob_duplicates() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/clients.json");
    let engine = QueryEngine::new(load(&path).expect("load"));

    let bobs = engine.search_by_name("Bob").expect("search");
    assert_eq!(bobs.len(), 3);
    assert!(bobs.iter().all(|record| {
        record
            .text("full_name")
            .is_some_and(|name| name.to_lowercase().contains("bob"))
    }));
    assert!(engine.search_by_name("abc").expect("search").is_empty());

    let groups = engine.find_duplicate_emails().expect("dups");
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].value, &json!("bob@music.com"));
    assert_eq!(groups[0].count, 2);
}

#[test]
fn load_failures_map_to_error_kinds() {
    let temp = tempfile::tempdir().expect("tempdir");

    let err = load(temp.path().join("missing.json")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FileNotFound);

    let bad = write_fixture(temp.path(), "bad.json", "not json");
    assert_eq!(load(&bad).unwrap_err().kind(), ErrorKind::MalformedInput);

    let object = write_fixture(temp.path(), "object.json", r#"{"clients":[]}"#);
    assert_eq!(load(&object).unwrap_err().kind(), ErrorKind::InvalidShape);

    let mixed = write_fixture(temp.path(), "mixed.json", r#"[{"id":1},[1,2]]"#);
    let err = load(&mixed).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidShape);
    assert_eq!(err.index(), Some(1));
    assert!(err.message().unwrap_or_default().contains("got array"));
}

#[test]
fn empty_dataset_never_reports_unknown_field() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = write_fixture(temp.path(), "empty.json", "[]");
    let engine = QueryEngine::new(load(&path).expect("load"));
    assert!(engine.search_by_field("nonexistent_field", "x").expect("search").is_empty());
    assert!(engine.find_duplicates_by_field("nonexistent_field").expect("dups").is_empty());
}
