//! Catalog files on disk through `load_catalog` and `Engine::load`.

use std::path::Path;

use dsamatch::{load_catalog, CatalogError, Engine, EngineConfig, StopWords, Tokenizer};

use crate::common::{best_id, catalog_file, SAMPLE_JSON};

fn load(path: &Path) -> Result<Vec<dsamatch::Record>, CatalogError> {
    let stopwords = StopWords::default();
    load_catalog(path, &Tokenizer::new(&stopwords))
}

#[test]
fn loads_array_catalog_in_order() {
    let file = catalog_file(SAMPLE_JSON);
    let records = load(file.path()).unwrap();

    let ids: Vec<&str> = records.iter().map(|r| r.id()).collect();
    assert_eq!(ids, vec!["Q1", "Q2", "Q3"]);
    assert_eq!(records[1].answer(), "Walk the list flipping next pointers.");
}

#[test]
fn loads_wrapped_catalog() {
    let file = catalog_file(
        r#"{"questions": [
            {"id": 1, "question": "Detect a cycle in a linked list", "answer": "Floyd."},
            {"id": 2, "question": "Find the height of a binary tree"}
        ]}"#,
    );
    let records = load(file.path()).unwrap();

    assert_eq!(records[0].id(), "1");
    assert_eq!(records[1].answer(), "");
    assert!(records[0].keywords().contains("cycle"));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load(&dir.path().join("absent.json")).unwrap_err();

    assert!(matches!(err, CatalogError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn malformed_file_names_its_path() {
    let file = catalog_file("{ not json");
    let err = load(file.path()).unwrap_err();

    assert!(matches!(err, CatalogError::Parse { .. }));
    assert!(err.to_string().contains(&file.path().display().to_string()));
}

#[test]
fn duplicate_ids_are_rejected() {
    let file = catalog_file(
        r#"[{"id": "Q1", "question": "a"}, {"id": 2, "question": "b"}, {"id": "2", "question": "c"}]"#,
    );
    let err = load(file.path()).unwrap_err();

    assert!(matches!(err, CatalogError::DuplicateId { ref id, position: 2 } if id == "2"));
}

#[test]
fn engine_answers_from_loaded_file() {
    let file = catalog_file(SAMPLE_JSON);
    let engine = Engine::load(file.path(), EngineConfig::default()).unwrap();

    assert_eq!(engine.len(), 3);
    let ranked = engine.query("curcular que");
    assert_eq!(best_id(&ranked, engine.records()), Some("Q3"));
}
