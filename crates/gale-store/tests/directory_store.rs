//! Integration test: file-backed persistence.

use std::fs;
use std::path::PathBuf;

use gale_core::FieldName;
use gale_grid::GridField;
use gale_store::{DirectoryStore, FieldPersistence, StorageError};
use gale_test_utils::smooth_field;

struct ScratchDir(PathBuf);

impl ScratchDir {
    fn new(label: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "gale-store-{label}-{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&path);
        Self(path)
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

#[test]
fn saved_fields_reload_exactly() {
    let dir = ScratchDir::new("reload");
    let store = DirectoryStore::new(&dir.0);
    let field = smooth_field(12, 3, 5.0);

    store.save("earth", FieldName::Pressure, &field).unwrap();
    let path = store.path_for("earth", FieldName::Pressure).unwrap();
    assert!(path.ends_with("earth/pressure.gale"));
    assert!(path.exists());

    let loaded = store.load("earth", FieldName::Pressure).unwrap();
    assert_eq!(loaded, Some(field));
}

#[test]
fn missing_world_is_cold_start() {
    let dir = ScratchDir::new("cold");
    let store = DirectoryStore::new(&dir.0);
    assert!(store.load("nowhere", FieldName::VelocityU).unwrap().is_none());
}

#[test]
fn save_overwrites_previous_value() {
    let dir = ScratchDir::new("overwrite");
    let store = DirectoryStore::new(&dir.0);
    store
        .save("w", FieldName::VelocityV, &GridField::filled(4, 1.0).unwrap())
        .unwrap();
    store
        .save("w", FieldName::VelocityV, &GridField::filled(4, 2.0).unwrap())
        .unwrap();
    let loaded = store.load("w", FieldName::VelocityV).unwrap().unwrap();
    assert_eq!(loaded.get(1, 1), 2.0);
    let leftovers: Vec<_> = fs::read_dir(dir.0.join("w"))
        .unwrap()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().is_some_and(|x| x == "tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn truncated_file_reports_error() {
    let dir = ScratchDir::new("truncated");
    let store = DirectoryStore::new(&dir.0);
    store
        .save("w", FieldName::Pressure, &GridField::filled(4, 1013.25).unwrap())
        .unwrap();
    let path = store.path_for("w", FieldName::Pressure).unwrap();
    let bytes = fs::read(&path).unwrap();
    fs::write(&path, &bytes[..bytes.len() - 20]).unwrap();

    assert!(matches!(
        store.load("w", FieldName::Pressure),
        Err(StorageError::Truncated)
    ));
}

#[test]
fn path_escaping_world_names_rejected() {
    let dir = ScratchDir::new("names");
    let store = DirectoryStore::new(&dir.0);
    let f = GridField::new(2).unwrap();
    assert!(matches!(
        store.save("../evil", FieldName::Pressure, &f),
        Err(StorageError::InvalidWorldName { .. })
    ));
}
