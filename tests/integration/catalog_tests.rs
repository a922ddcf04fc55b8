//! Catalog persistence against real files

use std::fs;

use bookshelf::{
    models::{LoadReport, SaveReport},
    repository::{BookStore, FileStore},
    AppError, Book, Catalog,
};
use tempfile::TempDir;

fn snapshot(catalog: &Catalog) -> Vec<(String, String, bool)> {
    catalog
        .books()
        .iter()
        .map(|b| (b.title().to_string(), b.author().to_string(), b.is_borrowed()))
        .collect()
}

#[test]
fn test_save_then_load_round_trip() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path().join("books.json"));

    let mut catalog = Catalog::new();
    catalog.add(Book::new("1984", "Orwell"));
    catalog.add(Book::new("Dune", "Frank Herbert"));
    catalog.add(Book::new("Emma", "Jane Austen"));
    catalog.add(Book::new("Animal Farm", "Orwell"));
    catalog.borrow("dune");
    catalog.borrow("Animal Farm");

    assert_eq!(catalog.save(&store).unwrap(), SaveReport::Saved(4));

    let mut reloaded = Catalog::new();
    assert_eq!(reloaded.load(&store).unwrap(), LoadReport::Loaded(4));
    assert_eq!(snapshot(&reloaded), snapshot(&catalog));
}

#[test]
fn test_saved_file_is_indented_json() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("books.json");
    let store = FileStore::new(&path);

    let mut catalog = Catalog::new();
    catalog.add(Book::new("Dune", "Frank Herbert"));
    catalog.save(&store).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("[\n    {\n        \"title\": \"Dune\""));
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(value[0]["is_borrowed"], serde_json::Value::Bool(false));
}

#[test]
fn test_save_empty_leaves_existing_file_alone() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("books.json");
    fs::write(&path, "previous contents").unwrap();

    let catalog = Catalog::new();
    assert_eq!(catalog.save(&FileStore::new(&path)).unwrap(), SaveReport::NothingToSave);
    assert_eq!(fs::read_to_string(&path).unwrap(), "previous contents");
}

#[test]
fn test_save_empty_does_not_create_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("books.json");

    Catalog::new().save(&FileStore::new(&path)).unwrap();
    assert!(!path.exists());
}

#[test]
fn test_load_missing_and_empty_files() {
    let temp = TempDir::new().unwrap();
    let missing = FileStore::new(temp.path().join("missing.json"));
    let empty_path = temp.path().join("empty.json");
    fs::write(&empty_path, "").unwrap();

    let mut catalog = Catalog::new();
    assert_eq!(catalog.load(&missing).unwrap(), LoadReport::NoData);
    assert_eq!(catalog.load(&FileStore::new(&empty_path)).unwrap(), LoadReport::NoData);
    assert!(catalog.is_empty());
}

#[test]
fn test_load_malformed_file_is_fatal() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("books.json");
    fs::write(&path, "[{\"title\": \"Dune\", \"author\": ").unwrap();

    let mut catalog = Catalog::new();
    let err = catalog.load(&FileStore::new(&path)).unwrap_err();
    assert!(matches!(err, AppError::MalformedData(_)));
    assert!(err.to_string().starts_with("Malformed library data"));
    assert!(catalog.is_empty());
}

#[test]
fn test_load_non_utf8_file_is_malformed() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("books.json");
    fs::write(&path, [0xff, 0xfe, b'[', b']']).unwrap();

    let mut catalog = Catalog::new();
    let err = catalog.load(&FileStore::new(&path)).unwrap_err();
    assert!(matches!(err, AppError::MalformedData(_)));
    assert!(catalog.is_empty());
}

#[test]
fn test_save_overwrites_previous_snapshot() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path().join("books.json"));

    let mut first = Catalog::new();
    first.add(Book::new("Dune", "Frank Herbert"));
    first.add(Book::new("Emma", "Jane Austen"));
    first.save(&store).unwrap();

    let mut second = Catalog::new();
    second.add(Book::new("1984", "Orwell"));
    second.save(&store).unwrap();

    let mut reloaded = Catalog::new();
    reloaded.load(&store).unwrap();
    assert_eq!(snapshot(&reloaded), vec![("1984".to_string(), "Orwell".to_string(), false)]);
    assert!(store.read().unwrap().is_some());
}
