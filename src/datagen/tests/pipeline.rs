use std::env::temp_dir;
use std::fs;
use std::path::PathBuf;

use datagen::pipeline;
use uuid::Uuid;

fn test_dir() -> PathBuf {
    let path = temp_dir().join(Uuid::new_v4().to_string());
    fs::create_dir_all(&path).unwrap();
    path
}

#[test]
fn test_clear_dir() {
    let dir = test_dir();
    fs::write(dir.join("a.csv.gz"), b"x").unwrap();
    fs::write(dir.join("b.csv.gz"), b"y").unwrap();

    pipeline::clear_dir(&dir).unwrap();
    assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);

    // clearing an already empty dir is fine
    pipeline::clear_dir(&dir).unwrap();
}

#[test]
fn test_clear_dir_is_flat() {
    let dir = test_dir();
    fs::create_dir(dir.join("nested")).unwrap();
    assert!(pipeline::clear_dir(&dir).is_err());
}

#[test]
fn test_clear_dir_missing_path() {
    let dir = test_dir().join("missing");
    assert!(pipeline::clear_dir(&dir).is_err());
}
