use std::env::temp_dir;
use std::fs;
use std::fs::File;
use std::path::Path;
use std::path::PathBuf;

use datagen::writer;
use datagen::writer::RollingWriter;
use flate2::read::GzDecoder;
use uuid::Uuid;

fn test_dir() -> PathBuf {
    let path = temp_dir().join(Uuid::new_v4().to_string());
    fs::create_dir_all(&path).unwrap();
    path
}

fn read_rows(path: &Path) -> Vec<Vec<String>> {
    let rdr = writer::csv_reader(GzDecoder::new(File::open(path).unwrap()));
    rdr.into_records()
        .map(|res| res.unwrap().iter().map(|f| f.to_string()).collect())
        .collect()
}

#[test]
fn test_rotation_with_remainder() {
    let dir = test_dir();
    let mut wtr = RollingWriter::try_new(&dir, "events", 5).unwrap();
    for i in 0..12 {
        wtr.write_record([i.to_string(), "x".to_string()]).unwrap();
    }
    wtr.close().unwrap();

    assert_eq!(read_rows(&dir.join("events-0.csv.gz")).len(), 5);
    assert_eq!(read_rows(&dir.join("events-1.csv.gz")).len(), 5);
    assert_eq!(read_rows(&dir.join("events-2.csv.gz")).len(), 2);
    assert!(!dir.join("events-3.csv.gz").exists());

    // no row lost or duplicated across boundaries
    let mut all = Vec::new();
    for n in 0..3 {
        all.extend(read_rows(&dir.join(format!("events-{n}.csv.gz"))));
    }
    let ids = all.iter().map(|r| r[0].clone()).collect::<Vec<_>>();
    assert_eq!(ids, (0..12).map(|i| i.to_string()).collect::<Vec<_>>());
}

#[test]
fn test_rotation_exact_multiple() {
    let dir = test_dir();
    let mut wtr = RollingWriter::try_new(&dir, "events", 5).unwrap();
    for i in 0..10 {
        wtr.write_record([i.to_string()]).unwrap();
    }
    wtr.close().unwrap();

    // rotation happens on the next write, so a full last file stays last
    assert_eq!(read_rows(&dir.join("events-0.csv.gz")).len(), 5);
    assert_eq!(read_rows(&dir.join("events-1.csv.gz")).len(), 5);
    assert!(!dir.join("events-2.csv.gz").exists());
}

#[test]
fn test_no_rows_still_creates_first_file() {
    let dir = test_dir();
    let mut wtr = RollingWriter::try_new(&dir, "events", 5).unwrap();
    wtr.close().unwrap();

    assert!(dir.join("events-0.csv.gz").exists());
    assert_eq!(read_rows(&dir.join("events-0.csv.gz")).len(), 0);
}

#[test]
fn test_nonpositive_max_lines_rotates_every_write() {
    let dir = test_dir();
    let mut wtr = RollingWriter::try_new(&dir, "events", 0).unwrap();
    for i in 0..3 {
        wtr.write_record([i.to_string()]).unwrap();
    }
    wtr.close().unwrap();

    // the file opened at construction never receives a row
    assert_eq!(read_rows(&dir.join("events-0.csv.gz")).len(), 0);
    for n in 1..=3 {
        assert_eq!(read_rows(&dir.join(format!("events-{n}.csv.gz"))).len(), 1);
    }
}

#[test]
fn test_close_is_idempotent_and_final() {
    let dir = test_dir();
    let mut wtr = RollingWriter::try_new(&dir, "events", 5).unwrap();
    wtr.write_record(["a"]).unwrap();
    wtr.close().unwrap();
    wtr.close().unwrap();
    assert!(wtr.write_record(["b"]).is_err());
}

#[test]
fn test_dialect_quotes_with_backslash() {
    let mut wtr = writer::csv_writer(Vec::new());
    wtr.write_record(["a,b", "plain"]).unwrap();
    let buf = wtr.into_inner().unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "\\a,b\\,plain\n");
}

#[test]
fn test_dialect_round_trip() {
    let mut wtr = writer::csv_writer(Vec::new());
    wtr.write_record(["a,b", "c"]).unwrap();
    let buf = wtr.into_inner().unwrap();

    let rdr = writer::csv_reader(buf.as_slice());
    let rows = rdr
        .into_records()
        .map(|res| {
            res.unwrap()
                .iter()
                .map(|f| f.to_string())
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    assert_eq!(rows, vec![vec!["a,b".to_string(), "c".to_string()]]);
}
