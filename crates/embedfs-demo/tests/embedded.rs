//! Tests against the filesystem generated by `build.rs`.

use embedfs::{DataKind, FileSystem};
use embedfs_demo::{ASSETS, read_asset};
use std::io::{ErrorKind, Read, Seek, SeekFrom};

#[test]
fn test_every_asset_is_embedded() {
    let keys: Vec<_> = ASSETS.iter().map(|(key, _)| key).collect();
    assert_eq!(keys, ["/a.txt", "/b.bin", "/docs/readme.md"]);
}

#[test]
fn test_text_asset() {
    assert_eq!(read_asset("/a.txt").unwrap(), b"hi");
    let record = ASSETS.table().get("/a.txt").unwrap();
    assert_eq!(record.data().kind(), DataKind::Text);
    assert_eq!(record.name(), "a.txt");
    assert_eq!(record.size(), 2);
}

#[test]
fn test_binary_asset() {
    assert_eq!(read_asset("/b.bin").unwrap(), [0x00, 0xFF]);
    let record = ASSETS.table().get("/b.bin").unwrap();
    assert_eq!(record.data().kind(), DataKind::Raw);
}

#[test]
fn test_nested_asset_through_trait() {
    let mut file = FileSystem::open(&*ASSETS, "/docs/readme.md").unwrap();
    let stat = file.stat().unwrap();
    assert_eq!(stat.name(), "readme.md");
    assert!(stat.is_file());

    file.seek(SeekFrom::Start(2)).unwrap();
    let mut rest = String::new();
    file.read_to_string(&mut rest).unwrap();
    assert!(rest.starts_with("Demo assets"));
}

#[test]
fn test_inferred_directory() {
    let dir = ASSETS.open("/docs").unwrap();
    assert!(dir.metadata().is_dir());
    assert!(ASSETS.open("/docs/").unwrap().metadata().is_dir());
}

#[test]
fn test_missing_asset() {
    let err = read_asset("/missing.txt").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}
