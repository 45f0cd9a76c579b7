use initlist_gen::emit::{write_file, write_to};
use std::fs;
use tempfile::tempdir;

#[test]
fn write_file_matches_render() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("initializer_list.hpp");
    let seq = initlist_gen::generate().unwrap();
    write_file(&seq, &path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), seq.render());
}

#[test]
fn write_file_truncates_existing_content() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.hpp");
    fs::write(&path, "x".repeat(100_000)).unwrap();
    let seq = initlist_gen::generate().unwrap();
    write_file(&seq, &path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), seq.render());
}

#[test]
fn write_file_into_missing_directory_is_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("out.hpp");
    let seq = initlist_gen::generate().unwrap();
    let err = write_file(&seq, &path).unwrap_err();
    assert!(matches!(err, initlist_gen::errors::GenError::Io(_)));
}

#[test]
fn write_to_buffer_twice_is_identical() {
    let seq = initlist_gen::generate().unwrap();
    let mut a = Vec::new();
    let mut b = Vec::new();
    write_to(&seq, &mut a).unwrap();
    write_to(&seq, &mut b).unwrap();
    assert_eq!(a, b);
}
