use initlist_gen::errors::GenError;
use std::io;

#[test]
fn test_io_error_display() {
    let err: GenError = io::Error::new(io::ErrorKind::NotFound, "file not found").into();
    assert_eq!(format!("{err}"), "I/O error: file not found");
}

#[test]
fn test_invalid_split_display() {
    let err = GenError::InvalidSplit { split: 300, limit: 256 };
    assert_eq!(format!("{err}"), "invalid split point: 300 (must be within 1..=256)");
    assert!(err.is_configuration());
}

#[test]
fn test_index_out_of_range_is_not_configuration() {
    let err = GenError::IndexOutOfRange { index: 0, max_index: 256 };
    assert_eq!(format!("{err}"), "index 0 is outside 1..=256");
    assert!(!err.is_configuration());
}

#[test]
fn test_invalid_max_index_display() {
    let err = GenError::InvalidMaxIndex(5000);
    assert_eq!(format!("{err}"), "invalid max index: 5000 (must be within 1..=4096)");
    assert!(err.is_configuration());
}

#[test]
fn test_bad_toml_is_config_error_naming_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("broken.toml");
    std::fs::write(&p, "max_index = \"many\"\n").unwrap();
    match initlist_gen::config::ConfigOverrides::from_file(&p) {
        Err(GenError::Config(msg)) => assert!(msg.contains("broken.toml")),
        other => panic!("unexpected: {other:?}"),
    }
}
