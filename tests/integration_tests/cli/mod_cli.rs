use initlist_gen::cli::{Command, OutputMode, run, run_with_format};
use initlist_gen::config::GeneratorConfig;
use initlist_gen::errors::GenError;
use std::fs;
use tempfile::tempdir;

fn run_to_string(cfg: &GeneratorConfig, cmd: Command, mode: OutputMode) -> Result<String, GenError> {
    let mut out: Vec<u8> = Vec::new();
    run_with_format(cfg, cmd, mode, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn generate_to_writer_emits_full_text() {
    let cfg = GeneratorConfig::default();
    let s = run_to_string(&cfg, Command::Generate { output: None }, OutputMode::Plain).unwrap();
    assert_eq!(s, initlist_gen::generate().unwrap().render());
    // json mode doesn't wrap generated text
    let j = run_to_string(&cfg, Command::Generate { output: None }, OutputMode::Json).unwrap();
    assert_eq!(s, j);
}

#[test]
fn generate_to_file_reports_count() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gen.hpp");
    let cfg = GeneratorConfig::default();
    let s = run_to_string(&cfg, Command::Generate { output: Some(path.clone()) }, OutputMode::Json).unwrap();
    let v: serde_json::Value = serde_json::from_str(s.trim()).unwrap();
    assert_eq!(v["action"], "generated");
    assert_eq!(v["definitions"], 256);
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("#define RAINY_INITIALIZER_LIST(N)"));
}

#[test]
fn definition_plain_and_json() {
    let cfg = GeneratorConfig::default();
    let s = run_to_string(&cfg, Command::Definition { index: 2 }, OutputMode::Plain).unwrap();
    assert_eq!(s, "#define RAINY_INITIALIZER_LIST_2 {} ,{}\n");

    let s = run_to_string(&cfg, Command::Definition { index: 21 }, OutputMode::Json).unwrap();
    let v: serde_json::Value = serde_json::from_str(s.trim()).unwrap();
    assert_eq!(v["regime"], "recursive");
    assert_eq!(v["name"], "RAINY_INITIALIZER_LIST_21");
    assert_eq!(v["body"], "RAINY_INITIALIZER_LIST_20 ,{}");
}

#[test]
fn definition_out_of_range_is_reported() {
    let cfg = GeneratorConfig::default();
    let mut out = Vec::new();
    for index in [0, 257] {
        let err = run(&cfg, Command::Definition { index }, &mut out).unwrap_err();
        assert_eq!(err, GenError::IndexOutOfRange { index, max_index: 256 });
    }
    assert!(out.is_empty());
}

#[test]
fn header_and_config() {
    let cfg = GeneratorConfig { prefix: "LIST".into(), ..GeneratorConfig::default() };
    let s = run_to_string(&cfg, Command::Header, OutputMode::Plain).unwrap();
    assert_eq!(s, "#define LIST(N) LIST_##N\n");

    let s = run_to_string(&cfg, Command::ShowConfig, OutputMode::Plain).unwrap();
    let back: GeneratorConfig = toml::from_str(&s).unwrap();
    assert_eq!(back, cfg);

    let s = run_to_string(&cfg, Command::ShowConfig, OutputMode::Json).unwrap();
    let v: serde_json::Value = serde_json::from_str(&s).unwrap();
    assert_eq!(v["split"], 20);
}

#[test]
fn invalid_config_fails_before_output() {
    let cfg = GeneratorConfig { split: 0, ..GeneratorConfig::default() };
    let mut out = Vec::new();
    let err = run(&cfg, Command::Generate { output: None }, &mut out).unwrap_err();
    assert!(err.is_configuration());
    assert!(out.is_empty());
}
