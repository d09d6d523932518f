use quillpad::config::{Config, SETTINGS_FILE};
use std::fs;
use tempfile::TempDir;

fn config_with_recent(number: usize, files: &[&str]) -> (TempDir, Config) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let list = files
        .iter()
        .map(|f| format!("{f:?}"))
        .collect::<Vec<_>>()
        .join(", ");
    fs::write(
        dir.path().join(SETTINGS_FILE),
        format!("[text]\nrecentFilesNumber = {number}\nrecentFiles = [{list}]\n"),
    )
    .expect("Failed to write settings");
    let mut config = Config::in_dir(dir.path());
    config.read_config();
    (dir, config)
}

#[test]
fn test_add_moves_existing_to_front() {
    let (_dir, mut config) = config_with_recent(3, &["a", "b", "c"]);

    config.add_recent_file("b");
    assert_eq!(config.text.recent_files(), ["b", "a", "c"]);

    config.add_recent_file("d");
    assert_eq!(config.text.recent_files(), ["d", "b", "a"]);
}

#[test]
fn test_readding_front_is_idempotent() {
    let (_dir, mut config) = config_with_recent(3, &["a", "b"]);

    config.add_recent_file("a");
    config.add_recent_file("a");
    assert_eq!(config.text.recent_files(), ["a", "b"]);
}

#[test]
fn test_never_exceeds_cap() {
    let mut config = Config::with_paths(None);
    config.text.set_recent_files_number(4);

    for i in 0..50 {
        config.add_recent_file(&format!("/file{}", i % 7));
        assert!(config.text.recent_files().len() <= 4);
    }
    assert_eq!(config.text.recent_files()[0], "/file0");
}

#[test]
fn test_lowering_cap_truncates() {
    let (_dir, mut config) = config_with_recent(5, &["a", "b", "c", "d"]);

    config.text.set_recent_files_number(2);
    assert_eq!(config.text.recent_files(), ["a", "b"]);

    config.text.set_recent_files_number(0);
    assert_eq!(config.text.recent_files_number(), 1);
    assert_eq!(config.text.recent_files(), ["a"]);
}

#[test]
fn test_add_is_not_persisted_until_write() {
    let (dir, mut config) = config_with_recent(3, &["a"]);
    config.add_recent_file("b");

    let mut other = Config::in_dir(dir.path());
    other.read_config();
    assert_eq!(other.text.recent_files(), ["a"]);

    config.write_config();
    other.read_config();
    assert_eq!(other.text.recent_files(), ["b", "a"]);
}
