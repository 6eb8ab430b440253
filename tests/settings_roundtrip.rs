//! Persistence tests for the settings file.

#![expect(clippy::unwrap_used, reason = "integration test assertions")]

use levelforge::Settings;
use levelforge::config::Theme;
use tempfile::TempDir;

#[test]
fn test_settings_roundtrip_preserves_all_fields() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");

    let settings = Settings {
        theme: Theme::Dark,
        backups: false,
        backup_count: 10,
        overwrite_warning: false,
        debug_messages: true,
        author: "Guy Incognito".to_string(),
    };

    settings.save_to(&path).unwrap();
    let loaded = Settings::load_from(&path).unwrap();
    assert_eq!(settings, loaded);
}

#[test]
fn test_settings_file_is_human_readable_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");

    Settings::default().save_to(&path).unwrap();
    let contents = std::fs::read_to_string(&path).unwrap();

    // Pretty-printed, one field per line, stable key names.
    assert!(contents.contains("\"theme\": \"system\""));
    assert!(contents.contains("\"backup_count\": 3"));
    assert!(contents.lines().count() > 5);
}

#[test]
fn test_unknown_keys_are_tolerated() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");

    std::fs::write(&path, r#"{"backup_count": 4, "future_option": true}"#).unwrap();

    let loaded = Settings::load_from(&path).unwrap();
    assert_eq!(loaded.backup_count, 4);
}

#[test]
fn test_corrupt_file_is_an_error_from_load_from() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");

    std::fs::write(&path, "not json at all").unwrap();
    assert!(Settings::load_from(&path).is_err());
}

#[test]
fn test_save_into_missing_directory_creates_it() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("a/b/c/settings.json");

    Settings::default().save_to(&path).unwrap();
    assert!(path.exists());
}
