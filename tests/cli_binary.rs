//! Binary integration tests for CLI commands
//!
//! These tests run the actual levelforge binary to exercise the CLI code
//! paths, with `LEVELFORGE_CONFIG_PATH` pointing at isolated state.

#![expect(clippy::unwrap_used, reason = "integration test assertions")]

use std::process::Command;
use tempfile::TempDir;

fn levelforge_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_levelforge"))
}

fn isolated_bin(temp_dir: &TempDir) -> Command {
    let mut cmd = levelforge_bin();
    cmd.env(
        "LEVELFORGE_CONFIG_PATH",
        temp_dir.path().join("settings.json"),
    );
    cmd
}

#[test]
fn test_cli_help() {
    let output = levelforge_bin().arg("--help").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Terminal front panel"));
}

#[test]
fn test_cli_version() {
    let output = levelforge_bin().arg("--version").output().unwrap();
    assert!(output.status.success());
}

#[test]
fn test_cli_config_show() {
    let temp_dir = TempDir::new().unwrap();
    let output = isolated_bin(&temp_dir).arg("config").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("backup_count"));
}

#[test]
fn test_cli_config_path() {
    let temp_dir = TempDir::new().unwrap();
    let output = isolated_bin(&temp_dir)
        .args(["config", "--path"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("settings.json"));
}

#[test]
fn test_cli_invalid_argument_shows_help() {
    let output = levelforge_bin().arg("--invalid-flag").output().unwrap();

    // Should fail with non-zero exit code
    assert!(!output.status.success());

    // Should show error message on stderr
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"));

    // Should show help text on stdout
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
}

#[test]
fn test_cli_reset_force_writes_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let settings_path = temp_dir.path().join("settings.json");

    // Seed a non-default settings file.
    std::fs::write(&settings_path, r#"{"backup_count": 9}"#).unwrap();

    let output = isolated_bin(&temp_dir)
        .args(["reset", "--force"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("reset to defaults"));

    let contents = std::fs::read_to_string(&settings_path).unwrap();
    assert!(contents.contains("\"backup_count\": 3"));
}

#[test]
fn test_cli_reset_without_confirmation_aborts() {
    let temp_dir = TempDir::new().unwrap();
    let settings_path = temp_dir.path().join("settings.json");
    std::fs::write(&settings_path, r#"{"backup_count": 9}"#).unwrap();

    let mut cmd = isolated_bin(&temp_dir);
    cmd.arg("reset").stdin(std::process::Stdio::piped());
    cmd.stdout(std::process::Stdio::piped());

    let mut child = cmd.spawn().unwrap();
    {
        use std::io::Write;
        let stdin = child.stdin.as_mut().unwrap();
        stdin.write_all(b"n\n").unwrap();
    }
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Aborted"));

    // The seeded file is untouched.
    let contents = std::fs::read_to_string(&settings_path).unwrap();
    assert!(contents.contains("9"));
}
