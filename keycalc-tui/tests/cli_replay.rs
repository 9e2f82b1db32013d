//! CLI integration tests for keycalc --replay

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Command isolated from any config in the user's home
fn keycalc(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("keycalc").unwrap();
    cmd.env("KEYCALC_CONFIG", temp.path().join("absent.toml"));
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_replay_prints_final_result() {
    let temp = TempDir::new().unwrap();

    keycalc(&temp)
        .args(["--replay", "5+3="])
        .assert()
        .success()
        .stdout(predicate::str::contains("=      8"))
        .stdout(predicate::str::contains(
            "Please press 'Ctrl + R' to reset or 'Ctrl + Q' to close the calculator",
        ));
}

#[test]
fn test_replay_division_by_zero_keeps_running() {
    let temp = TempDir::new().unwrap();

    keycalc(&temp)
        .args(["--replay", "9/0=b3="])
        .assert()
        .success()
        .stderr(predicate::str::contains("Cannot perform division by zero."))
        .stdout(predicate::str::contains("=      3"));
}

#[test]
fn test_replay_preview_before_equals() {
    let temp = TempDir::new().unwrap();

    keycalc(&temp)
        .args(["--replay", "1.5*4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=      6.0"))
        .stdout(predicate::str::contains("Please press").not());
}

#[test]
fn test_no_preview_hides_running_result() {
    let temp = TempDir::new().unwrap();

    keycalc(&temp)
        .args(["--replay", "5+3", "--no-preview"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=      8").not());
}

#[test]
fn test_config_file_disables_preview() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("config.toml");
    fs::write(&config_path, "[display]\npreview = false\n").unwrap();

    keycalc(&temp)
        .args(["--config", config_path.to_str().unwrap(), "--replay", "5+3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=      8").not());
}

#[test]
fn test_invalid_config_fails() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("config.toml");
    fs::write(&config_path, "[keys]\nreset = \"q\"\n").unwrap();

    keycalc(&temp)
        .args(["--config", config_path.to_str().unwrap(), "--replay", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope.toml");

    keycalc(&temp)
        .args(["--config", missing.to_str().unwrap(), "--replay", "1"])
        .assert()
        .failure();
}

#[test]
fn test_verbose_replay_logs_keystrokes() {
    let temp = TempDir::new().unwrap();

    keycalc(&temp)
        .env_remove("RUST_LOG")
        .args(["-v", "--replay", "5+3="])
        .assert()
        .success()
        .stderr(predicate::str::contains("keystroke applied"))
        .stdout(predicate::str::contains("=      8"));
}

#[test]
fn test_out_of_range_operand_reports_unexpected_error() {
    let temp = TempDir::new().unwrap();
    let keys = format!("{}+1=", "9".repeat(29));

    keycalc(&temp)
        .args(["--replay", keys.as_str()])
        .assert()
        .success()
        .stderr(predicate::str::contains("An unexpected error occurred"))
        .stderr(predicate::str::contains("Input format error").not());
}

#[test]
fn test_help_mentions_replay() {
    let temp = TempDir::new().unwrap();

    keycalc(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--replay"));
}
