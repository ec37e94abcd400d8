#![allow(deprecated)] // cargo_bin is deprecated but still supported by assert_cmd

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn roman() -> Command {
    let mut cmd = Command::cargo_bin("roman").expect("roman binary");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_prints_value_on_stdout() {
    roman()
        .arg("MCMXCIV")
        .assert()
        .success()
        .stdout("1994\n");
}

#[test]
fn test_json_output() {
    roman()
        .args(["xiv", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"input":"xiv","value":14}"#));
}

#[test]
fn test_invalid_numeral_exits_with_input_error() {
    roman()
        .arg("IC")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid subtraction 'IC' at position 0"));
}

#[test]
fn test_unknown_format_exits_with_config_error() {
    roman()
        .args(["X", "--format", "xml"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("plain, json"));
}

#[test]
fn test_format_from_config_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("roman.toml");
    std::fs::write(&config_path, "[output]\nformat = \"json\"\n")?;

    roman()
        .arg("MMXXIII")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""value":2023"#));

    Ok(())
}

#[test]
fn test_missing_config_file_exits_with_system_error() -> Result<()> {
    let temp_dir = TempDir::new()?;

    roman()
        .arg("X")
        .arg("--config")
        .arg(temp_dir.path().join("missing.toml"))
        .assert()
        .failure()
        .code(3);

    Ok(())
}
