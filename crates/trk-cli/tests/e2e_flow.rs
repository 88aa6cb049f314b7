//! End-to-end tests for the `trk` binary.
//!
//! Each test writes a log and a config file into a temp directory and runs
//! the binary against them with a fixed reference time.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn trk_binary() -> String {
    env!("CARGO_BIN_EXE_trk").to_string()
}

/// Writes `config.toml` pointing at `log` inside `temp`, returning its path.
fn write_config(temp: &Path, timezone: &str) -> std::path::PathBuf {
    let config_file = temp.join("config.toml");
    std::fs::write(
        &config_file,
        format!(
            "log_path = \"{}\"\ntimezone = \"{timezone}\"\n",
            temp.join("log").display()
        ),
    )
    .unwrap();
    config_file
}

fn run_trk(temp: &Path, args: &[&str]) -> Output {
    let config_file = write_config(temp, "America/New_York");
    Command::new(trk_binary())
        .env("HOME", temp)
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(&config_file)
        .args(args)
        .output()
        .expect("failed to run trk")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

const LOG: &str = "\
2024-01-01T14:00:00Z start work proj1 urgent client-x
2024-01-01T14:10:00Z start work proj1
2024-01-01T14:20:00Z stop work proj1
2024-01-01T14:30:00Z stop work proj1
this line is junk
2024-01-01T16:00:00Z start home garden
2024-01-01T17:00:00Z stop home garden
2024-01-01T18:00:00Z stop home garden
2024-01-01T19:00:00Z start work proj2
";

#[test]
fn test_summary_day() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("log"), LOG).unwrap();

    let output = run_trk(
        temp.path(),
        &["summary", "day", "--at", "2024-01-01T22:00:00Z"],
    );
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "\
Time Summary - This Day
==================================================
Total: 1:40

Breakdown:
  home/
    garden: 1:00

  work/
    proj1: 0:40
"
    );
}

#[test]
fn test_summary_fifo_pairing_with_tags() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("log"), LOG).unwrap();

    let output = run_trk(
        temp.path(),
        &["summary", "week", "--tags", "--at", "2024-01-03T12:00:00Z"],
    );
    assert!(output.status.success());
    let out = stdout(&output);
    // FIFO: the tagged start pairs with the first stop (20 min), the
    // untagged start with the second (20 min)
    assert!(out.contains("      [client-x, urgent]: 0:20\n"), "{out}");
    assert!(out.contains("      [no tags]: 0:20\n"), "{out}");
    assert!(out.starts_with("Time Summary - This Week\n"), "{out}");
}

#[test]
fn test_summary_defaults_to_day() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("log"), "").unwrap();

    let output = run_trk(temp.path(), &[]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "No tracked time found for this day.\n");
}

#[test]
fn test_summary_invalid_period() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("log"), LOG).unwrap();

    let output = run_trk(temp.path(), &["summary", "decade"]);
    assert!(output.status.success(), "invalid period is not a crash");
    assert_eq!(
        stdout(&output),
        "Invalid period: decade\nValid periods: day, week, month, year\n"
    );
}

#[test]
fn test_summary_missing_log() {
    let temp = TempDir::new().unwrap();

    let output = run_trk(temp.path(), &["summary", "month"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.starts_with("No log file found at "), "{out}");
    assert!(!out.contains("Breakdown"));
}

#[test]
fn test_summary_json() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("log"), LOG).unwrap();

    let output = run_trk(
        temp.path(),
        &["summary", "year", "--json", "--at", "2024-06-01T12:00:00Z"],
    );
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["period"], "year");
    assert_eq!(json["timezone"], "America/New_York");
    assert_eq!(json["total_seconds"], 6000);
    assert_eq!(json["entries"].as_array().unwrap().len(), 2);
}

#[test]
fn test_tags_listing() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("log"), LOG).unwrap();

    let output = run_trk(temp.path(), &["tags"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "\
Tags by Project
==================================================
  home/
    garden: (no tags)
  work/
    proj1: client-x, urgent
    proj2: (no tags)
"
    );
}

#[test]
fn test_unknown_timezone_fails() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("log"), LOG).unwrap();
    let config_file = write_config(temp.path(), "Atlantis/Capital");

    let output = Command::new(trk_binary())
        .env("HOME", temp.path())
        .env_remove("XDG_CONFIG_HOME")
        .arg("--config")
        .arg(&config_file)
        .arg("summary")
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown timezone"), "{stderr}");
}
