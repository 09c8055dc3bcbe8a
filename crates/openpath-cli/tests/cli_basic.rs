//! Basic CLI E2E tests.
//!
//! Commands run via cargo against a throwaway HOME so the database and
//! config never touch the real user directory.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

fn run_cli(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-q", "-p", "openpath-cli", "--"])
        .args(args)
        .env("HOME", home)
        .env("OPENPATH_ENV", "dev")
        .output()
        .expect("failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn path_list_shows_the_catalog() {
    let home = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["path", "list"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("p1"));
    assert!(stdout.contains("p15"));
}

#[test]
fn select_then_complete_day_one() {
    let home = TempDir::new().unwrap();

    let (stdout, _, code) = run_cli(home.path(), &["path", "select", "p1"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("PathSelected"));

    let (stdout, _, code) = run_cli(home.path(), &["day", "show"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Day 1"));

    for part in ["input", "output", "synthesis"] {
        let (_, _, code) = run_cli(home.path(), &["task", "done", part]);
        assert_eq!(code, 0, "marking {part} failed");
    }

    let (stdout, _, code) = run_cli(home.path(), &["stats", "show"]);
    assert_eq!(code, 0);
    let snapshot: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(snapshot["completed_for_path"], 1);
    assert_eq!(snapshot["current_streak"], 1);
}

#[test]
fn next_is_refused_until_the_day_is_done() {
    let home = TempDir::new().unwrap();
    run_cli(home.path(), &["path", "select", "p1"]);

    let (stdout, _, code) = run_cli(home.path(), &["day", "next"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("complete the current day"));
}

#[test]
fn unknown_path_id_is_an_error() {
    let home = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["path", "select", "p99"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown path"));
}

#[test]
fn day_commands_require_a_selected_path() {
    let home = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["day", "show"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("no path selected"));
}

#[test]
fn auth_status_roundtrip() {
    let home = TempDir::new().unwrap();
    run_cli(
        home.path(),
        &["auth", "login", "--name", "Asha", "--email", "asha@example.com"],
    );
    let (stdout, _, code) = run_cli(home.path(), &["auth", "status"]);
    assert_eq!(code, 0);
    let status: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(status["name"], "Asha");
    assert_eq!(status["authenticated"], true);
}

#[test]
fn config_get_set_roundtrip() {
    let home = TempDir::new().unwrap();
    let (_, _, code) = run_cli(home.path(), &["config", "set", "celebration", "false"]);
    assert_eq!(code, 0);
    let (stdout, _, code) = run_cli(home.path(), &["config", "get", "celebration"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "false");
}

#[test]
fn celebration_banner_respects_the_config_toggle() {
    let home = TempDir::new().unwrap();
    run_cli(home.path(), &["config", "set", "celebration", "false"]);
    run_cli(home.path(), &["path", "select", "p1"]);
    run_cli(home.path(), &["task", "done", "input"]);
    run_cli(home.path(), &["task", "done", "output"]);
    let (stdout, _, code) = run_cli(home.path(), &["task", "done", "synthesis"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("DayCompleted"));
    assert!(!stdout.contains("***"));
}

#[test]
fn path_change_with_yes_clears_selection() {
    let home = TempDir::new().unwrap();
    run_cli(home.path(), &["path", "select", "p2"]);
    let (stdout, _, code) = run_cli(home.path(), &["path", "change", "--yes"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("PathCleared"));

    let (stdout, _, code) = run_cli(home.path(), &["stats", "show"]);
    assert_eq!(code, 0);
    let snapshot: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(snapshot["selected_path_id"].is_null());
}
