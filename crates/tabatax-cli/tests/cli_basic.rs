//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. Each test
//! gets its own HOME so the config/database never collide across tests.

use std::path::Path;
use std::process::Command;

/// Run a CLI command against an isolated home directory.
fn run_cli(home: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new("cargo")
        .args(["run", "-p", "tabatax-cli", "--quiet", "--"])
        .args(args)
        .env("HOME", home)
        .env("TABATAX_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

#[test]
fn workout_show_prints_the_starter_circuit() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(home.path(), &["workout", "show"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Burpees"));
    assert!(stdout.contains("3 sets"));
}

#[test]
fn workout_total_formats_the_estimate() {
    let home = tempfile::tempdir().unwrap();
    // Starter: (20+10) + (20+10) + 45 = 105s per set, x3 sets,
    // + 2x30 set rest = 375s.
    let (code, stdout, _) = run_cli(home.path(), &["workout", "total"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "6:15");
}

#[test]
fn workout_add_then_remove_round_trips() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(
        home.path(),
        &["workout", "add", "Jump Rope", "--work", "40", "--icon", "cardio"],
    );
    assert_eq!(code, 0);
    let id = stdout
        .split("id=")
        .nth(1)
        .and_then(|s| s.split(')').next())
        .expect("add output carries the id")
        .to_string();

    let (code, stdout, _) = run_cli(home.path(), &["workout", "show"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Jump Rope"));

    let (code, _, _) = run_cli(home.path(), &["workout", "remove", &id]);
    assert_eq!(code, 0);

    let (code, stdout, _) = run_cli(home.path(), &["workout", "show"]);
    assert_eq!(code, 0);
    assert!(!stdout.contains("Jump Rope"));
}

#[test]
fn workout_remove_unknown_exercise_fails() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(home.path(), &["workout", "remove", "No Such Thing"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}

#[test]
fn workout_timing_updates_the_saved_document() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(
        home.path(),
        &["workout", "timing", "--work", "30", "--sets", "2"],
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("work 30s"));
    assert!(stdout.contains("2 sets"));

    let (code, stdout, _) = run_cli(home.path(), &["workout", "show"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("work 30s"));
}

#[test]
fn config_get_and_set() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(home.path(), &["config", "get", "timing.workDuration"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "20");

    let (code, _, _) = run_cli(home.path(), &["config", "set", "cues.motivation", "false"]);
    assert_eq!(code, 0);

    let (code, stdout, _) = run_cli(home.path(), &["config", "get", "cues.motivation"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "false");
}

#[test]
fn config_rejects_unknown_keys() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(home.path(), &["config", "get", "cues.volume"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown config key"));
}

#[test]
fn config_list_shows_every_key() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(home.path(), &["config", "list"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("timing.workDuration = 20"));
    assert!(stdout.contains("cues.enabled = true"));
}

#[test]
fn data_show_emits_a_valid_document() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(home.path(), &["data", "show"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(parsed["config"].is_object());
    assert!(parsed["exercises"].is_array());
}

#[test]
fn data_export_then_import_round_trips() {
    let home = tempfile::tempdir().unwrap();
    let out_dir = home.path().join("exports");
    std::fs::create_dir_all(&out_dir).unwrap();

    let (code, _, _) = run_cli(home.path(), &["data", "init"]);
    assert_eq!(code, 0);

    let dir_arg = out_dir.to_string_lossy().to_string();
    let (code, stdout, _) = run_cli(home.path(), &["data", "export", "--dir", &dir_arg]);
    assert_eq!(code, 0);
    let path = stdout.trim().strip_prefix("Exported to ").unwrap().to_string();

    let (code, stdout, _) = run_cli(home.path(), &["data", "import", &path]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Imported 3 exercises"));
}

#[test]
fn data_import_rejects_malformed_documents() {
    let home = tempfile::tempdir().unwrap();
    let bad = home.path().join("bad.json");
    std::fs::write(&bad, r#"{"config": [], "exercises": {}}"#).unwrap();

    let bad_arg = bad.to_string_lossy().to_string();
    let (code, _, stderr) = run_cli(home.path(), &["data", "import", &bad_arg]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));

    // The saved slot is untouched: show still works.
    let (code, _, _) = run_cli(home.path(), &["data", "show"]);
    assert_eq!(code, 0);
}

#[test]
fn stats_runs_on_an_empty_history() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(home.path(), &["stats"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Runs completed:  0"));
}
