use std::fs;

use crate::common::{
    make_temp_dir, normalized_lines, run_with_args_and_input, run_with_input, run_without_input,
};

#[test]
fn mutating_command_writes_the_snapshot() {
    let dir = make_temp_dir("persist");
    let output = run_with_input(&dir, "add n/Acme i/Tech c/91234567 e/hr@acme.com\nexit\n");
    assert!(output.status.success());

    let snapshot = fs::read_to_string(dir.join("roster.json")).expect("snapshot should exist");
    let value: serde_json::Value = serde_json::from_str(&snapshot).expect("snapshot is json");
    assert_eq!(value["companies"][0]["name"], "Acme");
    assert_eq!(value["companies"][0]["confirmed"], false);
}

#[test]
fn read_only_session_leaves_no_snapshot_behind() {
    let dir = make_temp_dir("persist");
    let output = run_with_input(&dir, "list companies\nhelp\nexit\n");
    assert!(output.status.success());
    assert!(!dir.join("roster.json").exists());
}

#[test]
fn roster_survives_a_restart() {
    let dir = make_temp_dir("persist");
    let first = run_with_input(&dir, "add n/Acme i/Tech c/91234567 e/hr@acme.com\nexit\n");
    assert!(first.status.success());

    let second = run_with_input(&dir, "list companies\nexit\n");
    assert!(second.status.success());
    let lines = normalized_lines(&second.stdout);
    assert!(
        lines.iter().any(|l| l.contains("Acme")),
        "restarted session should list the saved company"
    );
}

#[test]
fn confirmation_state_round_trips_through_the_snapshot() {
    let dir = make_temp_dir("persist");
    let first = run_with_input(
        &dir,
        "add n/Acme i/Tech c/91234567 e/hr@acme.com\nconfirm 1\nexit\n",
    );
    assert!(first.status.success());

    let second = run_with_input(&dir, "list unconfirmed\nexit\n");
    assert!(second.status.success());
    let lines = normalized_lines(&second.stdout);
    assert!(lines.iter().any(|l| l == "No unconfirmed companies."));
}

#[test]
fn corrupt_snapshot_aborts_startup() {
    let dir = make_temp_dir("persist");
    fs::write(dir.join("roster.json"), "{ this is not json").unwrap();

    let output = run_without_input(&dir);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("JSON error"));
}

#[test]
fn data_flag_redirects_the_snapshot() {
    let dir = make_temp_dir("persist");
    let custom = dir.join("nested").join("custom.json");
    let custom_arg = custom.to_string_lossy().to_string();

    let output = run_with_args_and_input(
        &dir,
        &["--data", &custom_arg],
        "add n/Acme i/Tech c/91234567 e/hr@acme.com\nexit\n",
    );
    assert!(output.status.success());
    assert!(custom.exists(), "--data path should receive the snapshot");
    assert!(!dir.join("roster.json").exists());
}
