use crate::common::{
    make_temp_dir, normalized_lines, run_with_cli_args, run_with_input, run_without_input,
};

#[test]
fn exit_command_finishes_with_status_zero() {
    let dir = make_temp_dir("session");
    let output = run_with_input(&dir, "exit\n");

    assert!(output.status.success());
    let lines = normalized_lines(&output.stdout);
    assert!(lines.iter().any(|l| l == "Goodbye, see you at the fair!"));
}

#[test]
fn end_of_input_finishes_cleanly() {
    let dir = make_temp_dir("session");
    let output = run_without_input(&dir);
    assert!(output.status.success());
}

#[test]
fn banner_is_printed_once_per_session() {
    let dir = make_temp_dir("session");
    let output = run_with_input(&dir, "help\nlist companies\nexit\n");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let banners = stdout.matches("F A I R D E S K").count();
    assert_eq!(banners, 1, "banner must only appear on startup");
    assert!(stdout.contains("Type 'help' for the command guide"));
}

#[test]
fn blank_lines_are_ignored() {
    let dir = make_temp_dir("session");
    let output = run_with_input(&dir, "\n\n   \nexit\n");

    assert!(output.status.success());
    assert!(output.stderr.is_empty(), "blank input must not error");
}

#[test]
fn unknown_cli_argument_fails_fast() {
    let dir = make_temp_dir("session");
    let output = run_with_cli_args(&dir, &["--bogus"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown argument: --bogus"));
}

#[test]
fn missing_flag_value_fails_fast() {
    let dir = make_temp_dir("session");
    let output = run_with_cli_args(&dir, &["--data"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Missing value for --data"));
}
