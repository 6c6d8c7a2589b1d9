use crate::common::{make_temp_dir, normalized_lines, read_log_contents, run_with_input};

#[test]
fn unknown_command_reports_error_and_continues() {
    let dir = make_temp_dir("commands");
    let output = run_with_input(&dir, "frobnicate\nexit\n");

    assert!(output.status.success());
    let stderr_lines = normalized_lines(&output.stderr);
    assert!(
        stderr_lines
            .iter()
            .any(|line| line.starts_with("Unknown command: frobnicate")),
        "stderr did not include the unknown-command error. stderr was: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    // The session kept going: exit still printed its goodbye.
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Goodbye"));
}

#[test]
fn add_then_list_shows_the_company_unconfirmed() {
    let dir = make_temp_dir("commands");
    let input = "add n/Acme Corp i/tech c/91234567 e/hr@acme.com\nlist companies\nexit\n";
    let output = run_with_input(&dir, input);

    assert!(output.status.success());
    let lines = normalized_lines(&output.stdout);
    assert!(lines.iter().any(|l| l.starts_with("Added Company(name='Acme Corp'")));
    assert!(lines.iter().any(|l| l == "COMPANIES"));
    let row = lines
        .iter()
        .find(|l| l.starts_with("1 ") && l.contains("Acme Corp"))
        .expect("company row missing from listing");
    assert!(row.contains("TECH"), "industry should be stored upper-cased");
    assert!(row.ends_with("no"), "new company should list as unconfirmed");
}

#[test]
fn malformed_add_is_rejected_without_ending_the_session() {
    let dir = make_temp_dir("commands");
    let input = "add n/Acme i/Tech c/123 e/hr@acme.com\nlist companies\nexit\n";
    let output = run_with_input(&dir, input);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Contact number must be exactly 8 digits"));
    let stdout_lines = normalized_lines(&output.stdout);
    assert!(
        stdout_lines.iter().any(|l| l == "No companies on the roster."),
        "rejected add must not reach the roster"
    );
}

#[test]
fn indexed_command_on_empty_roster_reports_empty_list() {
    let dir = make_temp_dir("commands");
    let output = run_with_input(&dir, "delete 3\nexit\n");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Nothing inside the company list."));
}

#[test]
fn confirm_moves_a_company_off_the_unconfirmed_listing() {
    let dir = make_temp_dir("commands");
    let input = "add n/Acme i/Tech c/91234567 e/hr@acme.com\n\
                 confirm 1\n\
                 list unconfirmed\n\
                 delete 1\n\
                 list companies\n\
                 exit\n";
    let output = run_with_input(&dir, input);

    assert!(output.status.success());
    let lines = normalized_lines(&output.stdout);
    assert!(lines.iter().any(|l| l == "Confirmed attendance for Acme."));
    assert!(lines.iter().any(|l| l == "No unconfirmed companies."));
    assert!(lines.iter().any(|l| l.starts_with("Deleted entry 1:")));
    assert!(lines.iter().any(|l| l == "No companies on the roster."));
}

#[test]
fn choose_venue_assigns_the_latest_company() {
    let dir = make_temp_dir("commands");
    let input = "load samples\n\
                 add n/Acme i/Tech c/91234567 e/hr@acme.com\n\
                 choose venue 1\n\
                 list venues\n\
                 exit\n";
    let output = run_with_input(&dir, input);

    assert!(output.status.success());
    let lines = normalized_lines(&output.stdout);
    assert!(lines.iter().any(|l| l == "Assigned venue 'Main Hall' to Acme."));
    let row = lines
        .iter()
        .find(|l| l.starts_with("1 ") && l.contains("Main Hall"))
        .expect("venue row missing from listing");
    assert!(row.ends_with("Acme"));
}

#[test]
fn find_industry_matches_regardless_of_case() {
    let dir = make_temp_dir("commands");
    let input = "add n/Acme i/Tech c/91234567 e/hr@acme.com\n\
                 find industry tech\n\
                 exit\n";
    let output = run_with_input(&dir, input);

    assert!(output.status.success());
    let lines = normalized_lines(&output.stdout);
    assert!(lines.iter().any(|l| l == "COMPANIES IN INDUSTRY 'TECH'"));
    assert!(lines.iter().any(|l| l.contains("Acme")));
}

#[test]
fn help_prints_the_command_guide() {
    let dir = make_temp_dir("commands");
    let output = run_with_input(&dir, "help\nexit\n");

    assert!(output.status.success());
    let lines = normalized_lines(&output.stdout);
    assert!(lines.iter().any(|l| l == "Commands:"));
    assert!(lines
        .iter()
        .any(|l| l.starts_with("add n/<name> i/<industry>")));
    assert!(lines
        .iter()
        .any(|l| l.starts_with("Indexes are 1-based")));
}

#[test]
fn executed_commands_are_written_to_the_session_log() {
    let dir = make_temp_dir("commands");
    let output = run_with_input(&dir, "help\nexit\n");
    assert!(output.status.success());

    let log = read_log_contents(&dir).expect("session log should exist");
    assert!(log.contains("Command run: help"));
    assert!(log.contains("Command run: exit"));
}

#[test]
fn parse_failures_are_logged_but_not_run() {
    let dir = make_temp_dir("commands");
    let output = run_with_input(&dir, "frobnicate\nexit\n");
    assert!(output.status.success());

    let log = read_log_contents(&dir).expect("session log should exist");
    assert!(log.contains("Unknown command: frobnicate"));
    assert!(!log.contains("Command run: frobnicate"));
}
