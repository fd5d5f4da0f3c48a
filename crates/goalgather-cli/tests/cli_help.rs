use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("goalgather")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("events"))
        .stdout(predicate::str::contains("live"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("--skip-welcome"));
}

#[test]
fn test_events_help_shows_filters() {
    cargo_bin_cmd!("goalgather")
        .args(["events", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--query"))
        .stdout(predicate::str::contains("--venue"))
        .stdout(predicate::str::contains("--league"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("goalgather")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1"));
}

#[test]
fn test_app_without_terminal_fails_with_hint() {
    let dir = tempfile::tempdir().unwrap();

    cargo_bin_cmd!("goalgather")
        .env("GOALGATHER_HOME", dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("interactive terminal"));
}
