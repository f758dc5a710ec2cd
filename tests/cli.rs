use assert_cmd::Command;
use predicates::prelude::*;

// None of these tests reach the network: they all stop before the
// first request is made.

#[test]
fn test_cli_help_command() {
    let mut cmd = Command::cargo_bin("ghrepos").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("SSH clone URL"));
}

#[test]
fn test_cli_version_command() {
    let mut cmd = Command::cargo_bin("ghrepos").unwrap();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ghrepos"));
}

#[test]
fn test_missing_username_prints_usage() {
    let mut cmd = Command::cargo_bin("ghrepos").unwrap();

    cmd.assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage: ghrepos <username>"));
}

#[test]
fn test_empty_username_prints_usage() {
    let mut cmd = Command::cargo_bin("ghrepos").unwrap();
    cmd.arg("");

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Usage: ghrepos <username>"));
}

#[test]
fn test_unknown_flag_is_a_usage_error() {
    let mut cmd = Command::cargo_bin("ghrepos").unwrap();
    cmd.arg("--no-such-flag");

    cmd.assert().code(1).stdout(predicate::str::is_empty());
}
