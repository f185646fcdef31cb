use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn dexview() -> Command {
    Command::cargo_bin("dexview").unwrap()
}

#[test]
fn test_main_help_lists_commands() {
    dexview()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("browse"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_list_help_documents_filters() {
    dexview()
        .args(["list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--page"))
        .stdout(predicate::str::contains("--search"))
        .stdout(predicate::str::contains("--type"));
}

#[test]
fn test_page_zero_rejected_by_parser() {
    dexview()
        .args(["list", "--page", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--page"));
}

#[test]
fn test_unknown_format_rejected() {
    dexview()
        .args(["--format", "yaml", "config", "show"])
        .assert()
        .failure();
}
