//! CLI-level tests for post-dr-comment
//!
//! These exercise argument handling and early failure paths only; nothing
//! here talks to a Hub.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("post-dr-comment").unwrap();
    cmd.env_remove("ALLSPICE_AUTH_TOKEN");
    cmd
}

#[test]
fn missing_required_args_fails() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--repository"));
}

#[test]
fn missing_token_fails() {
    cmd()
        .args([
            "--repository",
            "acme/widgets",
            "--design-review-number",
            "1",
            "--comment-path",
            "status.md",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--auth-token"));
}

#[test]
fn help_describes_the_tool() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Design Review"));
}

#[test]
fn rejects_bad_boolean() {
    cmd()
        .args([
            "--repository",
            "acme/widgets",
            "--design-review-number",
            "1",
            "--comment-path",
            "status.md",
            "--auth-token",
            "t",
            "--reuse-existing-comment",
            "maybe",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("One of: yes, no, true"));
}

#[test]
fn accepts_boolean_value_for_reuse_flag() {
    // "false" must get past argument parsing; the run then fails on the
    // missing comment file, proving the create path was reachable.
    cmd()
        .args([
            "--repository",
            "acme/widgets",
            "--design-review-number",
            "1",
            "--comment-path",
            "does-not-exist.md",
            "--auth-token",
            "t",
            "--reuse-existing-comment",
            "false",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read comment file"));
}

#[test]
fn rejects_malformed_repository() {
    cmd()
        .args([
            "--repository",
            "no-slash-here",
            "--design-review-number",
            "1",
            "--comment-path",
            "status.md",
            "--auth-token",
            "t",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid repository"));
}
