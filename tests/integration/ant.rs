//! Full task runs against a stand-in Ant executable.
#![cfg(unix)]

use predicates::prelude::*;

use crate::common::{fake_ant, project, sf_ant};

#[test]
fn test_deploy_runs_ant() {
    let dir = project();
    let ant = fake_ant(dir.path(), 0);

    sf_ant(dir.path())
        .arg("--ant")
        .arg(&ant)
        .args(["deploy", "dev"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Deploy Target -> dev"))
        .stderr(predicate::str::contains("User -> admin@example.com"))
        .stderr(predicate::str::contains("Starting ANT deploy..."))
        .stderr(predicate::str::contains("BUILD deploy"))
        .stderr(predicate::str::contains("deploy target dev successful"))
        .stderr(predicate::str::contains("secret").not());

    let package = std::fs::read_to_string(dir.path().join("src/package.xml")).unwrap();
    assert!(package.contains("<fullName>MyPkg</fullName>"));
}

#[test]
fn test_missing_password_warns_and_deploys() {
    let dir = project();
    let ant = fake_ant(dir.path(), 0);

    sf_ant(dir.path())
        .arg("--ant")
        .arg(&ant)
        .args(["deploy", "useronly"])
        .assert()
        .success()
        .stderr(predicate::str::contains("no password specified for useronly"))
        .stderr(predicate::str::contains("no username specified").not())
        .stderr(predicate::str::contains("User -> admin@example.com"))
        .stderr(predicate::str::contains("deploy target useronly successful"));
}

#[test]
fn test_verbose_logs_ant_command() {
    let dir = project();
    let ant = fake_ant(dir.path(), 0);

    sf_ant(dir.path())
        .env("SF_ANT_COMMAND", &ant)
        .args(["-v", "deploy", "dev"])
        .assert()
        .success()
        .stderr(predicate::str::contains("ANT CMD:"))
        .stderr(predicate::str::contains("-lib"));
}

#[test]
fn test_ant_failure_exits_non_zero() {
    let dir = project();
    let ant = fake_ant(dir.path(), 3);

    sf_ant(dir.path())
        .arg("--ant")
        .arg(&ant)
        .args(["destroy", "dev"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("deploy target dev failed (exit code 3)"));

    assert!(dir.path().join("build/destructiveChanges.xml").is_file());
}
