use predicates::prelude::*;

use crate::common::{project, sf_ant};

#[test]
fn test_manifest_for_deploy_target() {
    let dir = project();
    sf_ant(dir.path())
        .args(["manifest", "dev"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <Package xmlns=\"http://soap.sforce.com/2006/04/metadata\">\n\
             \x20   <fullName>MyPkg</fullName>\n\
             \x20   <types>\n\
             \x20       <members>Foo</members>\n\
             \x20       <members>Bar</members>\n\
             \x20       <name>ApexClass</name>\n\
             \x20   </types>\n",
        ))
        .stdout(predicate::str::contains("<name>StaticResource</name>"))
        .stdout(predicate::str::contains("    <version>29.0</version>\n</Package>"));
}

#[test]
fn test_manifest_for_retrieve_target() {
    let dir = project();
    sf_ant(dir.path())
        .args(["manifest", "dev", "--task", "retrieve"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<members>Sales/Pipeline</members>"))
        .stdout(predicate::str::contains("<name>Report</name>"))
        .stdout(predicate::str::contains("<version>31.0</version>"));
}

#[test]
fn test_destructive_manifest() {
    let dir = project();
    sf_ant(dir.path())
        .args(["manifest", "dev", "--destructive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<!-- package.xml -->"))
        .stdout(predicate::str::contains("<!-- destructiveChanges.xml -->"))
        .stdout(predicate::str::contains("<name>ApexTrigger</name>"));
}

#[test]
fn test_unknown_type_fails() {
    let dir = project();
    sf_ant(dir.path())
        .args(["manifest", "broken"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("UnknownType is not a valid metadata type"));
}

#[test]
fn test_unknown_target_fails() {
    let dir = project();
    sf_ant(dir.path())
        .args(["manifest", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no deploy target named nope"));
}

#[test]
fn test_missing_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    sf_ant(dir.path())
        .args(["--config", "missing.toml", "manifest", "dev"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load missing.toml"));
}

#[test]
fn test_missing_credentials_fail_before_ant() {
    let dir = project();
    sf_ant(dir.path())
        .args(["--ant", "/nonexistent/ant", "deploy", "nocreds"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no username specified for nocreds"))
        .stderr(predicate::str::contains("no password specified for nocreds"))
        .stderr(predicate::str::contains("username/password error"));
}

#[test]
fn test_types_listing() {
    let dir = tempfile::tempdir().unwrap();
    sf_ant(dir.path())
        .arg("types")
        .assert()
        .success()
        .stdout(predicate::str::contains("apexclass"))
        .stdout(predicate::str::contains("ApexClass"))
        .stdout(predicate::str::contains("EmailTemplate"));
}
