use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub const PROJECT: &str = r#"
[options]
user = "admin@example.com"
pass = "secret"

[deploy.dev]
pkg_name = "MyPkg"

[deploy.dev.options]
root = "src"

[deploy.dev.pkg]
classes = ["Foo", "Bar"]
staticresources = ["*"]

[deploy.nocreds.options]
user = ""
pass = ""

[deploy.nocreds.pkg]
ApexClass = ["*"]

[deploy.useronly.options]
pass = ""

[deploy.useronly.pkg]
ApexClass = ["*"]

[deploy.broken.pkg]
UnknownType = ["X"]

[retrieve.dev.options]
api_version = "31.0"

[retrieve.dev.pkg]
reports = ["Sales/Pipeline"]

[destroy.dev.pkg]
ApexTrigger = ["OldTrigger"]
"#;

pub fn sf_ant(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("sf-ant").unwrap();
    cmd.current_dir(dir)
        .env_remove("SF_ANT_COMMAND")
        .env_remove("SF_ANT_LIB")
        .env_remove("RUST_LOG");
    cmd
}

/// A temp project directory holding `sf-ant.toml`.
pub fn project() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("sf-ant.toml"), PROJECT).unwrap();
    dir
}

/// A stand-in Ant executable that exits with `code`.
#[cfg(unix)]
pub fn fake_ant(dir: &Path, code: i32) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("fake-ant");
    std::fs::write(&path, format!("#!/bin/sh\necho \"BUILD $6\"\nexit {}\n", code)).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}
