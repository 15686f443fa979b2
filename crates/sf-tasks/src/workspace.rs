//! Per-run scratch directory.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::Result;

/// Scratch directory for one task run.
///
/// Holds the rendered build file, the retrieve manifest and raw result
/// logs. The directory is deleted when the workspace is dropped, whether
/// the task succeeded or not.
#[derive(Debug)]
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Result<Self> {
        let dir = tempfile::Builder::new().prefix("sf-ant-").tempdir()?;
        std::fs::create_dir(dir.path().join("ant"))?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn build_file(&self) -> PathBuf {
        self.dir.path().join("ant").join("build.xml")
    }

    /// Manifest handed to the retrieve task.
    pub fn unpackaged(&self) -> PathBuf {
        self.dir.path().join(busbar_sf_metadata::PACKAGE_XML)
    }

    /// Raw describe/list output written by Ant.
    pub fn result_log(&self) -> PathBuf {
        self.dir.path().join("list.log")
    }
}
