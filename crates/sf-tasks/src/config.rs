//! Project configuration (`sf-ant.toml`).
//!
//! Options are layered, later layers winning key by key:
//! built-in defaults < `[options]` < `[<task>.options]` <
//! `[<task>.<target>.options]`. Top-level option keys are normalized to
//! snake_case before merging, so `apiVersion` in one layer and
//! `api_version` in another name the same option.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use busbar_sf_metadata::PackageSpec;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{Error, ErrorKind, Result};

/// Default project file name.
pub const CONFIG_FILE: &str = "sf-ant.toml";

/// The task families a target can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Deploy,
    Destroy,
    Retrieve,
    Describe,
    List,
}

impl TaskKind {
    /// Name of the task's section in the project file.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::Deploy => "deploy",
            TaskKind::Destroy => "destroy",
            TaskKind::Retrieve => "retrieve",
            TaskKind::Describe => "describe",
            TaskKind::List => "list",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the Ant executable is found.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AntSettings {
    /// Ant executable.
    pub command: String,
    /// Directory holding `ant-salesforce.jar`, passed as `-lib`.
    pub lib_dir: PathBuf,
}

impl Default for AntSettings {
    fn default() -> Self {
        Self {
            command: "ant".to_string(),
            lib_dir: PathBuf::from("deps"),
        }
    }
}

impl AntSettings {
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    pub fn with_lib_dir(mut self, lib_dir: impl Into<PathBuf>) -> Self {
        self.lib_dir = lib_dir.into();
        self
    }
}

/// A parsed project file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub ant: AntSettings,
    /// Options shared by every task.
    pub options: toml::Table,
    pub deploy: TaskSection,
    pub destroy: TaskSection,
    pub retrieve: TaskSection,
    pub describe: TaskSection,
    pub list: TaskSection,
}

/// One task's section: task-level options plus named targets.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TaskSection {
    pub options: toml::Table,
    #[serde(flatten)]
    pub targets: BTreeMap<String, TargetConfig>,
}

/// A named target as written in the project file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    pub options: toml::Table,
    pub pkg: PackageSpec,
    #[serde(alias = "pkgName")]
    pub pkg_name: Option<String>,
    pub tests: Vec<String>,
}

/// A target with its options merged and typed.
#[derive(Debug, Clone)]
pub struct Target<T> {
    pub name: String,
    pub options: T,
    pub pkg: PackageSpec,
    pub pkg_name: Option<String>,
    pub tests: Vec<String>,
}

impl ProjectConfig {
    /// Read and parse a project file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::with_source(
                ErrorKind::Config(format!("cannot read {}: {}", path.display(), e)),
                e,
            )
        })?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn section(&self, kind: TaskKind) -> &TaskSection {
        match kind {
            TaskKind::Deploy => &self.deploy,
            TaskKind::Destroy => &self.destroy,
            TaskKind::Retrieve => &self.retrieve,
            TaskKind::Describe => &self.describe,
            TaskKind::List => &self.list,
        }
    }

    /// Resolve `name` under `kind`, merging the option layers into `T`.
    pub fn target<T: DeserializeOwned>(&self, kind: TaskKind, name: &str) -> Result<Target<T>> {
        let section = self.section(kind);
        let target = section.targets.get(name).ok_or_else(|| {
            Error::new(ErrorKind::Config(format!(
                "no {} target named {}",
                kind, name
            )))
        })?;

        let mut merged = toml::Table::new();
        for layer in [&self.options, &section.options, &target.options] {
            merged.extend(layer.iter().map(|(k, v)| (snake_case(k), v.clone())));
        }

        let options = toml::Value::Table(merged).try_into::<T>().map_err(|e| {
            Error::with_source(
                ErrorKind::Config(format!("invalid options for {} target {}: {}", kind, name, e)),
                e,
            )
        })?;

        Ok(Target {
            name: name.to_string(),
            options,
            pkg: target.pkg.clone(),
            pkg_name: target.pkg_name.clone(),
            tests: target.tests.clone(),
        })
    }
}

fn snake_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
