//! # busbar-sf-tasks
//!
//! Runs Salesforce Ant Migration Tool tasks from a project file.
//!
//! ## Tasks
//!
//! - **deploy** - generate `package.xml` in the root and deploy it
//! - **destroy** - generate `destructiveChanges.xml` and deploy it
//! - **retrieve** - retrieve a generated or existing manifest
//! - **describe** - describe the org's metadata types as a log or JSON
//! - **list** - list the components of one metadata type as a log or JSON
//!
//! Each run renders an Ant build file into a scratch directory, runs Ant
//! through an [`AntRunner`] and removes the scratch directory afterwards.
//!
//! ## Example
//!
//! ```rust,no_run
//! use busbar_sf_tasks::{ProjectConfig, TaskKind, TaskRunner};
//!
//! # async fn example() -> busbar_sf_tasks::Result<()> {
//! let config = ProjectConfig::load("sf-ant.toml")?;
//! let runner = TaskRunner::process(config.ant.clone())?;
//! runner.run(&config, TaskKind::Deploy, "dev").await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod manifest;
mod options;
mod runner;
mod tasks;
mod template;
mod workspace;

pub use config::{
    AntSettings, ProjectConfig, Target, TargetConfig, TaskKind, TaskSection, CONFIG_FILE,
};
pub use error::{Error, ErrorKind, Result};
pub use manifest::{plan, ManifestPlan};
pub use options::{
    DeployOptions, DescribeOptions, ListOptions, OutputFormat, RetrieveOptions,
    DEFAULT_MAX_POLL, DEFAULT_POLL_WAIT_MILLIS, DEFAULT_ROOT,
};
pub use runner::{AntInvocation, AntOutput, AntRunner, ProcessAntRunner};
pub use tasks::TaskRunner;
pub use template::{BuildTemplate, Login, Templates};
pub use workspace::Workspace;
