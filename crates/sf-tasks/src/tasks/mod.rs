//! The Ant tasks: deploy, destroy, retrieve, describe and list.
//!
//! Every task run follows the same steps: resolve credentials, create a
//! scratch [`Workspace`], write manifests, render the build file, run Ant
//! and, for describe/list, convert the result log. The workspace is
//! removed when the run ends.

mod deploy;
mod describe;
mod destroy;
mod list;
mod retrieve;

use std::path::{Path, PathBuf};

use busbar_sf_auth::{
    resolve, AuthConfig, Environment, ProcessEnvironment, Resolution, PRODUCTION_LOGIN_URL,
};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::{AntSettings, ProjectConfig, TaskKind};
use crate::error::{Error, ErrorKind, Result};
use crate::runner::{AntInvocation, AntRunner, ProcessAntRunner};
use crate::template::{BuildTemplate, Templates};
use crate::workspace::Workspace;

/// Runs tasks against an [`AntRunner`].
pub struct TaskRunner<R = ProcessAntRunner> {
    runner: R,
    ant: AntSettings,
    base_dir: PathBuf,
    templates: Templates,
    env: Box<dyn Environment + Send + Sync>,
}

impl<R: std::fmt::Debug> std::fmt::Debug for TaskRunner<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskRunner")
            .field("runner", &self.runner)
            .field("ant", &self.ant)
            .field("base_dir", &self.base_dir)
            .finish_non_exhaustive()
    }
}

impl TaskRunner<ProcessAntRunner> {
    /// Runner that spawns the configured Ant executable.
    pub fn process(ant: AntSettings) -> Result<Self> {
        Self::new(ProcessAntRunner, ant)
    }
}

impl<R: AntRunner> TaskRunner<R> {
    /// Relative paths resolve against the current directory, which is
    /// also passed to Ant as `basedir`.
    pub fn new(runner: R, ant: AntSettings) -> Result<Self> {
        Ok(Self {
            runner,
            ant,
            base_dir: std::env::current_dir()?,
            templates: Templates::new()?,
            env: Box::new(ProcessEnvironment),
        })
    }

    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    /// Environment used for `use_env` credential overrides.
    pub fn with_env(mut self, env: impl Environment + Send + Sync + 'static) -> Self {
        self.env = Box::new(env);
        self
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Look up `name` under `kind` in `config` and run it.
    pub async fn run(&self, config: &ProjectConfig, kind: TaskKind, name: &str) -> Result<()> {
        match kind {
            TaskKind::Deploy => self.deploy(&config.target(kind, name)?).await,
            TaskKind::Destroy => self.destroy(&config.target(kind, name)?).await,
            TaskKind::Retrieve => self.retrieve(&config.target(kind, name)?).await,
            TaskKind::Describe => self.describe(&config.target(kind, name)?).await.map(|_| ()),
            TaskKind::List => self.list(&config.target(kind, name)?).await.map(|_| ()),
        }
    }

    fn authenticate(&self, auth: &AuthConfig, target: &str) -> Result<Resolution> {
        let config = auth.clone().with_default_serverurl(PRODUCTION_LOGIN_URL);
        match resolve(&config, target, &*self.env) {
            Ok(resolution) => {
                for warning in &resolution.warnings {
                    warn!("{}", warning);
                }
                if let Some(principal) = resolution.principal() {
                    info!("{}", principal);
                }
                Ok(resolution)
            }
            Err(err) => {
                for warning in err.warnings() {
                    warn!("{}", warning);
                }
                Err(err.into())
            }
        }
    }

    fn resolve_path(&self, path: &Path) -> PathBuf {
        self.base_dir.join(path)
    }

    fn write_build_file<T: Serialize>(
        &self,
        workspace: &Workspace,
        template: BuildTemplate,
        data: &T,
    ) -> Result<()> {
        let build = self.templates.render(template, data)?;
        write_file(&workspace.build_file(), &build)
    }

    async fn run_ant(&self, workspace: &Workspace, ant_target: &str, target: &str) -> Result<()> {
        let invocation = AntInvocation {
            command: self.ant.command.clone(),
            build_file: workspace.build_file(),
            lib_dir: self.resolve_path(&self.ant.lib_dir),
            base_dir: self.base_dir.clone(),
            target: ant_target.to_string(),
        };

        debug!("ANT CMD: {}", invocation.command_line());
        info!("Starting ANT {}...", ant_target);

        let output = self.runner.run(&invocation).await?;
        if !output.success() {
            return Err(Error::new(ErrorKind::AntFailed {
                task: ant_target.to_string(),
                target: target.to_string(),
                code: output.code,
            }));
        }

        info!("{} target {} successful", ant_target, target);
        Ok(())
    }
}

/// Write `contents` to `path`, creating missing parent directories.
fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;
    Ok(())
}
