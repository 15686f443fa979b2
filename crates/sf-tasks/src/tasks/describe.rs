use std::path::{Path, PathBuf};

use busbar_sf_metadata::{parse_describe_log, to_tabbed_json};
use serde::Serialize;
use tracing::{info, instrument};

use super::{write_file, TaskRunner};
use crate::config::Target;
use crate::error::{Error, ErrorKind, Result};
use crate::options::{DescribeOptions, OutputFormat};
use crate::runner::AntRunner;
use crate::template::{BuildTemplate, Login};
use crate::workspace::Workspace;

#[derive(Serialize)]
struct DescribeBuild<'a> {
    login: Login,
    api_version: &'a str,
    result_file_path: &'a Path,
    trace: bool,
}

impl<R: AntRunner> TaskRunner<R> {
    /// Describe the org's metadata types into `result_file_path`.
    ///
    /// Returns the path of the written result.
    #[instrument(skip(self, target), fields(target_name = %target.name))]
    pub async fn describe(&self, target: &Target<DescribeOptions>) -> Result<PathBuf> {
        let options = &target.options;
        let destination = options.result_file_path.as_deref().ok_or_else(|| {
            Error::new(ErrorKind::Config(format!(
                "describe target {} requires result_file_path",
                target.name
            )))
        })?;
        let destination = self.resolve_path(destination);

        info!("Describe Target -> {}", target.name);

        let resolution = self.authenticate(&options.auth, &target.name)?;
        let workspace = Workspace::new()?;
        let result_log = workspace.result_log();
        write_file(&result_log, "")?;

        let build = DescribeBuild {
            login: (&resolution).into(),
            api_version: &options.api_version,
            result_file_path: &result_log,
            trace: options.trace,
        };
        self.write_build_file(&workspace, BuildTemplate::Describe, &build)?;
        self.run_ant(&workspace, "describe", &target.name).await?;

        let log = std::fs::read_to_string(&result_log)?;
        let output = match options.format {
            OutputFormat::Log => log,
            OutputFormat::Json => to_tabbed_json(&parse_describe_log(&log))?,
        };
        write_file(&destination, &output)?;
        Ok(destination)
    }
}
