use std::path::{Path, PathBuf};

use busbar_sf_metadata::{parse_list_log, resolve, to_tabbed_json};
use serde::Serialize;
use tracing::{info, instrument};

use super::{write_file, TaskRunner};
use crate::config::Target;
use crate::error::{Error, ErrorKind, Result};
use crate::options::{ListOptions, OutputFormat};
use crate::runner::AntRunner;
use crate::template::{BuildTemplate, Login};
use crate::workspace::Workspace;

#[derive(Serialize)]
struct ListBuild<'a> {
    login: Login,
    api_version: &'a str,
    metadata_type: &'a str,
    folder: Option<&'a str>,
    result_file_path: &'a Path,
    trace: bool,
}

impl<R: AntRunner> TaskRunner<R> {
    /// List the org's components of `metadata_type` into
    /// `result_file_path`.
    ///
    /// Registry keys, folder names and aliases are accepted for the type and
    /// passed to Ant as the XML type name; other names are passed through.
    #[instrument(skip(self, target), fields(target_name = %target.name))]
    pub async fn list(&self, target: &Target<ListOptions>) -> Result<PathBuf> {
        let options = &target.options;
        if options.metadata_type.is_empty() {
            return Err(Error::new(ErrorKind::Config(format!(
                "list target {} requires metadata_type",
                target.name
            ))));
        }
        let destination = options.result_file_path.as_deref().ok_or_else(|| {
            Error::new(ErrorKind::Config(format!(
                "list target {} requires result_file_path",
                target.name
            )))
        })?;
        let destination = self.resolve_path(destination);
        let metadata_type = resolve(&options.metadata_type).unwrap_or(options.metadata_type.as_str());

        info!("ListMetadata ({}) Target -> {}", metadata_type, target.name);

        let resolution = self.authenticate(&options.auth, &target.name)?;
        let workspace = Workspace::new()?;
        let result_log = workspace.result_log();
        write_file(&result_log, "")?;

        let build = ListBuild {
            login: (&resolution).into(),
            api_version: &options.api_version,
            metadata_type,
            folder: options.folder.as_deref().filter(|f| !f.is_empty()),
            result_file_path: &result_log,
            trace: options.trace,
        };
        self.write_build_file(&workspace, BuildTemplate::List, &build)?;
        self.run_ant(&workspace, "listMetadata", &target.name).await?;

        let log = std::fs::read_to_string(&result_log)?;
        let output = match options.format {
            OutputFormat::Log => log,
            OutputFormat::Json => to_tabbed_json(&parse_list_log(&log, metadata_type).grouped())?,
        };
        write_file(&destination, &output)?;
        Ok(destination)
    }
}
