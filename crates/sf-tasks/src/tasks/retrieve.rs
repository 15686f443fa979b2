use std::path::Path;

use busbar_sf_metadata::{build_package_xml, PACKAGE_XML};
use serde::Serialize;
use tracing::{info, instrument, warn};

use super::{write_file, TaskRunner};
use crate::config::Target;
use crate::error::Result;
use crate::options::RetrieveOptions;
use crate::runner::AntRunner;
use crate::template::{BuildTemplate, Login};
use crate::workspace::Workspace;

#[derive(Serialize)]
struct RetrieveBuild<'a> {
    login: Login,
    api_version: &'a str,
    retrieve_target: &'a Path,
    unpackaged: &'a Path,
    unzip: bool,
    poll_wait_millis: u64,
    max_poll: u32,
}

impl<R: AntRunner> TaskRunner<R> {
    /// Retrieve the target's package into `retrieve_target`.
    ///
    /// The generated `package.xml` is written to the root and copied into
    /// the workspace for Ant. With `existing_package`, the root's own
    /// `package.xml` is copied instead; when there is none a warning is
    /// logged and Ant runs anyway.
    #[instrument(skip(self, target), fields(target_name = %target.name))]
    pub async fn retrieve(&self, target: &Target<RetrieveOptions>) -> Result<()> {
        info!("Retrieve Target -> {}", target.name);

        let options = &target.options;
        let resolution = self.authenticate(&options.auth, &target.name)?;
        let workspace = Workspace::new()?;
        let root = self.resolve_path(&options.root);
        let retrieve_target = self.resolve_path(options.retrieve_target());
        let unpackaged = workspace.unpackaged();
        let root_package = root.join(PACKAGE_XML);

        if !options.existing_package {
            let package = build_package_xml(
                &target.pkg,
                target.pkg_name.as_deref(),
                &options.api_version,
            )?;
            write_file(&root_package, &package)?;
            std::fs::copy(&root_package, &unpackaged)?;
        } else if root_package.is_file() {
            std::fs::copy(&root_package, &unpackaged)?;
        } else {
            warn!("No package.xml file found in {}", root.display());
        }

        std::fs::create_dir_all(&retrieve_target)?;

        let build = RetrieveBuild {
            login: (&resolution).into(),
            api_version: &options.api_version,
            retrieve_target: &retrieve_target,
            unpackaged: &unpackaged,
            unzip: options.unzip,
            poll_wait_millis: options.poll_wait_millis,
            max_poll: options.max_poll,
        };
        self.write_build_file(&workspace, BuildTemplate::Retrieve, &build)?;
        self.run_ant(&workspace, "retrieve", &target.name).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{attribute, workspace_removed, FakeAnt};
    use super::*;
    use crate::config::{AntSettings, ProjectConfig, TaskKind};
    use std::collections::HashMap;

    const PROJECT: &str = r#"
        [retrieve.options]
        user = "u"
        pass = "p"
        root = "metadata"

        [retrieve.all.pkg]
        pages = ["*"]

        [retrieve.elsewhere.options]
        retrieveTarget = "out"
        unzip = false

        [retrieve.elsewhere.pkg]
        triggers = ["*"]

        [retrieve.existing.options]
        existingPackage = true
    "#;

    fn runner(base_dir: &Path) -> TaskRunner<FakeAnt> {
        TaskRunner::new(FakeAnt::default(), AntSettings::default())
            .unwrap()
            .with_base_dir(base_dir)
            .with_env(HashMap::<String, String>::new())
    }

    fn target(name: &str) -> Target<RetrieveOptions> {
        ProjectConfig::from_toml(PROJECT)
            .unwrap()
            .target(TaskKind::Retrieve, name)
            .unwrap()
    }

    #[tokio::test]
    async fn test_retrieve_hands_manifest_to_ant() {
        let dir = tempfile::tempdir().unwrap();
        let runner = runner(dir.path());
        runner.retrieve(&target("all")).await.unwrap();

        let written = std::fs::read_to_string(dir.path().join("metadata/package.xml")).unwrap();
        assert!(written.contains("<name>ApexPage</name>"));

        let calls = runner.runner().calls();
        let call = &calls[0];
        assert_eq!(call.invocation.target, "retrieve");
        assert_eq!(call.unpackaged.as_deref(), Some(written.as_str()));
        assert_eq!(
            attribute(&call.build_xml, "retrieveTarget"),
            Some(dir.path().join("metadata").display().to_string())
        );
        assert_eq!(attribute(&call.build_xml, "unzip").as_deref(), Some("true"));
        assert!(workspace_removed(call));
    }

    #[tokio::test]
    async fn test_retrieve_target_option() {
        let dir = tempfile::tempdir().unwrap();
        let runner = runner(dir.path());
        runner.retrieve(&target("elsewhere")).await.unwrap();

        let calls = runner.runner().calls();
        let call = &calls[0];
        assert_eq!(
            attribute(&call.build_xml, "retrieveTarget"),
            Some(dir.path().join("out").display().to_string())
        );
        assert_eq!(attribute(&call.build_xml, "unzip").as_deref(), Some("false"));
        assert!(dir.path().join("out").is_dir());
    }

    #[tokio::test]
    async fn test_existing_package_copied() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("metadata")).unwrap();
        std::fs::write(dir.path().join("metadata/package.xml"), "<Package/>").unwrap();

        let runner = runner(dir.path());
        runner.retrieve(&target("existing")).await.unwrap();

        let calls = runner.runner().calls();
        let call = &calls[0];
        assert_eq!(call.unpackaged.as_deref(), Some("<Package/>"));
    }

    #[tokio::test]
    async fn test_existing_package_missing_still_runs() {
        let dir = tempfile::tempdir().unwrap();
        let runner = runner(dir.path());
        runner.retrieve(&target("existing")).await.unwrap();

        let calls = runner.runner().calls();
        let call = &calls[0];
        assert!(call.unpackaged.is_none());
        assert!(!dir.path().join("metadata/package.xml").exists());
    }
}
