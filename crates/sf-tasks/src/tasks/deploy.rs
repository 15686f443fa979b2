use std::path::Path;

use busbar_sf_auth::Resolution;
use busbar_sf_metadata::{build_package_xml, PACKAGE_XML};
use serde::Serialize;
use tracing::{info, instrument};

use super::{write_file, TaskRunner};
use crate::config::Target;
use crate::error::Result;
use crate::options::DeployOptions;
use crate::runner::AntRunner;
use crate::template::{BuildTemplate, Login};
use crate::workspace::Workspace;

/// Globals of `deploy.build.xml`, shared with destroy.
#[derive(Serialize)]
pub(super) struct DeployBuild<'a> {
    login: Login,
    root: &'a Path,
    poll_wait_millis: u64,
    max_poll: u32,
    check_only: bool,
    run_all_tests: bool,
    rollback_on_error: bool,
    test_level: Option<String>,
    tests: &'a [String],
}

impl<'a> DeployBuild<'a> {
    pub(super) fn new(
        resolution: &Resolution,
        root: &'a Path,
        options: &DeployOptions,
        tests: &'a [String],
    ) -> Self {
        Self {
            login: Login::from(resolution),
            root,
            poll_wait_millis: options.poll_wait_millis,
            max_poll: options.max_poll,
            check_only: options.check_only,
            run_all_tests: options.run_all_tests,
            rollback_on_error: options.rollback_on_error,
            test_level: options.test_level.map(|level| level.to_string()),
            tests,
        }
    }
}

impl<R: AntRunner> TaskRunner<R> {
    /// Deploy the target's package from its root directory.
    ///
    /// Unless `existing_package` is set, `package.xml` is generated from
    /// the target's `pkg` and written to the root first.
    #[instrument(skip(self, target), fields(target_name = %target.name))]
    pub async fn deploy(&self, target: &Target<DeployOptions>) -> Result<()> {
        info!("Deploy Target -> {}", target.name);

        let options = &target.options;
        let resolution = self.authenticate(&options.auth, &target.name)?;
        let workspace = Workspace::new()?;
        let root = self.resolve_path(&options.root);

        if !options.existing_package {
            let package = build_package_xml(
                &target.pkg,
                target.pkg_name.as_deref(),
                &options.api_version,
            )?;
            write_file(&root.join(PACKAGE_XML), &package)?;
        }

        let build = DeployBuild::new(&resolution, &root, options, &target.tests);
        self.write_build_file(&workspace, BuildTemplate::Deploy, &build)?;
        self.run_ant(&workspace, "deploy", &target.name).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{attribute, workspace_removed, FakeAnt};
    use super::*;
    use crate::config::{AntSettings, ProjectConfig, TaskKind};
    use crate::error::ErrorKind;
    use std::collections::HashMap;

    const PROJECT: &str = r#"
        [options]
        user = "admin@example.com"
        pass = "secret"
        token = "TOKEN"

        [deploy.dev]
        pkg_name = "MyPkg"
        tests = ["FooTest", "BarTest"]

        [deploy.dev.options]
        root = "src"
        testLevel = "RunSpecifiedTests"

        [deploy.dev.pkg]
        ApexClass = ["Foo", "Bar"]

        [deploy.existing.options]
        root = "src"
        existing_package = true

        [deploy.broken.pkg]
        NotAType = ["X"]
    "#;

    fn runner(ant: FakeAnt, base_dir: &Path) -> TaskRunner<FakeAnt> {
        TaskRunner::new(ant, AntSettings::default())
            .unwrap()
            .with_base_dir(base_dir)
            .with_env(HashMap::<String, String>::new())
    }

    fn target(name: &str) -> Target<DeployOptions> {
        ProjectConfig::from_toml(PROJECT)
            .unwrap()
            .target(TaskKind::Deploy, name)
            .unwrap()
    }

    #[tokio::test]
    async fn test_deploy_writes_package_and_build_file() {
        let dir = tempfile::tempdir().unwrap();
        let runner = runner(FakeAnt::default(), dir.path());
        runner.deploy(&target("dev")).await.unwrap();

        let package = std::fs::read_to_string(dir.path().join("src/package.xml")).unwrap();
        assert!(package.contains("    <fullName>MyPkg</fullName>"));
        assert!(package.contains("        <members>Foo</members>\n        <members>Bar</members>"));
        assert!(package.contains("<name>ApexClass</name>"));

        let calls = runner.runner().calls();
        assert_eq!(calls.len(), 1);
        let xml = &calls[0].build_xml;
        assert!(xml.contains("<sf:deploy"));
        assert_eq!(attribute(xml, "username").as_deref(), Some("admin@example.com"));
        assert_eq!(attribute(xml, "password").as_deref(), Some("secretTOKEN"));
        assert_eq!(
            attribute(xml, "deployRoot"),
            Some(dir.path().join("src").display().to_string())
        );
        assert_eq!(attribute(xml, "rollbackOnError").as_deref(), Some("true"));
        assert_eq!(attribute(xml, "testLevel").as_deref(), Some("RunSpecifiedTests"));
        assert!(xml.contains("<runTest>FooTest</runTest>"));
        assert!(xml.contains("<runTest>BarTest</runTest>"));
        assert!(workspace_removed(&calls[0]));
    }

    #[tokio::test]
    async fn test_existing_package_is_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("src")).unwrap();
        std::fs::write(dir.path().join("src/package.xml"), "mine").unwrap();

        let runner = runner(FakeAnt::default(), dir.path());
        runner.deploy(&target("existing")).await.unwrap();

        let package = std::fs::read_to_string(dir.path().join("src/package.xml")).unwrap();
        assert_eq!(package, "mine");
        let calls = runner.runner().calls();
        let xml = &calls[0].build_xml;
        assert!(!xml.contains("testLevel"));
        assert!(!xml.contains("<runTest>"));
    }

    #[tokio::test]
    async fn test_unknown_type_fails_before_ant() {
        let dir = tempfile::tempdir().unwrap();
        let runner = runner(FakeAnt::default(), dir.path());
        let err = runner.deploy(&target("broken")).await.unwrap_err();

        assert!(matches!(err.kind, ErrorKind::Metadata(_)));
        assert!(err.to_string().contains("NotAType is not a valid metadata type"));
        assert!(runner.runner().calls().is_empty());
    }

    #[tokio::test]
    async fn test_ant_failure_is_fatal_and_cleans_up() {
        let dir = tempfile::tempdir().unwrap();
        let runner = runner(FakeAnt::failing(1), dir.path());
        let err = runner.deploy(&target("dev")).await.unwrap_err();

        assert!(matches!(
            err.kind,
            ErrorKind::AntFailed { code: Some(1), .. }
        ));
        assert!(workspace_removed(&runner.runner().calls()[0]));
    }

    #[tokio::test]
    async fn test_missing_credentials() {
        let dir = tempfile::tempdir().unwrap();
        let runner = runner(FakeAnt::default(), dir.path());
        let target = Target {
            options: DeployOptions::default(),
            ..target("dev")
        };
        let err = runner.deploy(&target).await.unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Auth(_)));
        assert!(runner.runner().calls().is_empty());
    }
}
