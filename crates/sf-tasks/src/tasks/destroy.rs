use busbar_sf_metadata::{DestructiveManifests, DESTRUCTIVE_CHANGES_XML, PACKAGE_XML};
use tracing::{info, instrument};

use super::deploy::DeployBuild;
use super::{write_file, TaskRunner};
use crate::config::Target;
use crate::error::Result;
use crate::options::DeployOptions;
use crate::runner::AntRunner;
use crate::template::BuildTemplate;
use crate::workspace::Workspace;

impl<R: AntRunner> TaskRunner<R> {
    /// Delete the target's `pkg` components from the org.
    ///
    /// Writes an empty `package.xml` and a `destructiveChanges.xml` listing
    /// the components to the root, then runs the Ant deploy target.
    #[instrument(skip(self, target), fields(target_name = %target.name))]
    pub async fn destroy(&self, target: &Target<DeployOptions>) -> Result<()> {
        info!("Destroy Target -> {}", target.name);

        let options = &target.options;
        let resolution = self.authenticate(&options.auth, &target.name)?;
        let workspace = Workspace::new()?;
        let root = self.resolve_path(&options.root);

        let manifests = DestructiveManifests::build(&target.pkg, &options.api_version)?;
        write_file(&root.join(PACKAGE_XML), &manifests.package)?;
        write_file(&root.join(DESTRUCTIVE_CHANGES_XML), &manifests.destructive_changes)?;

        let build = DeployBuild::new(&resolution, &root, options, &target.tests);
        self.write_build_file(&workspace, BuildTemplate::Deploy, &build)?;
        self.run_ant(&workspace, "deploy", &target.name).await
    }
}
