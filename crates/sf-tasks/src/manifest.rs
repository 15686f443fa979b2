//! Manifest previews: what a target would write, without running Ant.

use std::fmt;

use busbar_sf_metadata::{
    build_package_xml, DestructiveManifests, DESTRUCTIVE_CHANGES_XML, PACKAGE_XML,
};

use crate::config::{ProjectConfig, Target, TaskKind};
use crate::error::{Error, ErrorKind, Result};
use crate::options::{DeployOptions, RetrieveOptions};

/// Manifests a target produces.
#[derive(Debug, Clone)]
pub enum ManifestPlan {
    /// `package.xml` of a deploy or retrieve target.
    Package(String),
    /// `package.xml` and `destructiveChanges.xml` of a destroy target.
    Destructive(DestructiveManifests),
}

impl fmt::Display for ManifestPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestPlan::Package(xml) => writeln!(f, "{}", xml),
            ManifestPlan::Destructive(manifests) => {
                writeln!(f, "<!-- {} -->", PACKAGE_XML)?;
                writeln!(f, "{}", manifests.package)?;
                writeln!(f, "<!-- {} -->", DESTRUCTIVE_CHANGES_XML)?;
                writeln!(f, "{}", manifests.destructive_changes)
            }
        }
    }
}

/// Build the manifests target `name` of `kind` would write.
pub fn plan(config: &ProjectConfig, kind: TaskKind, name: &str) -> Result<ManifestPlan> {
    match kind {
        TaskKind::Deploy => {
            let target: Target<DeployOptions> = config.target(kind, name)?;
            package(&target, &target.options.api_version)
        }
        TaskKind::Retrieve => {
            let target: Target<RetrieveOptions> = config.target(kind, name)?;
            package(&target, &target.options.api_version)
        }
        TaskKind::Destroy => {
            let target: Target<DeployOptions> = config.target(kind, name)?;
            Ok(ManifestPlan::Destructive(DestructiveManifests::build(
                &target.pkg,
                &target.options.api_version,
            )?))
        }
        TaskKind::Describe | TaskKind::List => Err(Error::new(ErrorKind::Config(format!(
            "{} targets have no package manifest",
            kind
        )))),
    }
}

fn package<T>(target: &Target<T>, api_version: &str) -> Result<ManifestPlan> {
    Ok(ManifestPlan::Package(build_package_xml(
        &target.pkg,
        target.pkg_name.as_deref(),
        api_version,
    )?))
}
