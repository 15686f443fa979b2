//! # busbar-sf-ant
//!
//! Drive the Salesforce Ant Migration Tool from a TOML project file.
//!
//! ## Security
//!
//! - Passwords, tokens and session ids are redacted in Debug output
//! - Task spans skip credential parameters
//! - Error messages never include credential values
//!
//! ## Crates
//!
//! - **busbar-sf-auth** - Credential resolution: username/password, session, environment
//! - **busbar-sf-metadata** - Type registry, `package.xml` builder, result log parsing
//! - **busbar-sf-tasks** - Build file rendering, Ant execution, deploy/retrieve/describe/list
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use busbar_sf_ant::{ProjectConfig, TaskKind, TaskRunner};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ProjectConfig::load("sf-ant.toml")?;
//!     let runner = TaskRunner::process(config.ant.clone())?;
//!     runner.run(&config, TaskKind::Retrieve, "dev").await?;
//!     Ok(())
//! }
//! ```

// Re-export all crates for convenient access
pub use busbar_sf_auth as auth;
pub use busbar_sf_metadata as metadata;
pub use busbar_sf_tasks as tasks;

// Re-export commonly used types at the top level
pub use busbar_sf_auth::{AuthConfig, Credentials};
pub use busbar_sf_metadata::{build_package_xml, resolve, PackageSpec};
pub use busbar_sf_tasks::{ProjectConfig, TaskKind, TaskRunner};
