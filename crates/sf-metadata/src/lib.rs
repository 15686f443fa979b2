//! # busbar-sf-metadata
//!
//! Metadata types, package manifests and result logs for the Salesforce Ant
//! Migration Tool.
//!
//! ## Features
//!
//! - **Type Registry** - Static table of metadata types with folders and suffixes
//! - **Type Resolution** - Resolve type names, folder names and plural aliases
//! - **Package Manifests** - Build `package.xml` and destructive manifests
//! - **Result Logs** - Parse `describeMetadata` / `listMetadata` logs into JSON
//!
//! ## Example
//!
//! ```rust
//! use busbar_sf_metadata::{build_package_xml, resolve, PackageSpec};
//!
//! assert_eq!(resolve("classes"), Some("ApexClass"));
//!
//! let spec = PackageSpec::new()
//!     .add("ApexClass", vec!["Foo".to_string(), "Bar".to_string()])
//!     .add("staticresources", vec!["*".to_string()]);
//! let xml = build_package_xml(&spec, None, "29.0").unwrap();
//! assert!(xml.contains("<name>StaticResource</name>"));
//! ```

mod describe;
mod error;
mod list;
mod log;
mod package;
pub mod registry;
mod resolver;
mod types;

pub use describe::{parse_describe_log, DescribeMetadataResult};
pub use error::{Error, ErrorKind, Result};
pub use list::{parse_list_log, ListMetadataResult, MetadataComponent, UserRef};
pub use log::to_tabbed_json;
pub use package::{
    build_package_xml, DestructiveManifests, PackageManifest, PackageSpec, PackageTypeMembers,
    DESTRUCTIVE_CHANGES_XML, PACKAGE_NAMESPACE, PACKAGE_XML,
};
pub use registry::MetadataTypeEntry;
pub use resolver::{lookup, resolve};
pub use types::{TestLevel, DEFAULT_API_VERSION};
