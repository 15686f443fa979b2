//! Typed option bags for each task.
//!
//! Every struct implements [`Default`] with the built-in defaults and is
//! deserialized with `serde(default)`, so a merged option table only needs
//! to carry the values that differ. Field names follow the Ant attribute
//! names in snake_case; the camelCase spellings are accepted as aliases.

use std::path::PathBuf;

use busbar_sf_auth::AuthConfig;
use busbar_sf_metadata::{TestLevel, DEFAULT_API_VERSION};
use serde::Deserialize;

/// Default deploy root and retrieve target.
pub const DEFAULT_ROOT: &str = "./build";
/// Default delay between deploy/retrieve status polls.
pub const DEFAULT_POLL_WAIT_MILLIS: u64 = 10_000;
/// Default number of status polls before Ant gives up.
pub const DEFAULT_MAX_POLL: u32 = 20;

/// Options for `deploy` and `destroy`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DeployOptions {
    #[serde(flatten)]
    pub auth: AuthConfig,
    pub root: PathBuf,
    #[serde(alias = "apiVersion")]
    pub api_version: String,
    #[serde(alias = "pollWaitMillis")]
    pub poll_wait_millis: u64,
    #[serde(alias = "maxPoll")]
    pub max_poll: u32,
    #[serde(alias = "checkOnly")]
    pub check_only: bool,
    #[serde(alias = "runAllTests")]
    pub run_all_tests: bool,
    #[serde(alias = "rollbackOnError")]
    pub rollback_on_error: bool,
    #[serde(alias = "testLevel")]
    pub test_level: Option<TestLevel>,
    /// Deploy the `package.xml` already present in `root`.
    #[serde(alias = "existingPackage")]
    pub existing_package: bool,
}

impl Default for DeployOptions {
    fn default() -> Self {
        Self {
            auth: AuthConfig::default(),
            root: PathBuf::from(DEFAULT_ROOT),
            api_version: DEFAULT_API_VERSION.to_string(),
            poll_wait_millis: DEFAULT_POLL_WAIT_MILLIS,
            max_poll: DEFAULT_MAX_POLL,
            check_only: false,
            run_all_tests: false,
            rollback_on_error: true,
            test_level: None,
            existing_package: false,
        }
    }
}

/// Options for `retrieve`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RetrieveOptions {
    #[serde(flatten)]
    pub auth: AuthConfig,
    pub root: PathBuf,
    #[serde(alias = "apiVersion")]
    pub api_version: String,
    /// Where retrieved files are written; `root` when unset.
    #[serde(alias = "retrieveTarget")]
    pub retrieve_target: Option<PathBuf>,
    pub unzip: bool,
    #[serde(alias = "pollWaitMillis")]
    pub poll_wait_millis: u64,
    #[serde(alias = "maxPoll")]
    pub max_poll: u32,
    /// Retrieve with the `package.xml` already present in `root`.
    #[serde(alias = "existingPackage")]
    pub existing_package: bool,
}

impl Default for RetrieveOptions {
    fn default() -> Self {
        Self {
            auth: AuthConfig::default(),
            root: PathBuf::from(DEFAULT_ROOT),
            api_version: DEFAULT_API_VERSION.to_string(),
            retrieve_target: None,
            unzip: true,
            poll_wait_millis: DEFAULT_POLL_WAIT_MILLIS,
            max_poll: DEFAULT_MAX_POLL,
            existing_package: false,
        }
    }
}

impl RetrieveOptions {
    pub fn retrieve_target(&self) -> &std::path::Path {
        self.retrieve_target.as_deref().unwrap_or(&self.root)
    }
}

/// Output format of describe and list results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Ant's raw result log.
    #[default]
    Log,
    /// Parsed records as tab-indented JSON.
    Json,
}

/// Options for `describe`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DescribeOptions {
    #[serde(flatten)]
    pub auth: AuthConfig,
    #[serde(alias = "apiVersion")]
    pub api_version: String,
    #[serde(alias = "resultFilePath")]
    pub result_file_path: Option<PathBuf>,
    pub format: OutputFormat,
    pub trace: bool,
}

impl Default for DescribeOptions {
    fn default() -> Self {
        Self {
            auth: AuthConfig::default(),
            api_version: DEFAULT_API_VERSION.to_string(),
            result_file_path: None,
            format: OutputFormat::Log,
            trace: false,
        }
    }
}

/// Options for `list`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ListOptions {
    #[serde(flatten)]
    pub auth: AuthConfig,
    #[serde(alias = "apiVersion")]
    pub api_version: String,
    #[serde(alias = "metadataType")]
    pub metadata_type: String,
    pub folder: Option<String>,
    #[serde(alias = "resultFilePath")]
    pub result_file_path: Option<PathBuf>,
    pub format: OutputFormat,
    pub trace: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            auth: AuthConfig::default(),
            api_version: DEFAULT_API_VERSION.to_string(),
            metadata_type: String::new(),
            folder: None,
            result_file_path: None,
            format: OutputFormat::Log,
            trace: false,
        }
    }
}
