//! # sf-auth
//!
//! Credential resolution for Salesforce Ant Migration Tool tasks.
//!
//! ## Security
//!
//! - Passwords, tokens and session ids are redacted in Debug output
//! - Error messages never include credential values
//! - Only the username or server url is meant to be logged ([`Principal`])
//!
//! ## Supported Credentials
//!
//! - **Username/Password** - optionally with a security token appended
//! - **Session** - session id and server url, given directly or taken from
//!   a session config (`{accessToken, instanceUrl}` or `{sid, server_url}`)
//! - **Environment** - `SFUSER`, `SFPASS`, `SFTOKEN`, `SFSESSIONID`,
//!   `SFSERVERURL` overrides when `use_env` is set
//!
//! ## Example
//!
//! ```rust
//! use busbar_sf_auth::{resolve, AuthConfig, Credentials, ProcessEnvironment};
//!
//! let config = AuthConfig::new()
//!     .with_login("admin@example.com", "password")
//!     .with_token("SECURITYTOKEN");
//!
//! let resolution = resolve(&config, "dev", &ProcessEnvironment).unwrap();
//! assert!(matches!(resolution.credentials, Credentials::UsernamePassword { .. }));
//! assert_eq!(resolution.principal().unwrap().to_string(), "User -> admin@example.com");
//! ```

mod config;
mod credentials;
mod env;
mod error;
mod resolve;

pub use config::{AuthConfig, SessionConfig};
pub use credentials::{AuthSettings, AuthWarning, Credentials, Principal};
pub use env::{Environment, ProcessEnvironment, SFPASS, SFSERVERURL, SFSESSIONID, SFTOKEN, SFUSER};
pub use error::{Error, ErrorKind, Result};
pub use resolve::{resolve, Resolution};

/// Default Salesforce login URL for production.
pub const PRODUCTION_LOGIN_URL: &str = "https://login.salesforce.com";
