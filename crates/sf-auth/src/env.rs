//! Environment variable access.

use std::collections::HashMap;

/// Username environment variable.
pub const SFUSER: &str = "SFUSER";
/// Password environment variable.
pub const SFPASS: &str = "SFPASS";
/// Security token environment variable.
pub const SFTOKEN: &str = "SFTOKEN";
/// Session id environment variable.
pub const SFSESSIONID: &str = "SFSESSIONID";
/// Server url environment variable.
pub const SFSERVERURL: &str = "SFSERVERURL";

/// Source of environment variables.
///
/// Resolution reads the environment through this trait so it can run
/// against a fixed map instead of the process environment.
pub trait Environment {
    /// Value of `key`, or `None` when unset.
    fn var(&self, key: &str) -> Option<String>;
}

/// The current process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}
