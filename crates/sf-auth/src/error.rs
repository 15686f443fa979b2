//! Error types for sf-auth.
//!
//! Error messages are designed to avoid exposing sensitive credential data.

use crate::credentials::AuthWarning;

/// Result type alias for sf-auth operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for sf-auth operations.
///
/// Error messages never include passwords, tokens or session ids.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Warnings collected before validation failed.
    pub fn warnings(&self) -> &[AuthWarning] {
        match &self.kind {
            ErrorKind::UsernamePassword { warnings, .. } => warnings,
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// No complete session id/server url pair, and neither a username
    /// nor a password.
    #[error("username/password error")]
    UsernamePassword {
        /// Target the credentials were resolved for.
        target: String,
        /// Missing-value warnings raised during validation.
        warnings: Vec<AuthWarning>,
    },
}
