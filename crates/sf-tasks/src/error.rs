//! Error types for sf-tasks.

/// Result type alias for sf-tasks operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for sf-tasks operations.
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
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Invalid or incomplete project configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Credential resolution failed.
    #[error("authentication error: {0}")]
    Auth(String),

    /// Manifest generation or result log handling failed.
    #[error("metadata error: {0}")]
    Metadata(String),

    /// A build file template failed to parse or render.
    #[error("template error: {0}")]
    Template(String),

    #[error("TOML error: {0}")]
    Toml(String),

    #[error("IO error: {0}")]
    Io(String),

    /// The Ant process could not be started.
    #[error("failed to start {command}: {message}")]
    AntSpawn { command: String, message: String },

    /// Ant exited with a non-zero status.
    #[error("{task} target {target} failed ({})", exit_status(.code))]
    AntFailed {
        task: String,
        target: String,
        code: Option<i32>,
    },
}

fn exit_status(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}

impl From<busbar_sf_auth::Error> for Error {
    fn from(err: busbar_sf_auth::Error) -> Self {
        Error::with_source(ErrorKind::Auth(err.to_string()), err)
    }
}

impl From<busbar_sf_metadata::Error> for Error {
    fn from(err: busbar_sf_metadata::Error) -> Self {
        Error::with_source(ErrorKind::Metadata(err.to_string()), err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::with_source(ErrorKind::Toml(err.to_string()), err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::with_source(ErrorKind::Io(err.to_string()), err)
    }
}

impl From<liquid::Error> for Error {
    fn from(err: liquid::Error) -> Self {
        Error::new(ErrorKind::Template(err.to_string()))
    }
}
