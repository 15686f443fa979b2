//! Ant build file templates.
//!
//! The templates are embedded at compile time from `templates/` and
//! rendered with liquid. Credential values and paths are XML-escaped by
//! the templates themselves.

use busbar_sf_auth::{Credentials, Resolution};
use include_dir::{include_dir, Dir};
use liquid::ParserBuilder;
use serde::Serialize;

use crate::error::{Error, ErrorKind, Result};

static TEMPLATES: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// The build files shipped with the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildTemplate {
    Deploy,
    Retrieve,
    Describe,
    List,
}

impl BuildTemplate {
    pub fn file_name(&self) -> &'static str {
        match self {
            BuildTemplate::Deploy => "deploy.build.xml",
            BuildTemplate::Retrieve => "retrieve.build.xml",
            BuildTemplate::Describe => "describe.build.xml",
            BuildTemplate::List => "list.build.xml",
        }
    }
}

/// Liquid parser for the embedded build files.
pub struct Templates {
    parser: liquid::Parser,
}

impl std::fmt::Debug for Templates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Templates").finish_non_exhaustive()
    }
}

impl Templates {
    pub fn new() -> Result<Self> {
        Ok(Self {
            parser: ParserBuilder::with_stdlib().build()?,
        })
    }

    /// Render `template` with the fields of `data` as globals.
    pub fn render<T: Serialize>(&self, template: BuildTemplate, data: &T) -> Result<String> {
        let file = TEMPLATES.get_file(template.file_name()).ok_or_else(|| {
            Error::new(ErrorKind::Template(format!(
                "template not found: {}",
                template.file_name()
            )))
        })?;
        let content = file.contents_utf8().ok_or_else(|| {
            Error::new(ErrorKind::Template(format!(
                "template is not valid UTF-8: {}",
                template.file_name()
            )))
        })?;

        let globals = liquid::to_object(data)?;
        Ok(self.parser.parse(content)?.render(&globals)?)
    }
}

/// Login attributes of a build file.
///
/// Exactly one of `sessionid` and `user`/`pass` is set, matching the
/// resolved credentials.
#[derive(Clone, Default, Serialize)]
pub struct Login {
    pub user: Option<String>,
    pub pass: Option<String>,
    pub sessionid: Option<String>,
    pub serverurl: Option<String>,
}

impl std::fmt::Debug for Login {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Login")
            .field("user", &self.user)
            .field("pass", &self.pass.as_ref().map(|_| "[REDACTED]"))
            .field("sessionid", &self.sessionid.as_ref().map(|_| "[REDACTED]"))
            .field("serverurl", &self.serverurl)
            .finish()
    }
}

impl From<&Resolution> for Login {
    fn from(resolution: &Resolution) -> Self {
        match &resolution.credentials {
            Credentials::Session {
                session_id,
                server_url,
            } => Login {
                sessionid: Some(session_id.clone()),
                serverurl: Some(server_url.clone()),
                ..Login::default()
            },
            Credentials::UsernamePassword { username, password } => Login {
                user: username.clone(),
                pass: password.clone(),
                sessionid: None,
                serverurl: resolution.settings.serverurl.clone(),
            },
        }
    }
}
