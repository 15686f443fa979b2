//! Authentication settings as they appear in task configuration.

use serde::Deserialize;

/// Authentication fields of a task option bag.
///
/// Field names follow the Ant task attributes; the camelCase spellings
/// `useEnv` and `sessionConfig` are accepted too. Sensitive fields are
/// redacted in Debug output.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub user: Option<String>,
    pub pass: Option<String>,
    pub token: Option<String>,
    pub sessionid: Option<String>,
    pub serverurl: Option<String>,
    #[serde(alias = "useEnv")]
    pub use_env: bool,
    #[serde(alias = "sessionConfig")]
    pub session_config: Option<SessionConfig>,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("user", &self.user)
            .field("pass", &self.pass.as_ref().map(|_| "[REDACTED]"))
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("sessionid", &self.sessionid.as_ref().map(|_| "[REDACTED]"))
            .field("serverurl", &self.serverurl)
            .field("use_env", &self.use_env)
            .field("session_config", &self.session_config)
            .finish()
    }
}

impl AuthConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set username and password.
    pub fn with_login(mut self, user: impl Into<String>, pass: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self.pass = Some(pass.into());
        self
    }

    /// Set the security token appended to the password.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set session id and server url.
    pub fn with_session(mut self, sessionid: impl Into<String>, serverurl: impl Into<String>) -> Self {
        self.sessionid = Some(sessionid.into());
        self.serverurl = Some(serverurl.into());
        self
    }

    /// Set the server url.
    pub fn with_serverurl(mut self, serverurl: impl Into<String>) -> Self {
        self.serverurl = Some(serverurl.into());
        self
    }

    /// Set the server url unless one is already configured.
    pub fn with_default_serverurl(mut self, serverurl: impl Into<String>) -> Self {
        if self.serverurl.as_deref().is_none_or(str::is_empty) {
            self.serverurl = Some(serverurl.into());
        }
        self
    }

    /// Read overrides from `SFUSER`, `SFPASS`, `SFTOKEN`, `SFSESSIONID`, `SFSERVERURL`.
    pub fn with_use_env(mut self, use_env: bool) -> Self {
        self.use_env = use_env;
        self
    }

    pub fn with_session_config(mut self, session_config: SessionConfig) -> Self {
        self.session_config = Some(session_config);
        self
    }
}

/// Session information handed over by an IDE or another tool.
///
/// Two shapes are recognised: `{accessToken, instanceUrl}` and
/// `{sid, server_url}`. Anything else is accepted and ignored.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    #[serde(rename = "accessToken")]
    pub access_token: Option<String>,
    #[serde(rename = "instanceUrl")]
    pub instance_url: Option<String>,
    pub sid: Option<String>,
    pub server_url: Option<String>,
}

impl std::fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionConfig")
            .field("access_token", &self.access_token.as_ref().map(|_| "[REDACTED]"))
            .field("instance_url", &self.instance_url)
            .field("sid", &self.sid.as_ref().map(|_| "[REDACTED]"))
            .field("server_url", &self.server_url)
            .finish()
    }
}

impl SessionConfig {
    /// Session id and server url, if one of the recognised shapes is complete.
    ///
    /// A `server_url` is cut right after its first `.com`, dropping any
    /// path or query.
    pub fn session(&self) -> Option<(String, String)> {
        match self {
            SessionConfig {
                access_token: Some(token),
                instance_url: Some(url),
                ..
            } if !token.is_empty() && !url.is_empty() => Some((token.clone(), url.clone())),
            SessionConfig {
                sid: Some(sid),
                server_url: Some(url),
                ..
            } if !sid.is_empty() && !url.is_empty() => Some((sid.clone(), truncate_after_com(url))),
            _ => None,
        }
    }
}

fn truncate_after_com(url: &str) -> String {
    match url.find(".com") {
        Some(idx) => url[..idx + ".com".len()].to_string(),
        None => url.to_string(),
    }
}
