//! Credential resolution.
//!
//! Resolution is pure: the environment is passed in and nothing is logged.
//! Callers report [`Resolution::warnings`] and [`Resolution::principal`]
//! themselves.

use crate::config::AuthConfig;
use crate::credentials::{AuthSettings, AuthWarning, Credentials, Principal};
use crate::env::{Environment, SFPASS, SFSERVERURL, SFSESSIONID, SFTOKEN, SFUSER};
use crate::error::{Error, ErrorKind, Result};

/// Outcome of a successful resolution.
#[derive(Debug, Clone)]
pub struct Resolution {
    /// All resolved values, including the ones not used by `credentials`.
    pub settings: AuthSettings,
    /// The credentials the Ant task will log in with.
    pub credentials: Credentials,
    /// Non-fatal problems found during validation.
    pub warnings: Vec<AuthWarning>,
}

impl Resolution {
    /// Loggable identity: the username when one is set, otherwise the
    /// server url, if any.
    pub fn principal(&self) -> Option<Principal<'_>> {
        match (&self.settings.user, &self.settings.serverurl) {
            (Some(user), _) => Some(Principal::User(user)),
            (None, Some(url)) => Some(Principal::Server(url)),
            (None, None) => None,
        }
    }
}

/// Resolve credentials for `target` from `config`.
///
/// Steps, in order:
/// 1. a recognised session config sets session id and server url;
/// 2. with `use_env`, `SFUSER`, `SFPASS`, `SFTOKEN`, `SFSESSIONID` and
///    `SFSERVERURL` override the configured values when set;
/// 3. a token is appended to the password, then the result is validated.
///
/// A complete session pair wins over username/password. Without one, each
/// missing username or password adds a warning; the resolution fails with
/// [`ErrorKind::UsernamePassword`] only when both are missing.
pub fn resolve<E>(config: &AuthConfig, target: &str, env: &E) -> Result<Resolution>
where
    E: Environment + ?Sized,
{
    let mut settings = AuthSettings {
        user: non_empty(config.user.clone()),
        pass: non_empty(config.pass.clone()),
        token: non_empty(config.token.clone()),
        sessionid: non_empty(config.sessionid.clone()),
        serverurl: non_empty(config.serverurl.clone()),
    };

    if let Some((sessionid, serverurl)) = config.session_config.as_ref().and_then(|c| c.session()) {
        settings.sessionid = Some(sessionid);
        settings.serverurl = Some(serverurl);
    }

    if config.use_env {
        override_from_env(&mut settings.user, env, SFUSER);
        override_from_env(&mut settings.pass, env, SFPASS);
        override_from_env(&mut settings.token, env, SFTOKEN);
        override_from_env(&mut settings.sessionid, env, SFSESSIONID);
        override_from_env(&mut settings.serverurl, env, SFSERVERURL);
    }

    if let Some(token) = &settings.token {
        let mut pass = settings.pass.take().unwrap_or_default();
        pass.push_str(token);
        settings.pass = Some(pass);
    }

    validate(settings, target)
}

fn validate(settings: AuthSettings, target: &str) -> Result<Resolution> {
    if let (Some(session_id), Some(server_url)) = (settings.sessionid.clone(), settings.serverurl.clone()) {
        return Ok(Resolution {
            settings,
            credentials: Credentials::Session { session_id, server_url },
            warnings: Vec::new(),
        });
    }

    let mut warnings = Vec::new();
    if settings.user.is_none() {
        warnings.push(AuthWarning::MissingUsername {
            target: target.to_string(),
        });
    }
    if settings.pass.is_none() {
        warnings.push(AuthWarning::MissingPassword {
            target: target.to_string(),
        });
    }

    if settings.user.is_none() && settings.pass.is_none() {
        return Err(Error::new(ErrorKind::UsernamePassword {
            target: target.to_string(),
            warnings,
        }));
    }

    Ok(Resolution {
        credentials: Credentials::UsernamePassword {
            username: settings.user.clone(),
            password: settings.pass.clone(),
        },
        settings,
        warnings,
    })
}

fn override_from_env<E: Environment + ?Sized>(value: &mut Option<String>, env: &E, key: &str) {
    if let Some(from_env) = non_empty(env.var(key)) {
        *value = Some(from_env);
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
