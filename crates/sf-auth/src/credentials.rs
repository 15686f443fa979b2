//! Resolved credentials.
//!
//! All credential types implement custom Debug to redact sensitive data.

use std::fmt;

/// Credentials handed to the Ant Migration Tool.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Username and password; the password already carries the security
    /// token when one was configured. One half may be missing, in which
    /// case resolution reported a warning for it.
    UsernamePassword {
        username: Option<String>,
        password: Option<String>,
    },
    /// An existing session.
    Session { session_id: String, server_url: String },
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::UsernamePassword { username, password } => f
                .debug_struct("UsernamePassword")
                .field("username", username)
                .field("password", &password.as_ref().map(|_| "[REDACTED]"))
                .finish(),
            Credentials::Session { server_url, .. } => f
                .debug_struct("Session")
                .field("session_id", &"[REDACTED]")
                .field("server_url", server_url)
                .finish(),
        }
    }
}

impl Credentials {
    /// The part of the credentials that is safe to log: the username, or
    /// the server url for session credentials.
    pub fn principal(&self) -> Option<Principal<'_>> {
        match self {
            Credentials::UsernamePassword { username, .. } => {
                username.as_deref().map(Principal::User)
            }
            Credentials::Session { server_url, .. } => Some(Principal::Server(server_url)),
        }
    }
}

/// Loggable identity of a set of credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Principal<'a> {
    User(&'a str),
    Server(&'a str),
}

impl fmt::Display for Principal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Principal::User(user) => write!(f, "User -> {}", user),
            Principal::Server(url) => write!(f, "Server -> {}", url),
        }
    }
}

/// Non-fatal problem found while validating credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthWarning {
    MissingUsername { target: String },
    MissingPassword { target: String },
}

impl fmt::Display for AuthWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthWarning::MissingUsername { target } => {
                write!(f, "no username specified for {}", target)
            }
            AuthWarning::MissingPassword { target } => {
                write!(f, "no password specified for {}", target)
            }
        }
    }
}

/// Every auth value after session config, environment and token handling.
///
/// `pass` is the combined password and token. These are the values a build
/// file is rendered with.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AuthSettings {
    pub user: Option<String>,
    pub pass: Option<String>,
    pub token: Option<String>,
    pub sessionid: Option<String>,
    pub serverurl: Option<String>,
}

impl fmt::Debug for AuthSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSettings")
            .field("user", &self.user)
            .field("pass", &self.pass.as_ref().map(|_| "[REDACTED]"))
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("sessionid", &self.sessionid.as_ref().map(|_| "[REDACTED]"))
            .field("serverurl", &self.serverurl)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_password() {
        let creds = Credentials::UsernamePassword {
            username: Some("user@example.com".to_string()),
            password: Some("secret-password".to_string()),
        };
        let debug = format!("{:?}", creds);
        assert!(debug.contains("user@example.com"));
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("secret-password"));
    }

    #[test]
    fn test_debug_redacts_session_id() {
        let creds = Credentials::Session {
            session_id: "00Dxx!AQ0AQ".to_string(),
            server_url: "https://na1.salesforce.com".to_string(),
        };
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("00Dxx!AQ0AQ"));
        assert!(debug.contains("https://na1.salesforce.com"));
    }

    #[test]
    fn test_principal_display() {
        let creds = Credentials::UsernamePassword {
            username: Some("u".to_string()),
            password: Some("p".to_string()),
        };
        assert_eq!(creds.principal().unwrap().to_string(), "User -> u");

        let creds = Credentials::UsernamePassword {
            username: None,
            password: Some("p".to_string()),
        };
        assert_eq!(creds.principal(), None);

        let creds = Credentials::Session {
            session_id: "s".to_string(),
            server_url: "https://x.salesforce.com".to_string(),
        };
        assert_eq!(
            creds.principal().unwrap().to_string(),
            "Server -> https://x.salesforce.com"
        );
    }

    #[test]
    fn test_warning_messages() {
        let w = AuthWarning::MissingUsername {
            target: "prod".to_string(),
        };
        assert_eq!(w.to_string(), "no username specified for prod");
        let w = AuthWarning::MissingPassword {
            target: "prod".to_string(),
        };
        assert_eq!(w.to_string(), "no password specified for prod");
    }

    #[test]
    fn test_settings_debug_redacts() {
        let settings = AuthSettings {
            user: Some("u".to_string()),
            pass: Some("passtoken".to_string()),
            token: Some("token".to_string()),
            sessionid: Some("sid".to_string()),
            serverurl: None,
        };
        let debug = format!("{:?}", settings);
        assert!(!debug.contains("passtoken"));
        assert!(!debug.contains("\"sid\""));
    }
}
