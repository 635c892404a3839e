use std::fmt;

use super::jira::SessionInfo;

/// Opaque Jira session cookie, valid for the outbound calls of one request.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionCredential(String);

impl SessionCredential {
    pub fn new(cookie: impl Into<String>) -> Self {
        Self(cookie.into())
    }

    /// Value for the `cookie` request header.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<SessionInfo> for SessionCredential {
    fn from(session: SessionInfo) -> Self {
        Self(format!("{}={}", session.name, session.value))
    }
}

// Never print the cookie itself.
impl fmt::Debug for SessionCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionCredential(<redacted>)")
    }
}
