//! Session lifecycle: one session per tab, created on login, destroyed on
//! logout or auth failure.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::storage;

/// Account role fixed at registration time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Instructor,
}

impl Role {
    #[must_use]
    pub fn dashboard_route(self) -> &'static str {
        match self {
            Self::Student => "/studentDashboard",
            Self::Instructor => "/instrDashboard",
        }
    }

    #[must_use]
    pub fn login_route(self) -> &'static str {
        match self {
            Self::Student => "/studentLogin",
            Self::Instructor => "/instrLogin",
        }
    }
}

/// Authenticated state held for the duration of activity in one tab.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub role: Role,
    pub issued_at: f64,
}

/// Tab-wide session holder. The UI thread is the sole writer, so access is
/// plain and synchronous; the token is mirrored to durable tab storage
/// under `ACCESS_TOKEN` for outside observers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    session: Option<Session>,
}

impl SessionState {
    /// Replace any existing session. A new login overwrites, never merges.
    pub fn set(&mut self, session: Session) {
        storage::write_token(&session.token);
        self.session = Some(session);
    }

    /// Current session, if any. Never blocks, never fails.
    #[must_use]
    pub fn get(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Current token, if any.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    /// Drop the session and the persisted token. Idempotent.
    pub fn clear(&mut self) {
        storage::clear_token();
        self.session = None;
    }

    /// Clear the session and hand back the token for the best-effort remote
    /// logout call. Local destruction never waits on the network; a token
    /// only exists once the session is already gone.
    pub fn take_for_logout(&mut self) -> Option<String> {
        storage::clear_token();
        self.session.take().map(|s| s.token)
    }
}
