//! Authoritative record of the client's authentication status.
//!
//! The record lives inside a `watch` channel: every successful transition
//! publishes a fresh snapshot, readers only ever see clones, and writers are
//! serialised by the channel's lock.

use serde::Serialize;
use std::{fmt, sync::Arc};
use tokio::sync::watch;

use crate::{
    api::{AuthenticatedUser, SessionUser},
    error::InvalidTransition,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Idle,
    Authenticating,
    Authenticated,
    Failed,
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionStatus::Idle => write!(f, "idle"),
            SessionStatus::Authenticating => write!(f, "authenticating"),
            SessionStatus::Authenticated => write!(f, "authenticated"),
            SessionStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Each variant carries exactly what its status allows, so user and token
/// can never be half-present.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionState {
    Idle,
    Authenticating,
    Authenticated { user: SessionUser, token: String },
    Failed { error: String },
}

/// Immutable snapshot handed to readers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    state: SessionState,
    auth_epoch: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            state: SessionState::Idle,
            auth_epoch: 0,
        }
    }
}

impl Session {
    pub fn status(&self) -> SessionStatus {
        match self.state {
            SessionState::Idle => SessionStatus::Idle,
            SessionState::Authenticating => SessionStatus::Authenticating,
            SessionState::Authenticated { .. } => SessionStatus::Authenticated,
            SessionState::Failed { .. } => SessionStatus::Failed,
        }
    }

    pub fn user(&self) -> Option<&SessionUser> {
        match &self.state {
            SessionState::Authenticated { user, .. } => Some(user),
            _ => None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match &self.state {
            SessionState::Authenticated { token, .. } => Some(token),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            SessionState::Failed { error } => Some(error),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.status() == SessionStatus::Authenticated
    }

    pub fn is_loading(&self) -> bool {
        self.status() == SessionStatus::Authenticating
    }

    /// Number of transitions into `authenticated` so far. Lets observers
    /// react once per sign-in rather than once per snapshot.
    pub fn auth_epoch(&self) -> u64 {
        self.auth_epoch
    }
}

/// Single writer of the session. Clones share the same record.
#[derive(Clone)]
pub struct SessionStore {
    tx: Arc<watch::Sender<Session>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Session::default());
        Self { tx: Arc::new(tx) }
    }

    pub fn snapshot(&self) -> Session {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.tx.subscribe()
    }

    pub fn begin_auth(&self) -> Result<(), InvalidTransition> {
        self.transition("begin authentication", |session| match session.state {
            SessionState::Idle | SessionState::Failed { .. } => {
                session.state = SessionState::Authenticating;
                true
            }
            _ => false,
        })
    }

    pub fn complete_auth(&self, authenticated: AuthenticatedUser) -> Result<(), InvalidTransition> {
        self.transition("complete authentication", move |session| match session.state {
            SessionState::Authenticating => {
                let AuthenticatedUser { user, token } = authenticated;
                session.state = SessionState::Authenticated { user, token };
                session.auth_epoch += 1;
                true
            }
            _ => false,
        })
    }

    pub fn fail_auth(&self, message: impl Into<String>) -> Result<(), InvalidTransition> {
        let error = message.into();
        self.transition("fail authentication", |session| match session.state {
            SessionState::Authenticating => {
                session.state = SessionState::Failed { error };
                true
            }
            _ => false,
        })
    }

    /// Acknowledges a failure. Outside `failed` there is no error to clear,
    /// so the call changes nothing and still succeeds.
    pub fn clear_error(&self) {
        self.tx.send_if_modified(|session| match session.state {
            SessionState::Failed { .. } => {
                session.state = SessionState::Idle;
                true
            }
            _ => false,
        });
    }

    pub fn logout(&self) -> Result<(), InvalidTransition> {
        self.transition("log out", |session| match session.state {
            SessionState::Authenticated { .. } => {
                session.state = SessionState::Idle;
                true
            }
            _ => false,
        })
    }

    fn transition<F>(&self, operation: &'static str, apply: F) -> Result<(), InvalidTransition>
    where
        F: FnOnce(&mut Session) -> bool,
    {
        let mut rejected_from = None;
        self.tx.send_if_modified(|session| {
            let from = session.status();
            let applied = apply(session);
            if applied {
                tracing::debug!(%from, to = %session.status(), operation, "session transition");
            } else {
                rejected_from = Some(from);
            }
            applied
        });
        match rejected_from {
            None => Ok(()),
            Some(from) => {
                tracing::warn!(%from, operation, "rejected session transition");
                Err(InvalidTransition { operation, from })
            }
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_user() -> AuthenticatedUser {
    AuthenticatedUser {
        user: SessionUser {
            id: 1,
            username: "bob".into(),
            first_name: "Bob".into(),
            last_name: "Stone".into(),
            email: "bob@example.com".into(),
            image: None,
        },
        token: "xyz".into(),
    }
}
