//! Error taxonomy shared by the gateways, the session store and the
//! screen controllers.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::state::session::SessionStatus;

/// Failure of a single HTTP exchange, before any domain interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,
    #[error("request failed: {0}")]
    Connect(String),
    #[error("HTTP {status}")]
    Status { status: u16, body: String },
    #[error("failed to parse response: {0}")]
    Decode(String),
}

impl TransportError {
    pub fn is_network(&self) -> bool {
        matches!(self, TransportError::Timeout | TransportError::Connect(_))
    }

    /// Upstream `message` field of a JSON error body, if there is one.
    pub fn upstream_message(&self) -> Option<String> {
        match self {
            TransportError::Status { body, .. } => serde_json::from_str::<serde_json::Value>(body)
                .ok()
                .and_then(|value| {
                    value
                        .get("message")
                        .and_then(|m| m.as_str())
                        .map(str::to_string)
                }),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_decode() {
            TransportError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            TransportError::Status {
                status: status.as_u16(),
                body: String::new(),
            }
        } else {
            TransportError::Connect(err.to_string())
        }
    }
}

/// Client-side input rule violations. These never reach the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Password must be at least {min} characters long")]
    PasswordTooShort { min: usize },
}

impl ValidationError {
    /// Short rule identifier, stable across wording changes.
    pub fn rule(&self) -> &'static str {
        match self {
            ValidationError::MissingField(_) => "required",
            ValidationError::PasswordMismatch => "password_mismatch",
            ValidationError::PasswordTooShort { .. } => "password_too_short",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthErrorKind {
    InvalidCredentials,
    Network,
    Unknown,
}

impl fmt::Display for AuthErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthErrorKind::InvalidCredentials => write!(f, "invalid_credentials"),
            AuthErrorKind::Network => write!(f, "network"),
            AuthErrorKind::Unknown => write!(f, "unknown"),
        }
    }
}

/// Failed call against the identity endpoint. `message` is what ends up in
/// the session's `error` field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AuthError {
    pub kind: AuthErrorKind,
    pub message: String,
}

impl AuthError {
    pub fn new(kind: AuthErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_credentials(message: impl Into<String>) -> Self {
        Self::new(AuthErrorKind::InvalidCredentials, message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(AuthErrorKind::Network, message)
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(AuthErrorKind::Unknown, message)
    }

    /// Interprets a transport failure from `POST /auth/login`.
    pub fn from_login_failure(err: TransportError) -> Self {
        if let TransportError::Status {
            status: 400 | 401 | 403,
            ..
        } = err
        {
            let message = err
                .upstream_message()
                .unwrap_or_else(|| "Invalid username or password".to_string());
            return Self::invalid_credentials(message);
        }
        Self::from_transport(err)
    }

    /// Interprets a transport failure from any other identity call.
    pub fn from_transport(err: TransportError) -> Self {
        if err.is_network() {
            return Self::network(format!("Network error: {}", err));
        }
        let message = err.upstream_message().unwrap_or_else(|| err.to_string());
        Self::unknown(message)
    }
}

/// Failures of the sports data gateway.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SportsError {
    #[error("no data available for league {league}")]
    DataUnavailable { league: String },
    #[error("{resource} lookup failed: {source}")]
    Lookup {
        resource: &'static str,
        #[source]
        source: TransportError,
    },
}

/// Rejected session transition; the session is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot {operation} while session is {from}")]
pub struct InvalidTransition {
    pub operation: &'static str,
    pub from: SessionStatus,
}

/// Outcome of a login or registration attempt driven through the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthFlowError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("an authentication attempt is already in progress")]
    Busy(#[source] InvalidTransition),
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl From<InvalidTransition> for AuthFlowError {
    fn from(err: InvalidTransition) -> Self {
        AuthFlowError::Busy(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_401_maps_to_invalid_credentials_with_upstream_message() {
        let err = AuthError::from_login_failure(TransportError::Status {
            status: 400,
            body: r#"{"message":"Invalid credentials"}"#.into(),
        });
        assert_eq!(err.kind, AuthErrorKind::InvalidCredentials);
        assert_eq!(err.message, "Invalid credentials");
    }

    #[test]
    fn login_status_without_body_uses_default_message() {
        let err = AuthError::from_login_failure(TransportError::Status {
            status: 401,
            body: String::new(),
        });
        assert_eq!(err.kind, AuthErrorKind::InvalidCredentials);
        assert_eq!(err.message, "Invalid username or password");
    }

    #[test]
    fn timeout_maps_to_network() {
        let err = AuthError::from_login_failure(TransportError::Timeout);
        assert_eq!(err.kind, AuthErrorKind::Network);
    }

    #[test]
    fn server_error_maps_to_unknown() {
        let err = AuthError::from_transport(TransportError::Status {
            status: 500,
            body: "oops".into(),
        });
        assert_eq!(err.kind, AuthErrorKind::Unknown);
        assert_eq!(err.message, "HTTP 500");
    }

    #[test]
    fn validation_rules_have_stable_identifiers() {
        assert_eq!(ValidationError::MissingField("First name").rule(), "required");
        assert_eq!(
            ValidationError::PasswordTooShort { min: 6 }.to_string(),
            "Password must be at least 6 characters long"
        );
    }
}
