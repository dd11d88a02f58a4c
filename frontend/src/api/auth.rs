use chrono::Utc;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::{
    atomic::{AtomicI64, Ordering},
    Arc,
};
use tracing::Instrument;

use super::{
    client::Transport,
    types::{
        AddUserRequest, AuthenticatedUser, LoginRequest, LoginResponse, SessionUser,
        UserListResponse, UserRecord,
    },
};
use crate::{error::AuthError, validation::NewUser};

const PLACEHOLDER_TOKEN_PREFIX: &str = "demo-token-";

/// Issues client-side placeholder tokens for registrations, since the
/// backing endpoint never returns one. Each token is strictly greater than
/// the last, even when the clock does not move.
#[derive(Debug, Default)]
pub struct PlaceholderTokens {
    last: AtomicI64,
}

impl PlaceholderTokens {
    pub fn issue(&self) -> String {
        self.issue_at(Utc::now().timestamp_millis())
    }

    fn issue_at(&self, now_ms: i64) -> String {
        let previous = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |prev| {
                Some(now_ms.max(prev + 1))
            })
            .unwrap_or_else(|prev| prev);
        format!("{}{}", PLACEHOLDER_TOKEN_PREFIX, now_ms.max(previous + 1))
    }
}

/// Renames the upstream login fields into the session vocabulary.
pub fn normalize_login(response: LoginResponse) -> AuthenticatedUser {
    AuthenticatedUser {
        user: SessionUser {
            id: response.id,
            username: response.username,
            first_name: response.first_name,
            last_name: response.last_name,
            email: response.email,
            image: response.image,
        },
        token: response.access_token,
    }
}

/// Combines the echoed user record with a placeholder token. Fields the
/// upstream left out fall back to what was submitted.
pub fn normalize_registration(
    record: UserRecord,
    submitted: &NewUser,
    token: String,
) -> AuthenticatedUser {
    let or_submitted = |value: String, fallback: &str| {
        if value.is_empty() {
            fallback.to_string()
        } else {
            value
        }
    };
    AuthenticatedUser {
        user: SessionUser {
            id: record.id,
            username: or_submitted(record.username, &submitted.username),
            first_name: or_submitted(record.first_name, &submitted.first_name),
            last_name: or_submitted(record.last_name, &submitted.last_name),
            email: or_submitted(record.email, &submitted.email),
            image: record.image,
        },
        token,
    }
}

pub fn avatar_url(username: &str) -> String {
    format!("https://dummyjson.com/icon/{}/128", username)
}

/// Login and registration against the demo identity API.
pub struct AuthGateway {
    transport: Arc<dyn Transport>,
    tokens: PlaceholderTokens,
}

impl AuthGateway {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            tokens: PlaceholderTokens::default(),
        }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<AuthenticatedUser, AuthError> {
        let span = tracing::debug_span!("auth_login", username = %request.username);
        async move {
            let body = to_body(&request)?;
            let raw = self
                .transport
                .post("/auth/login", &body)
                .await
                .map_err(|err| {
                    tracing::warn!(error = %err, "login failed");
                    AuthError::from_login_failure(err)
                })?;
            let response: LoginResponse = parse(raw)?;
            let user = normalize_login(response);
            tracing::info!(user_id = user.user.id, "login succeeded");
            Ok::<_, AuthError>(user)
        }
        .instrument(span)
        .await
    }

    pub async fn register(&self, new_user: NewUser) -> Result<AuthenticatedUser, AuthError> {
        let span = tracing::debug_span!("auth_register", username = %new_user.username);
        async move {
            let body = to_body(&AddUserRequest {
                first_name: new_user.first_name.clone(),
                last_name: new_user.last_name.clone(),
                username: new_user.username.clone(),
                email: new_user.email.clone(),
                password: new_user.password.clone(),
                image: avatar_url(&new_user.username),
            })?;
            let raw = self
                .transport
                .post("/users/add", &body)
                .await
                .map_err(|err| {
                    tracing::warn!(error = %err, "registration failed");
                    AuthError::from_transport(err)
                })?;
            let record: UserRecord = parse(raw)?;
            let user = normalize_registration(record, &new_user, self.tokens.issue());
            tracing::info!(user_id = user.user.id, "registration succeeded");
            Ok::<_, AuthError>(user)
        }
        .instrument(span)
        .await
    }

    pub async fn profile(&self, user_id: i64) -> Result<UserRecord, AuthError> {
        let raw = self
            .transport
            .get(&format!("/users/{}", user_id), &[])
            .await
            .map_err(AuthError::from_transport)?;
        parse(raw)
    }

    pub async fn all_users(&self) -> Result<UserListResponse, AuthError> {
        let raw = self
            .transport
            .get("/users", &[])
            .await
            .map_err(AuthError::from_transport)?;
        parse(raw)
    }
}

fn to_body<T: serde::Serialize>(value: &T) -> Result<Value, AuthError> {
    serde_json::to_value(value)
        .map_err(|e| AuthError::unknown(format!("Failed to encode request: {}", e)))
}

fn parse<T: DeserializeOwned>(raw: Value) -> Result<T, AuthError> {
    serde_json::from_value(raw)
        .map_err(|e| AuthError::unknown(format!("Failed to parse response: {}", e)))
}
