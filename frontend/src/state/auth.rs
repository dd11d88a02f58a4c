use std::sync::Arc;
use tokio::sync::watch;

use super::session::{Session, SessionStore};
use crate::{
    api::{AuthGateway, AuthenticatedUser, LoginRequest},
    error::{AuthError, AuthFlowError, InvalidTransition},
    validation::{validate_credentials, RegistrationForm},
};

pub const ATTEMPT_CANCELLED: &str = "Authentication cancelled";

/// Holds the session in `authenticating` for the lifetime of one attempt.
/// Dropped while still armed (the caller's future was cancelled), it fails
/// the session so a later attempt can begin.
struct PendingAttempt<'a> {
    store: &'a SessionStore,
    armed: bool,
}

impl<'a> PendingAttempt<'a> {
    fn begin(store: &'a SessionStore) -> Result<Self, InvalidTransition> {
        store.begin_auth()?;
        Ok(Self { store, armed: true })
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for PendingAttempt<'_> {
    fn drop(&mut self) {
        if self.armed {
            tracing::warn!("authentication attempt abandoned before it settled");
            let _ = self.store.fail_auth(ATTEMPT_CANCELLED);
        }
    }
}

/// Drives the session store from auth gateway outcomes. Clones share the
/// same gateway and session.
#[derive(Clone)]
pub struct AuthService {
    gateway: Arc<AuthGateway>,
    store: SessionStore,
}

impl AuthService {
    pub fn new(gateway: AuthGateway) -> Self {
        Self::with_store(gateway, SessionStore::new())
    }

    pub fn with_store(gateway: AuthGateway, store: SessionStore) -> Self {
        Self {
            gateway: Arc::new(gateway),
            store,
        }
    }

    pub fn session(&self) -> Session {
        self.store.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.store.subscribe()
    }

    pub fn gateway(&self) -> &AuthGateway {
        &self.gateway
    }

    pub async fn login(&self, request: LoginRequest) -> Result<(), AuthFlowError> {
        validate_credentials(&request)?;
        let attempt = PendingAttempt::begin(&self.store)?;
        let outcome = self.gateway.login(request).await;
        attempt.disarm();
        self.settle(outcome)
    }

    pub async fn register(&self, form: RegistrationForm) -> Result<(), AuthFlowError> {
        let new_user = form.validate()?;
        let attempt = PendingAttempt::begin(&self.store)?;
        let outcome = self.gateway.register(new_user).await;
        attempt.disarm();
        self.settle(outcome)
    }

    pub fn logout(&self) -> Result<(), InvalidTransition> {
        self.store.logout()?;
        tracing::info!("logged out");
        Ok(())
    }

    pub fn clear_error(&self) {
        self.store.clear_error();
    }

    fn settle(&self, outcome: Result<AuthenticatedUser, AuthError>) -> Result<(), AuthFlowError> {
        match outcome {
            Ok(user) => {
                self.store.complete_auth(user)?;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(kind = %err.kind, error = %err, "authentication failed");
                self.store.fail_auth(err.message.clone())?;
                Err(AuthFlowError::Auth(err))
            }
        }
    }
}
