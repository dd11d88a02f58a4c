use std::sync::Arc;

use super::utils::{social_signup_message, RegisterFormState};
use crate::{
    error::{AuthFlowError, InvalidTransition},
    pages::{login::utils::alert_message, Alerts, NavigationLatch, Navigator, Route, SessionObserver},
    state::{AuthService, Session},
};

pub const REGISTRATION_FAILED_TITLE: &str = "Registration Failed";

pub struct RegisterViewModel {
    pub form: RegisterFormState,
    auth: AuthService,
    navigator: Arc<dyn Navigator>,
    alerts: Arc<dyn Alerts>,
    latch: NavigationLatch,
}

impl RegisterViewModel {
    pub fn new(auth: AuthService, navigator: Arc<dyn Navigator>, alerts: Arc<dyn Alerts>) -> Self {
        Self {
            form: RegisterFormState::default(),
            auth,
            navigator,
            alerts,
            latch: NavigationLatch::default(),
        }
    }

    pub fn pending(&self) -> bool {
        self.auth.session().is_loading()
    }

    pub async fn submit(&mut self) -> Result<(), AuthFlowError> {
        let current = self.auth.session();
        if current.is_loading() {
            return Err(AuthFlowError::Busy(InvalidTransition {
                operation: "submit",
                from: current.status(),
            }));
        }
        let result = self.auth.register(self.form.to_form()).await;
        match &result {
            Ok(()) => self.form.clear_passwords(),
            Err(AuthFlowError::Validation(err)) => self.alerts.alert("Error", &alert_message(err)),
            Err(_) => {}
        }
        let snapshot = self.auth.session();
        self.on_session(&snapshot);
        result
    }

    pub fn go_to_login(&self) {
        self.navigator.push(Route::Login);
    }

    pub fn social_signup(&self, provider: &str) {
        self.alerts
            .alert("Social Signup", &social_signup_message(provider));
    }
}

impl SessionObserver for RegisterViewModel {
    fn on_session(&mut self, session: &Session) {
        if self.latch.should_navigate(session) {
            self.navigator.replace(Route::Home);
        }
        if let Some(error) = session.error() {
            self.alerts.alert(REGISTRATION_FAILED_TITLE, error);
            self.auth.clear_error();
        }
    }
}
