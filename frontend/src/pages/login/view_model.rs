use std::sync::Arc;

use super::utils::{alert_message, LoginFormState};
use crate::{
    error::{AuthFlowError, InvalidTransition},
    pages::{Alerts, NavigationLatch, Navigator, Route, SessionObserver},
    state::{AuthService, Session},
    validation::validate_credentials,
};

pub const LOGIN_FAILED_TITLE: &str = "Login Failed";

pub struct LoginViewModel {
    pub form: LoginFormState,
    auth: AuthService,
    navigator: Arc<dyn Navigator>,
    alerts: Arc<dyn Alerts>,
    latch: NavigationLatch,
}

impl LoginViewModel {
    pub fn new(auth: AuthService, navigator: Arc<dyn Navigator>, alerts: Arc<dyn Alerts>) -> Self {
        Self {
            form: LoginFormState::default(),
            auth,
            navigator,
            alerts,
            latch: NavigationLatch::default(),
        }
    }

    pub fn pending(&self) -> bool {
        self.auth.session().is_loading()
    }

    /// Validates the form and dispatches a login. A submit while an attempt
    /// is in flight is refused with `Busy` and has no side effects.
    pub async fn submit(&mut self) -> Result<(), AuthFlowError> {
        let current = self.auth.session();
        if current.is_loading() {
            return Err(AuthFlowError::Busy(InvalidTransition {
                operation: "submit",
                from: current.status(),
            }));
        }
        let request = self.form.to_request();
        if let Err(err) = validate_credentials(&request) {
            self.alerts.alert("Error", &alert_message(&err));
            return Err(err.into());
        }

        let result = self.auth.login(request).await;
        if result.is_ok() {
            self.form.clear_password();
        }
        let snapshot = self.auth.session();
        self.on_session(&snapshot);
        result
    }

    pub fn go_to_register(&self) {
        self.navigator.push(Route::Register);
    }
}

impl SessionObserver for LoginViewModel {
    fn on_session(&mut self, session: &Session) {
        if self.latch.should_navigate(session) {
            self.navigator.replace(Route::Home);
        }
        if let Some(error) = session.error() {
            self.alerts.alert(LOGIN_FAILED_TITLE, error);
            self.auth.clear_error();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::fake::{FakeTransport, Method};
    use crate::api::AuthGateway;
    use crate::pages::{MockAlerts, MockNavigator};
    use crate::state::{SessionStatus, SessionStore};
    use mockall::predicate::eq;
    use serde_json::json;

    fn service(fake: &FakeTransport) -> AuthService {
        AuthService::new(AuthGateway::new(Arc::new(fake.clone())))
    }

    #[tokio::test]
    async fn successful_login_navigates_home_once() {
        let fake = FakeTransport::new();
        fake.respond(
            Method::Post,
            "/auth/login",
            json!({ "id": 1, "username": "bob", "accessToken": "xyz" }),
        );
        let auth = service(&fake);

        let mut navigator = MockNavigator::new();
        navigator
            .expect_replace()
            .with(eq(Route::Home))
            .times(1)
            .return_const(());
        let mut alerts = MockAlerts::new();
        alerts.expect_alert().times(0);

        let mut vm = LoginViewModel::new(auth.clone(), Arc::new(navigator), Arc::new(alerts));
        vm.form.username = "bob".into();
        vm.form.password = "secret".into();

        vm.submit().await.expect("login");
        let snapshot = auth.session();
        vm.on_session(&snapshot);
        vm.on_session(&snapshot);

        assert!(vm.form.password.is_empty());
    }

    #[tokio::test]
    async fn failed_login_alerts_and_clears_error() {
        let fake = FakeTransport::new();
        fake.fail(
            Method::Post,
            "/auth/login",
            crate::error::TransportError::Status {
                status: 400,
                body: r#"{"message":"Invalid credentials"}"#.into(),
            },
        );
        let auth = service(&fake);

        let mut navigator = MockNavigator::new();
        navigator.expect_replace().times(0);
        let mut alerts = MockAlerts::new();
        alerts
            .expect_alert()
            .withf(|title, message| title == LOGIN_FAILED_TITLE && message == "Invalid credentials")
            .times(1)
            .return_const(());

        let mut vm = LoginViewModel::new(auth.clone(), Arc::new(navigator), Arc::new(alerts));
        vm.form.username = "bob".into();
        vm.form.password = "wrong".into();

        assert!(vm.submit().await.is_err());
        assert_eq!(auth.session().status(), SessionStatus::Idle);
    }

    #[tokio::test]
    async fn submit_while_pending_is_busy_without_side_effects() {
        let fake = FakeTransport::new();
        let store = SessionStore::new();
        let auth = AuthService::with_store(AuthGateway::new(Arc::new(fake.clone())), store.clone());
        store.begin_auth().expect("attempt in flight");

        let mut navigator = MockNavigator::new();
        navigator.expect_replace().times(0);
        let mut alerts = MockAlerts::new();
        alerts.expect_alert().times(0);

        let mut vm = LoginViewModel::new(auth, Arc::new(navigator), Arc::new(alerts));
        vm.form.username = "bob".into();
        vm.form.password = "secret".into();

        assert!(vm.pending());
        assert!(matches!(vm.submit().await, Err(AuthFlowError::Busy(_))));
        assert_eq!(fake.call_count(), 0);
        assert!(store.snapshot().is_loading());
        assert_eq!(vm.form.password, "secret");
    }

    #[tokio::test]
    async fn empty_form_alerts_without_network() {
        let fake = FakeTransport::new();
        let mut alerts = MockAlerts::new();
        alerts
            .expect_alert()
            .withf(|title, message| title == "Error" && message == "Please fill in all fields")
            .times(1)
            .return_const(());

        let mut vm = LoginViewModel::new(
            service(&fake),
            Arc::new(MockNavigator::new()),
            Arc::new(alerts),
        );

        assert!(matches!(
            vm.submit().await,
            Err(AuthFlowError::Validation(_))
        ));
        assert_eq!(fake.call_count(), 0);
    }
}
