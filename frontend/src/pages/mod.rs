//! Screen controllers. They read session snapshots and turn them into
//! navigation and alert side effects; rendering lives elsewhere.

pub mod login;
pub mod register;
pub mod welcome;

pub use login::LoginViewModel;
pub use register::RegisterViewModel;
pub use welcome::WelcomeViewModel;

use serde::Serialize;
use tokio::sync::watch;

use crate::state::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Login,
    Register,
    Home,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Home => "/(tabs)",
        }
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    fn push(&self, route: Route);
    /// Navigates without keeping the current screen in history.
    fn replace(&self, route: Route);
}

#[cfg_attr(test, mockall::automock)]
pub trait Alerts: Send + Sync {
    fn alert(&self, title: &str, message: &str);
}

/// Fires once per transition into `authenticated`, however many snapshots
/// report the same sign-in.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavigationLatch {
    handled_epoch: u64,
}

impl NavigationLatch {
    pub fn should_navigate(&mut self, session: &Session) -> bool {
        if session.is_authenticated() && session.auth_epoch() > self.handled_epoch {
            self.handled_epoch = session.auth_epoch();
            true
        } else {
            false
        }
    }
}

pub trait SessionObserver {
    fn on_session(&mut self, session: &Session);
}

/// Feeds every published snapshot to `observer` until the store goes away.
pub async fn follow_session<O: SessionObserver>(
    observer: &mut O,
    rx: &mut watch::Receiver<Session>,
) {
    let current = rx.borrow_and_update().clone();
    observer.on_session(&current);
    while rx.changed().await.is_ok() {
        let snapshot = rx.borrow_and_update().clone();
        observer.on_session(&snapshot);
    }
}
