use std::sync::Arc;

use super::{Navigator, Route};

/// Landing screen. Both entry points lead to the login screen; new users
/// reach registration from there.
pub struct WelcomeViewModel {
    navigator: Arc<dyn Navigator>,
}

impl WelcomeViewModel {
    pub fn new(navigator: Arc<dyn Navigator>) -> Self {
        Self { navigator }
    }

    pub fn get_started(&self) {
        self.navigator.push(Route::Login);
    }

    pub fn sign_in(&self) {
        self.navigator.push(Route::Login);
    }
}
