use crate::{api::LoginRequest, error::ValidationError};

pub const FILL_ALL_FIELDS: &str = "Please fill in all fields";

#[derive(Clone, Default)]
pub struct LoginFormState {
    pub username: String,
    pub password: String,
}

impl LoginFormState {
    pub fn to_request(&self) -> LoginRequest {
        LoginRequest::new(self.username.trim(), self.password.clone())
    }

    pub fn clear_password(&mut self) {
        self.password.clear();
    }
}

/// Text shown to the user for a rejected form.
pub fn alert_message(err: &ValidationError) -> String {
    match err {
        ValidationError::MissingField(_) => FILL_ALL_FIELDS.to_string(),
        other => other.to_string(),
    }
}
