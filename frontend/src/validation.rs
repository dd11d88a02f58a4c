//! Client-side input rules, checked before any request is built.
//!
//! A [`NewUser`] can only be obtained through [`RegistrationForm::validate`],
//! so the registration call cannot be reached with unchecked input.

use std::fmt;

use crate::{api::LoginRequest, error::ValidationError};

pub const MIN_PASSWORD_LEN: usize = 6;

/// Everything the register screen collects.
#[derive(Clone, Default)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl fmt::Debug for RegistrationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationForm")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("username", &self.username)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Registration input that passed every rule.
#[derive(Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl RegistrationForm {
    /// Rules apply in order: every field filled, passwords match, password
    /// long enough. The first violation wins.
    pub fn validate(self) -> Result<NewUser, ValidationError> {
        let fields = [
            ("First name", &self.first_name),
            ("Last name", &self.last_name),
            ("Username", &self.username),
            ("Email", &self.email),
            ("Password", &self.password),
            ("Confirm password", &self.confirm_password),
        ];
        for (label, value) in fields {
            require(label, value)?;
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }
        Ok(NewUser {
            first_name: self.first_name,
            last_name: self.last_name,
            username: self.username,
            email: self.email,
            password: self.password,
        })
    }
}

pub fn validate_credentials(request: &LoginRequest) -> Result<(), ValidationError> {
    if request.username.trim().is_empty() {
        return Err(ValidationError::MissingField("Username"));
    }
    require("Password", &request.password)
}

fn require(label: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(ValidationError::MissingField(label))
    } else {
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn valid_form() -> RegistrationForm {
    RegistrationForm {
        first_name: "Ann".into(),
        last_name: "Lee".into(),
        username: "annlee".into(),
        email: "ann@example.com".into(),
        password: "abcdef".into(),
        confirm_password: "abcdef".into(),
    }
}
