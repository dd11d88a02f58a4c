use crate::validation::RegistrationForm;

#[derive(Clone, Default)]
pub struct RegisterFormState {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterFormState {
    pub fn to_form(&self) -> RegistrationForm {
        RegistrationForm {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
        }
    }

    pub fn clear_passwords(&mut self) {
        self.password.clear();
        self.confirm_password.clear();
    }
}

pub fn social_signup_message(provider: &str) -> String {
    format!("{} signup not implemented yet", provider)
}
