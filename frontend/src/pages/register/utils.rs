use leptos::*;

use crate::{
    data::types::Role,
    error::{AppError, Violations},
    state::session::Registration,
};

#[derive(Clone, Copy)]
pub struct RegisterFormState {
    pub name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub confirm_password: RwSignal<String>,
    pub role: RwSignal<Role>,
}

impl Default for RegisterFormState {
    fn default() -> Self {
        Self {
            name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            confirm_password: create_rw_signal(String::new()),
            role: create_rw_signal(Role::Employee),
        }
    }
}

impl RegisterFormState {
    pub fn snapshot(&self) -> RegisterInput {
        RegisterInput {
            name: self.name.get_untracked(),
            email: self.email.get_untracked(),
            password: self.password.get_untracked(),
            confirm_password: self.confirm_password.get_untracked(),
            role: self.role.get_untracked(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
}

impl RegisterInput {
    pub fn validate(self, min_password_length: usize) -> Result<Registration, AppError> {
        let mut violations = Violations::new();
        violations
            .require(&self.name, "Name")
            .require(&self.email, "Email")
            .require(&self.password, "Password");
        if !self.email.trim().is_empty() && !self.email.contains('@') {
            violations.push("Email must be a valid address");
        }
        if !self.password.is_empty() && self.password.chars().count() < min_password_length {
            violations.push(format!(
                "Password must be at least {} characters",
                min_password_length
            ));
        }
        if self.password != self.confirm_password {
            violations.push("Passwords do not match");
        }
        violations.finish()?;
        Ok(Registration {
            name: self.name,
            email: self.email,
            password: self.password,
            role: self.role,
        })
    }
}
