use leptos::*;

use crate::{data::types::Role, error::Violations, error::AppError};

/// Shown for every rejected sign-in so the form never reveals which part was wrong.
pub const LOGIN_FAILURE: &str = "Invalid credentials. Please check your email, password and role.";

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub role: RwSignal<Role>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            role: create_rw_signal(Role::Employee),
        }
    }
}

impl LoginFormState {
    pub fn fill_demo(&self, email: &str, password: &str, role: Role) {
        self.email.set(email.to_string());
        self.password.set(password.to_string());
        self.role.set(role);
    }
}

pub fn validate_credentials(email: &str, password: &str) -> Result<(), AppError> {
    Violations::new()
        .require(email, "Email")
        .require(password, "Password")
        .finish()
}

pub struct DemoAccount {
    pub label: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub role: Role,
}

pub const DEMO_ACCOUNTS: &[DemoAccount] = &[
    DemoAccount {
        label: "Admin",
        email: "admin@company.com",
        password: "admin123",
        role: Role::Admin,
    },
    DemoAccount {
        label: "Employee",
        email: "sarah.johnson@company.com",
        password: "password",
        role: Role::Employee,
    },
];
