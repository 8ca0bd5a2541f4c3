use leptos::{IntoView, View};
use thiserror::Error;

use crate::data::types::RequestStatus;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Conflict(String),
    #[error("Validation failed")]
    Validation(Vec<String>),
    #[error("{0} not found")]
    NotFound(String),
    #[error("request is already {from}")]
    InvalidTransition {
        from: RequestStatus,
        to: RequestStatus,
    },
    #[error("storage unavailable: {0}")]
    Storage(String),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(vec![msg.into()])
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Unauthorized(_) => "UNAUTHORIZED",
            AppError::Conflict(_) => "CONFLICT",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::InvalidTransition { .. } => "INVALID_TRANSITION",
            AppError::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Individual messages for a validation failure; empty for other kinds.
    pub fn details(&self) -> &[String] {
        match self {
            AppError::Validation(errors) => errors,
            _ => &[],
        }
    }
}

impl IntoView for AppError {
    fn into_view(self) -> View {
        self.to_string().into_view()
    }
}

/// Collects field checks and turns them into a single validation error.
#[derive(Debug, Default)]
pub struct Violations(Vec<String>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn require(&mut self, value: &str, field: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.0.push(format!("{} is required", field));
        }
        self
    }

    pub fn push(&mut self, msg: impl Into<String>) -> &mut Self {
        self.0.push(msg.into());
        self
    }

    pub fn finish(&mut self) -> Result<(), AppError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(std::mem::take(&mut self.0)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_variant() {
        assert_eq!(AppError::validation("x").code(), "VALIDATION_ERROR");
        assert_eq!(AppError::Conflict("dup".into()).code(), "CONFLICT");
        assert_eq!(
            AppError::InvalidTransition {
                from: RequestStatus::Approved,
                to: RequestStatus::Rejected
            }
            .code(),
            "INVALID_TRANSITION"
        );
    }

    #[test]
    fn violations_collect_every_missing_field() {
        let err = Violations::new()
            .require("", "Name")
            .require("  ", "Email")
            .require("IT", "Department")
            .finish()
            .unwrap_err();
        assert_eq!(
            err.details(),
            &["Name is required".to_string(), "Email is required".to_string()]
        );
    }

    #[test]
    fn violations_pass_when_clean() {
        assert!(Violations::new().require("ok", "Name").finish().is_ok());
    }
}
