use crate::error::{AppError, Violations};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordChange {
    pub fn validate(&self, min_password_length: usize) -> Result<(), AppError> {
        let mut violations = Violations::new();
        violations
            .require(&self.current_password, "Current password")
            .require(&self.new_password, "New password");
        if self.new_password != self.confirm_password {
            violations.push("New passwords do not match");
        }
        if !self.new_password.is_empty()
            && self.new_password.chars().count() < min_password_length
        {
            violations.push(format!(
                "Password must be at least {} characters",
                min_password_length
            ));
        }
        violations.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(new: &str, confirm: &str) -> PasswordChange {
        PasswordChange {
            current_password: "password".into(),
            new_password: new.into(),
            confirm_password: confirm.into(),
        }
    }

    #[test]
    fn accepts_matching_long_enough_password() {
        assert!(change("hunter22", "hunter22").validate(6).is_ok());
    }

    #[test]
    fn reports_mismatch_and_length() {
        let err = change("abc", "abd").validate(6).unwrap_err();
        assert_eq!(
            err.details(),
            &[
                "New passwords do not match".to_string(),
                "Password must be at least 6 characters".to_string()
            ]
        );
    }

    #[test]
    fn current_password_is_required() {
        let mut missing = change("hunter22", "hunter22");
        missing.current_password.clear();
        assert_eq!(
            missing.validate(6).unwrap_err().details(),
            &["Current password is required".to_string()]
        );
    }
}
