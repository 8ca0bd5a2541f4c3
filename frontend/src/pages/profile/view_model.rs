use leptos::*;

use crate::{
    config,
    data::{repository::use_repository, types::Employee},
    error::AppError,
    pages::profile::utils::PasswordChange,
    state::{message::MessageState, session::use_session},
};

#[derive(Clone, Copy)]
pub struct ProfileViewModel {
    pub employee: Signal<Option<Employee>>,
    pub password: RwSignal<PasswordChange>,
    pub dialog_open: RwSignal<bool>,
    pub form_error: RwSignal<Option<AppError>>,
    pub message: RwSignal<MessageState>,
}

impl ProfileViewModel {
    pub fn open_dialog(&self) {
        self.password.set(PasswordChange::default());
        self.form_error.set(None);
        self.dialog_open.set(true);
    }

    pub fn close_dialog(&self) {
        self.dialog_open.set(false);
    }

    /// Validates the change; there is no credential store to write it to.
    pub fn change_password(&self) -> Result<(), AppError> {
        let result = self
            .password
            .with_untracked(|change| change.validate(config::current().min_password_length));
        match &result {
            Ok(()) => {
                log::info!("Password change accepted");
                self.form_error.set(None);
                self.password.set(PasswordChange::default());
                self.dialog_open.set(false);
                self.message
                    .update(|m| m.set_success("Password updated successfully"));
            }
            Err(err) => self.form_error.set(Some(err.clone())),
        }
        result
    }
}

pub fn use_profile_view_model() -> ProfileViewModel {
    let repo = use_repository();
    let session = use_session();
    let employee = Signal::derive(move || {
        session
            .identity()
            .and_then(|identity| repo.employee_by_email(&identity.email))
    });
    ProfileViewModel {
        employee,
        password: create_rw_signal(PasswordChange::default()),
        dialog_open: create_rw_signal(false),
        form_error: create_rw_signal(None),
        message: create_rw_signal(MessageState::default()),
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_identity, employee_identity, provide_session};
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn employee_profile_resolves_by_email() {
        with_runtime(|| {
            provide_session(Some(employee_identity()));
            let vm = use_profile_view_model();
            assert_eq!(vm.employee.get().map(|e| e.id), Some("emp_001".to_string()));
        });
    }

    #[test]
    fn admin_has_no_employee_record() {
        with_runtime(|| {
            provide_session(Some(admin_identity()));
            assert!(use_profile_view_model().employee.get().is_none());
        });
    }

    #[test]
    fn short_password_keeps_dialog_open() {
        with_runtime(|| {
            provide_session(Some(employee_identity()));
            let vm = use_profile_view_model();
            vm.open_dialog();
            vm.password.set(PasswordChange {
                current_password: "password".into(),
                new_password: "abc".into(),
                confirm_password: "abc".into(),
            });
            assert!(vm.change_password().is_err());
            assert!(vm.dialog_open.get());
            assert!(vm.form_error.get().is_some());

            vm.password.update(|p| {
                p.new_password = "longer1".into();
                p.confirm_password = "longer1".into();
            });
            vm.change_password().unwrap();
            assert!(!vm.dialog_open.get());
            assert!(vm.message.get().success.is_some());
        });
    }
}
