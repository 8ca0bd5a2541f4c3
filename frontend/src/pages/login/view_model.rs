use super::utils::{validate_credentials, LoginFormState, LOGIN_FAILURE};
use crate::{
    data::types::Identity,
    error::AppError,
    state::session::{use_session, SessionContext},
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub error: RwSignal<Option<AppError>>,
    session: SessionContext,
}

impl LoginViewModel {
    /// Validates the form and signs in with the selected role as a hint.
    pub fn submit(&self) -> Result<Identity, AppError> {
        let email = self.form.email.get_untracked();
        let password = self.form.password.get_untracked();
        if let Err(err) = validate_credentials(&email, &password) {
            self.error.set(Some(err.clone()));
            return Err(err);
        }
        match self
            .session
            .login(&email, &password, Some(self.form.role.get_untracked()))
        {
            Ok(identity) => {
                self.error.set(None);
                self.form.password.set(String::new());
                Ok(identity)
            }
            Err(err) => {
                self.error
                    .set(Some(AppError::Unauthorized(LOGIN_FAILURE.to_string())));
                Err(err)
            }
        }
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    LoginViewModel {
        form: LoginFormState::default(),
        error: create_rw_signal(None::<AppError>),
        session: use_session(),
    }
}
