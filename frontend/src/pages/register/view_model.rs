use super::utils::RegisterFormState;
use crate::{
    config,
    data::types::Identity,
    error::AppError,
    state::session::{use_session, SessionContext},
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct RegisterViewModel {
    pub form: RegisterFormState,
    pub error: RwSignal<Option<AppError>>,
    session: SessionContext,
}

impl RegisterViewModel {
    pub fn submit(&self) -> Result<Identity, AppError> {
        let result = self
            .form
            .snapshot()
            .validate(config::current().min_password_length)
            .and_then(|registration| self.session.register(registration));
        match &result {
            Ok(_) => self.error.set(None),
            Err(err) => self.error.set(Some(err.clone())),
        }
        result
    }
}

pub fn use_register_view_model() -> RegisterViewModel {
    RegisterViewModel {
        form: RegisterFormState::default(),
        error: create_rw_signal(None::<AppError>),
        session: use_session(),
    }
}
