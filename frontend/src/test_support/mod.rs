#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use std::rc::Rc;

    use crate::config::AppConfig;
    use crate::data::seed;
    use crate::data::types::{Identity, Role};
    use crate::state::session::{SessionContext, SessionStore};
    use crate::utils::storage::MemoryStore;
    use leptos::*;

    pub fn admin_identity() -> Identity {
        seed::demo_identities()
            .into_iter()
            .find(|identity| identity.role() == Role::Admin)
            .expect("seeded admin")
    }

    /// Sarah Johnson, `emp_001`.
    pub fn employee_identity() -> Identity {
        seed::demo_identities()
            .into_iter()
            .find(|identity| identity.employee_id.as_deref() == Some("emp_001"))
            .expect("seeded employee")
    }

    pub fn memory_session_store() -> SessionStore {
        SessionStore::init(Rc::new(MemoryStore::new()), AppConfig::default())
    }

    /// Provides a session context already signed in as `identity` (or signed out).
    pub fn provide_session(identity: Option<Identity>) -> SessionContext {
        let session = SessionContext::new(memory_session_store());
        if let Some(identity) = identity {
            let password = if identity.is_admin() { "admin123" } else { "password" };
            session
                .login(&identity.email, password, None)
                .expect("demo login");
        }
        provide_context(session);
        session
    }
}
