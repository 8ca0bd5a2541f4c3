use std::rc::Rc;

use leptos::*;

use crate::{
    config::{self, AppConfig},
    data::{
        seed,
        types::{Identity, Role},
    },
    error::{AppError, Violations},
    utils::{
        id,
        storage::{KeyValueStore, LocalStorageStore, MemoryStore},
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Current identity plus the identity set it is checked against.
///
/// Identities added by `register` live only as long as this store; the
/// persisted session record outlives them, so a registered user whose tab is
/// reloaded stays signed in but cannot sign in again.
pub struct SessionStore {
    identities: Vec<Identity>,
    current: Option<Identity>,
    storage: Rc<dyn KeyValueStore>,
    config: AppConfig,
}

impl SessionStore {
    pub fn init(storage: Rc<dyn KeyValueStore>, config: AppConfig) -> Self {
        let current = load_persisted(storage.as_ref(), &config.storage_key);
        if let Some(identity) = &current {
            log::info!("Restored session for {}", identity.email);
        }
        Self {
            identities: seed::demo_identities(),
            current,
            storage,
            config,
        }
    }

    pub fn current_identity(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    #[cfg(test)]
    pub fn identities(&self) -> &[Identity] {
        &self.identities
    }

    pub fn login(
        &mut self,
        email: &str,
        password: &str,
        role_hint: Option<Role>,
    ) -> Result<Identity, AppError> {
        let found = self
            .identities
            .iter()
            .find(|identity| identity.email == email)
            .filter(|_| self.config.accepts_password(password))
            .cloned()
            .ok_or_else(|| {
                log::warn!("Login rejected for {}", email);
                AppError::Unauthorized("Invalid email or password".into())
            })?;
        if let Some(expected) = role_hint {
            if found.role() != expected {
                log::warn!(
                    "Login rejected for {}: signed in as {} but account is {}",
                    email,
                    expected,
                    found.role()
                );
                return Err(AppError::Unauthorized(format!(
                    "This account cannot sign in as {}",
                    expected
                )));
            }
        }
        self.begin(found.clone());
        log::info!("Signed in {} ({})", found.email, found.role());
        Ok(found)
    }

    pub fn register(&mut self, registration: Registration) -> Result<Identity, AppError> {
        let Registration {
            name,
            email,
            password,
            role,
        } = registration;
        let (name, email) = (name.trim().to_string(), email.trim().to_string());
        Violations::new()
            .require(&name, "Name")
            .require(&email, "Email")
            .require(&password, "Password")
            .finish()?;
        if self.identities.iter().any(|identity| identity.email == email) {
            log::warn!("Registration rejected: {} already exists", email);
            return Err(AppError::Conflict(
                "An account with this email already exists".into(),
            ));
        }

        let stamp = id::next_timestamp();
        let employee_id = match role {
            Role::Employee => Some(format!("emp_{}", stamp)),
            Role::Admin => None,
        };
        let identity = Identity::new(stamp.to_string(), name, email, role, employee_id);
        self.identities.push(identity.clone());
        self.begin(identity.clone());
        log::info!(
            "Registered {} ({}); the account lasts until the app reloads",
            identity.email,
            identity.role()
        );
        Ok(identity)
    }

    pub fn logout(&mut self) {
        if let Some(identity) = self.current.take() {
            log::info!("Signed out {}", identity.email);
        }
        if let Err(err) = self.storage.remove_item(&self.config.storage_key) {
            log::warn!("Could not clear persisted session: {}", err);
        }
    }

    fn begin(&mut self, identity: Identity) {
        match serde_json::to_string(&identity) {
            Ok(json) => {
                if let Err(err) = self.storage.set_item(&self.config.storage_key, &json) {
                    log::warn!("Session for {} is not persisted: {}", identity.email, err);
                }
            }
            Err(err) => log::warn!("Could not serialize session: {}", err),
        }
        self.current = Some(identity);
    }
}

fn load_persisted(storage: &dyn KeyValueStore, key: &str) -> Option<Identity> {
    let raw = match storage.get_item(key) {
        Ok(raw) => raw?,
        Err(err) => {
            log::warn!("Persisted session unavailable: {}", err);
            return None;
        }
    };
    match serde_json::from_str::<Identity>(&raw) {
        Ok(identity) => Some(identity),
        Err(err) => {
            log::warn!("Discarding unreadable persisted session: {}", err);
            None
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<Identity>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(Identity::role)
    }
}

/// Session handle every component reads identity from.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub state: ReadSignal<AuthState>,
    set_state: WriteSignal<AuthState>,
    store: StoredValue<SessionStore>,
}

impl SessionContext {
    pub fn new(store: SessionStore) -> Self {
        let (state, set_state) = create_signal(AuthState {
            user: store.current_identity().cloned(),
        });
        Self {
            state,
            set_state,
            store: store_value(store),
        }
    }

    pub fn login(
        &self,
        email: &str,
        password: &str,
        role_hint: Option<Role>,
    ) -> Result<Identity, AppError> {
        let result = self
            .store
            .try_update_value(|store| store.login(email, password, role_hint))
            .unwrap_or_else(|| Err(disposed()));
        self.sync();
        result
    }

    pub fn register(&self, registration: Registration) -> Result<Identity, AppError> {
        let result = self
            .store
            .try_update_value(|store| store.register(registration))
            .unwrap_or_else(|| Err(disposed()));
        self.sync();
        result
    }

    pub fn logout(&self) {
        self.store.update_value(|store| store.logout());
        self.sync();
    }

    pub fn identity(&self) -> Option<Identity> {
        self.state.get().user
    }

    fn sync(&self) {
        let user = self
            .store
            .with_value(|store| store.current_identity().cloned());
        self.set_state.set(AuthState { user });
    }
}

fn disposed() -> AppError {
    AppError::Storage("session is no longer available".into())
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let store = SessionStore::init(Rc::new(LocalStorageStore), config::current().clone());
    provide_context(SessionContext::new(store));
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| {
        SessionContext::new(SessionStore::init(
            Rc::new(MemoryStore::new()),
            AppConfig::default(),
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_STORAGE_KEY;

    fn store_with(storage: Rc<MemoryStore>) -> SessionStore {
        SessionStore::init(storage, AppConfig::default())
    }

    fn fresh() -> (Rc<MemoryStore>, SessionStore) {
        let storage = Rc::new(MemoryStore::new());
        (storage.clone(), store_with(storage))
    }

    #[test]
    fn admin_signs_in_with_admin_password() {
        let (storage, mut store) = fresh();
        let identity = store.login("admin@company.com", "admin123", None).unwrap();
        assert_eq!(identity.role(), Role::Admin);
        assert_eq!(store.current_identity(), Some(&identity));
        let persisted = storage.get_item(DEFAULT_STORAGE_KEY).unwrap().unwrap();
        assert_eq!(serde_json::from_str::<Identity>(&persisted).unwrap(), identity);
    }

    #[test]
    fn role_hint_mismatch_fails_despite_correct_password() {
        let (storage, mut store) = fresh();
        let err = store
            .login("sarah.johnson@company.com", "password", Some(Role::Admin))
            .unwrap_err();
        assert_eq!(err.code(), "UNAUTHORIZED");
        assert!(store.current_identity().is_none());
        assert!(storage.get_item(DEFAULT_STORAGE_KEY).unwrap().is_none());
    }

    #[test]
    fn matching_role_hint_is_accepted() {
        let (_, mut store) = fresh();
        let identity = store
            .login("sarah.johnson@company.com", "password", Some(Role::Employee))
            .unwrap();
        assert_eq!(identity.employee_id.as_deref(), Some("emp_001"));
    }

    #[test]
    fn unknown_email_and_wrong_password_fail() {
        let (_, mut store) = fresh();
        assert!(store.login("nobody@company.com", "password", None).is_err());
        assert!(store.login("admin@company.com", "letmein", None).is_err());
        assert!(store.current_identity().is_none());
    }

    #[test]
    fn login_matches_email_exactly() {
        let (_, mut store) = fresh();
        let err = store
            .login(" admin@company.com ", "admin123", None)
            .unwrap_err();
        assert_eq!(err.code(), "UNAUTHORIZED");
        assert!(store.login("Admin@company.com", "admin123", None).is_err());
        assert!(store.current_identity().is_none());
        assert!(store.login("admin@company.com", "admin123", None).is_ok());
    }

    #[test]
    fn failed_login_keeps_existing_session() {
        let (_, mut store) = fresh();
        store.login("mike.davis@company.com", "password", None).unwrap();
        assert!(store.login("admin@company.com", "nope", None).is_err());
        assert_eq!(
            store.current_identity().map(|i| i.email.as_str()),
            Some("mike.davis@company.com")
        );
    }

    #[test]
    fn register_with_seeded_email_changes_nothing() {
        let (_, mut store) = fresh();
        store.login("mike.davis@company.com", "password", None).unwrap();
        let before = store.identities().to_vec();
        let err = store
            .register(Registration {
                name: "Sarah Again".into(),
                email: "sarah.johnson@company.com".into(),
                password: "secret1".into(),
                role: Role::Employee,
            })
            .unwrap_err();
        assert_eq!(err.code(), "CONFLICT");
        assert_eq!(store.identities(), before.as_slice());
        assert_eq!(
            store.current_identity().map(|i| i.email.as_str()),
            Some("mike.davis@company.com")
        );
    }

    #[test]
    fn register_employee_generates_employee_id_and_signs_in() {
        let (storage, mut store) = fresh();
        let identity = store
            .register(Registration {
                name: "New Hire".into(),
                email: "new.hire@company.com".into(),
                password: "secret1".into(),
                role: Role::Employee,
            })
            .unwrap();
        assert!(identity.employee_id.as_deref().unwrap().starts_with("emp_"));
        assert_eq!(store.identities().len(), 4);
        assert_eq!(store.current_identity(), Some(&identity));
        assert!(storage.get_item(DEFAULT_STORAGE_KEY).unwrap().is_some());
    }

    #[test]
    fn register_admin_has_no_employee_id() {
        let (_, mut store) = fresh();
        let identity = store
            .register(Registration {
                name: "Second Admin".into(),
                email: "ops@company.com".into(),
                password: "secret1".into(),
                role: Role::Admin,
            })
            .unwrap();
        assert!(identity.employee_id.is_none());
    }

    #[test]
    fn register_requires_fields() {
        let (_, mut store) = fresh();
        let err = store
            .register(Registration {
                name: " ".into(),
                email: "".into(),
                password: "".into(),
                role: Role::Employee,
            })
            .unwrap_err();
        assert_eq!(err.details().len(), 3);
        assert_eq!(store.identities().len(), 3);
    }

    #[test]
    fn logout_clears_memory_and_storage() {
        let (storage, mut store) = fresh();
        store.login("admin@company.com", "password", None).unwrap();
        store.logout();
        assert!(store.current_identity().is_none());
        assert!(storage.get_item(DEFAULT_STORAGE_KEY).unwrap().is_none());
    }

    #[test]
    fn session_survives_restart() {
        let (storage, mut store) = fresh();
        store.login("sarah.johnson@company.com", "password", None).unwrap();
        let restarted = store_with(storage);
        assert_eq!(
            restarted.current_identity().map(|i| i.email.as_str()),
            Some("sarah.johnson@company.com")
        );
    }

    #[test]
    fn registered_identity_does_not_survive_restart() {
        let (storage, mut store) = fresh();
        store
            .register(Registration {
                name: "Temp".into(),
                email: "temp@company.com".into(),
                password: "secret1".into(),
                role: Role::Employee,
            })
            .unwrap();
        let mut restarted = store_with(storage);
        assert_eq!(
            restarted.current_identity().map(|i| i.email.as_str()),
            Some("temp@company.com")
        );
        restarted.logout();
        assert!(restarted.login("temp@company.com", "password", None).is_err());
    }

    #[test]
    fn corrupt_persisted_session_is_ignored() {
        let storage = Rc::new(MemoryStore::with_item(DEFAULT_STORAGE_KEY, "{not json"));
        let store = store_with(storage);
        assert!(store.current_identity().is_none());
    }

}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::memory_session_store, ssr::with_runtime};

    #[test]
    fn context_tracks_store_transitions() {
        with_runtime(|| {
            let ctx = SessionContext::new(memory_session_store());
            assert!(!ctx.state.get().is_authenticated());
            ctx.login("admin@company.com", "admin123", None).unwrap();
            assert_eq!(ctx.state.get().role(), Some(Role::Admin));
            assert!(ctx.login("admin@company.com", "bad", None).is_err());
            assert_eq!(ctx.state.get().role(), Some(Role::Admin));
            ctx.logout();
            assert!(ctx.identity().is_none());
        });
    }

    #[test]
    fn use_session_falls_back_without_provider() {
        with_runtime(|| {
            let ctx = use_session();
            assert!(ctx.identity().is_none());
        });
    }
}
