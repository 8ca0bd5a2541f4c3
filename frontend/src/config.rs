use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_STORAGE_KEY: &str = "currentUser";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Local-storage key holding the serialized session identity.
    pub storage_key: String,
    pub demo_passwords: Vec<String>,
    pub default_leave_balance: u32,
    pub min_password_length: usize,
    pub time_zone: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            demo_passwords: vec!["password".to_string(), "admin123".to_string()],
            default_leave_balance: 20,
            min_password_length: 6,
            time_zone: "UTC".to_string(),
        }
    }
}

impl AppConfig {
    pub fn accepts_password(&self, password: &str) -> bool {
        self.demo_passwords.iter().any(|p| p == password)
    }

    pub fn tz(&self) -> Tz {
        self.time_zone.parse::<Tz>().unwrap_or_else(|_| {
            log::warn!("Unknown time zone '{}', using UTC", self.time_zone);
            Tz::UTC
        })
    }
}

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> Option<AppConfig> {
    // Optional global: window.__WORKFORCE_CONFIG = { storage_key: "...", time_zone: "..." }
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &"__WORKFORCE_CONFIG".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let raw = js_sys::JSON::stringify(&any).ok()?.as_string()?;
    match serde_json::from_str::<AppConfig>(&raw) {
        Ok(cfg) => Some(cfg),
        Err(err) => {
            log::warn!("Ignoring malformed __WORKFORCE_CONFIG: {}", err);
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn snapshot_from_globals() -> Option<AppConfig> {
    None
}

pub fn current() -> &'static AppConfig {
    APP_CONFIG.get_or_init(|| snapshot_from_globals().unwrap_or_default())
}

pub fn init() {
    let cfg = current();
    log::info!(
        "Runtime config initialized (storage key '{}', time zone {})",
        cfg.storage_key,
        cfg.time_zone
    );
}

pub fn current_time_zone() -> Tz {
    current().tz()
}
