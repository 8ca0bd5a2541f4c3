use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::AppError;

/// String key-value area the session is persisted into.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError>;
    fn remove_item(&self, key: &str) -> Result<(), AppError>;
}

#[cfg(target_arch = "wasm32")]
pub fn window() -> Result<web_sys::Window, AppError> {
    web_sys::window().ok_or_else(|| AppError::Storage("No window object".to_string()))
}

#[cfg(target_arch = "wasm32")]
pub fn local_storage() -> Result<web_sys::Storage, AppError> {
    window()?
        .local_storage()
        .map_err(|_| AppError::Storage("No localStorage".to_string()))?
        .ok_or_else(|| AppError::Storage("No localStorage".to_string()))
}

/// Browser `localStorage`, resolved on every call so a blocked storage area
/// surfaces as an error instead of a panic at startup.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStorageStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        local_storage()?
            .get_item(key)
            .map_err(|_| AppError::Storage(format!("Failed to read '{}'", key)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| AppError::Storage(format!("Failed to write '{}'", key)))
    }

    fn remove_item(&self, key: &str) -> Result<(), AppError> {
        local_storage()?
            .remove_item(key)
            .map_err(|_| AppError::Storage(format!("Failed to remove '{}'", key)))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for LocalStorageStore {
    fn get_item(&self, _key: &str) -> Result<Option<String>, AppError> {
        Err(AppError::Storage("localStorage requires a browser".to_string()))
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), AppError> {
        Err(AppError::Storage("localStorage requires a browser".to_string()))
    }

    fn remove_item(&self, _key: &str) -> Result<(), AppError> {
        Err(AppError::Storage("localStorage requires a browser".to_string()))
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), AppError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_and_removes() {
        let store = MemoryStore::new();
        assert_eq!(store.get_item("k").unwrap(), None);
        store.set_item("k", "v").unwrap();
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("v"));
        store.remove_item("k").unwrap();
        assert_eq!(store.get_item("k").unwrap(), None);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn local_storage_reports_missing_browser() {
        let err = LocalStorageStore.get_item("k").unwrap_err();
        assert_eq!(err.code(), "STORAGE_ERROR");
    }
}
