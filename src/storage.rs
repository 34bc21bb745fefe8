//! Session-scoped key/value storage.
//!
//! Values live for one browsing session. The browser implementation is backed by
//! `window.sessionStorage`; the in-memory one is used by tests and anywhere a
//! browser is not around.
use crate::errors::StorageError;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub trait SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Store handed around through the Leptos context.
pub type SharedSessionStore = Rc<dyn SessionStore>;

#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserSessionStorage;

impl BrowserSessionStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .session_storage()
            .map_err(|_| StorageError::Unavailable)?
            .ok_or(StorageError::Unavailable)
    }
}

impl SessionStore for BrowserSessionStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| StorageError::Unavailable)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::WriteRejected(key.to_string()))
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemorySessionStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every entry, the equivalent of the browser session ending.
    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store provided by `App`, or the browser's session storage when no one provided one.
pub fn use_session_store() -> SharedSessionStore {
    leptos::use_context::<SharedSessionStore>().unwrap_or_else(|| Rc::new(BrowserSessionStorage))
}
