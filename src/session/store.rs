//! Session Token Storage
//!
//! The one piece of persisted client state: an opaque token under a single key.

use std::cell::RefCell;

use crate::error::{ClientError, ClientResult};

/// Durable slot holding the session token.
///
/// Writes are visible to the next `get` immediately. An empty token reads as absent.
pub trait SessionStore {
    fn get(&self) -> Option<String>;

    fn set(&self, token: &str) -> ClientResult<()>;

    fn clear(&self);
}

/// `window.localStorage`, surviving page reloads
#[derive(Debug, Clone)]
pub struct BrowserSessionStore {
    key: String,
}

impl BrowserSessionStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for BrowserSessionStore {
    fn get(&self) -> Option<String> {
        Self::storage()?
            .get_item(&self.key)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }

    fn set(&self, token: &str) -> ClientResult<()> {
        let storage = Self::storage()
            .ok_or_else(|| ClientError::Storage("localStorage is unavailable".to_string()))?;
        storage
            .set_item(&self.key, token)
            .map_err(|e| ClientError::Storage(format!("{:?}", e)))
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.remove_item(&self.key) {
                log::warn!("Failed to remove session token: {:?}", e);
            }
        }
    }
}

/// In-process slot for tests and non-browser hosts
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: RefCell<Option<String>>,
}

impl MemorySessionStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RefCell::new(Some(token.into())),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<String> {
        self.token.borrow().clone().filter(|token| !token.is_empty())
    }

    fn set(&self, token: &str) -> ClientResult<()> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
    }
}
