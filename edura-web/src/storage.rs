//! Durable client-side storage for the session token and user profile.
//!
//! The browser implementation is backed by `localStorage`. The token is
//! stored as the raw bearer string and the user as JSON, under the keys
//! [`TOKEN_KEY`] and [`USER_KEY`].

use gloo_storage::{LocalStorage, Storage};
use shared::models::UserProfile;
use std::fmt;
use thiserror::Error;

/// Key holding the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Key holding the serialized [`UserProfile`].
pub const USER_KEY: &str = "user";

/// Failures writing to durable storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing store rejected the write (quota, private mode, ...).
    #[error("failed to write `{key}` to durable storage")]
    Write { key: String },
    /// The profile could not be encoded.
    #[error("failed to encode the user profile: {0}")]
    Encode(#[from] serde_json::Error),
}

/// String key/value storage that survives page reloads.
pub trait SessionStorage: fmt::Debug {
    /// Read a value.
    fn get(&self, key: &str) -> Option<String>;
    /// Write a value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Remove a value; missing keys are ignored.
    fn remove(&self, key: &str);
}

/// `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|_| StorageError::Write {
                key: key.to_string(),
            })
    }

    fn remove(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

/// Read the stored bearer token.
pub fn stored_token(storage: &dyn SessionStorage) -> Option<String> {
    storage.get(TOKEN_KEY).filter(|token| !token.is_empty())
}

/// Persist a freshly issued token together with its user.
///
/// On failure nothing is left behind: a half-written pair is removed.
pub fn persist_session(
    storage: &dyn SessionStorage,
    token: &str,
    user: &UserProfile,
) -> Result<(), StorageError> {
    let encoded = serde_json::to_string(user)?;
    let written = storage
        .set(TOKEN_KEY, token)
        .and_then(|()| storage.set(USER_KEY, &encoded));
    if written.is_err() {
        clear_session(storage);
    }
    written
}

/// Load the persisted session, if a complete and readable one exists.
///
/// A token without a user (or with a user that no longer parses) is
/// discarded so the next start begins signed out.
pub fn load_session(storage: &dyn SessionStorage) -> Option<(String, UserProfile)> {
    let token = stored_token(storage);
    let user = storage.get(USER_KEY);

    match (token, user) {
        (Some(token), Some(raw_user)) => match serde_json::from_str::<UserProfile>(&raw_user) {
            Ok(user) => Some((token, user)),
            Err(err) => {
                log::warn!("discarding stored session with unreadable user: {err}");
                clear_session(storage);
                None
            }
        },
        (None, None) => None,
        _ => {
            log::warn!("discarding incomplete stored session");
            clear_session(storage);
            None
        }
    }
}

/// Remove both session keys.
pub fn clear_session(storage: &dyn SessionStorage) {
    storage.remove(TOKEN_KEY);
    storage.remove(USER_KEY);
}

/// In-memory storage used by tests in place of `localStorage`.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: std::cell::RefCell<std::collections::HashMap<String, String>>,
    reject_writes: std::cell::Cell<bool>,
}

#[cfg(test)]
impl MemoryStorage {
    /// Storage whose writes all fail, like a full quota.
    pub fn read_only() -> Self {
        let storage = Self::default();
        storage.reject_writes();
        storage
    }

    /// Make every later write fail, keeping what is already stored.
    pub fn reject_writes(&self) {
        self.reject_writes.set(true);
    }

    /// Whether `key` currently holds a value.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

#[cfg(test)]
impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.reject_writes.get() {
            return Err(StorageError::Write {
                key: key.to_string(),
            });
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
