//! Durable key-value storage for per-role credentials. The browser backs this
//! with `localStorage`; tests use an in-memory map. Tokens are stored as plain
//! strings and profiles as JSON; the key names are shared with deployed
//! clients and must not change.

use crate::types::{Profile, Role};
use thiserror::Error;
use tracing::warn;

pub const ADMIN_TOKEN_KEY: &str = "adminToken";
pub const ADMIN_PROFILE_KEY: &str = "adminUser";
pub const STUDENT_TOKEN_KEY: &str = "userToken";
pub const STUDENT_PROFILE_KEY: &str = "userData";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("failed to write key {key}: {reason}")]
    Write { key: String, reason: String },
    #[error("failed to encode cached profile")]
    Encode(#[from] serde_json::Error),
}

/// Minimal string key-value store with `localStorage` semantics.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    /// Returns an error when the backing store rejects the write (quota,
    /// private mode, missing window).
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str);
}

/// Storage keys owned by one role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoleKeys {
    pub token: &'static str,
    pub profile: &'static str,
}

impl Role {
    pub const fn storage_keys(self) -> RoleKeys {
        match self {
            Role::Admin => RoleKeys {
                token: ADMIN_TOKEN_KEY,
                profile: ADMIN_PROFILE_KEY,
            },
            Role::Student => RoleKeys {
                token: STUDENT_TOKEN_KEY,
                profile: STUDENT_PROFILE_KEY,
            },
        }
    }
}

/// Reads a non-empty token for `role`.
pub fn load_token<S: KeyValueStore + ?Sized>(store: &S, role: Role) -> Option<String> {
    store
        .get(role.storage_keys().token)
        .filter(|token| !token.trim().is_empty())
}

/// Reads the cached profile for `role`. Corrupt entries read as absent.
pub fn load_profile<S: KeyValueStore + ?Sized>(store: &S, role: Role) -> Option<Profile> {
    let raw = store.get(role.storage_keys().profile)?;
    match serde_json::from_str(&raw) {
        Ok(profile) => Some(profile),
        Err(err) => {
            warn!(%role, "ignoring unreadable cached profile: {err}");
            None
        }
    }
}

/// Writes the token, then the cached profile. The two writes are not atomic.
///
/// # Errors
/// Returns the first write or encoding failure.
pub fn persist_credentials<S: KeyValueStore + ?Sized>(
    store: &S,
    role: Role,
    token: &str,
    profile: &Profile,
) -> Result<(), StorageError> {
    let keys = role.storage_keys();
    store.set(keys.token, token)?;
    persist_profile(store, role, profile)
}

/// Refreshes only the cached profile copy for `role`.
///
/// # Errors
/// Returns an error when encoding or the write fails.
pub fn persist_profile<S: KeyValueStore + ?Sized>(
    store: &S,
    role: Role,
    profile: &Profile,
) -> Result<(), StorageError> {
    let encoded = serde_json::to_string(profile)?;
    store.set(role.storage_keys().profile, &encoded)
}

pub fn clear_role<S: KeyValueStore + ?Sized>(store: &S, role: Role) {
    let keys = role.storage_keys();
    store.remove(keys.token);
    store.remove(keys.profile);
}

pub fn clear_all<S: KeyValueStore + ?Sized>(store: &S) {
    for role in Role::RESTORE_ORDER {
        clear_role(store, role);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::{cell::RefCell, collections::BTreeMap};

    #[derive(Default)]
    struct MapStore(RefCell<BTreeMap<String, String>>);

    impl KeyValueStore for MapStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) {
            self.0.borrow_mut().remove(key);
        }
    }

    #[test]
    fn role_keys_match_legacy_names() {
        assert_eq!(Role::Admin.storage_keys().token, "adminToken");
        assert_eq!(Role::Admin.storage_keys().profile, "adminUser");
        assert_eq!(Role::Student.storage_keys().token, "userToken");
        assert_eq!(Role::Student.storage_keys().profile, "userData");
    }

    #[test]
    fn persist_then_load_round_trips() {
        let store = MapStore::default();
        let profile = Profile {
            email: Some("jdoe@paruluniversity.ac.in".to_string()),
            ..Profile::default()
        };

        persist_credentials(&store, Role::Student, "tok", &profile).unwrap();

        assert_eq!(load_token(&store, Role::Student).as_deref(), Some("tok"));
        assert_eq!(load_profile(&store, Role::Student), Some(profile));
        assert_eq!(load_token(&store, Role::Admin), None);
    }

    #[test]
    fn blank_tokens_and_corrupt_profiles_read_as_absent() {
        let store = MapStore::default();
        store.set("adminToken", "  ").unwrap();
        store.set("adminUser", "{not json").unwrap();

        assert_eq!(load_token(&store, Role::Admin), None);
        assert_eq!(load_profile(&store, Role::Admin), None);
    }

    #[test]
    fn clear_all_removes_both_roles() {
        let store = MapStore::default();
        let profile = Profile::default();
        persist_credentials(&store, Role::Admin, "a", &profile).unwrap();
        persist_credentials(&store, Role::Student, "s", &profile).unwrap();

        clear_all(&store);

        assert!(store.0.borrow().is_empty());
    }
}
